//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use std::sync::Arc;

use proptest::prelude::*;
use zi_dialect::errors::ZiError;
use zi_dialect::mapping::ZiMappingDictionary;
use zi_dialect::seed::seeded_rng;
use zi_dialect::substitute::ZiDialectSubstituter;

fn substituter(json: &str, probability: f64) -> ZiDialectSubstituter {
    let mapping = ZiMappingDictionary::from_json_str(json).unwrap();
    ZiDialectSubstituter::new(Arc::new(mapping), probability).unwrap()
}

fn run(sub: &ZiDialectSubstituter, text: &str, seed: u64) -> String {
    sub.substitute(text, &mut seeded_rng(seed)).unwrap()
}

const WITH: &str = r#"{"with": ["wit"]}"#;

#[test]
fn only_whole_words_are_replaced() {
    let sub = substituter(WITH, 1.0);
    assert_eq!(run(&sub, "within the with", 1), "within the wit");
    assert_eq!(run(&sub, "forthwith with-it with_it", 1), "forthwith with-it with_it");
    assert_eq!(run(&sub, "co-with", 1), "co-with");
}

#[test]
fn case_is_preserved() {
    let sub = substituter(WITH, 1.0);
    assert_eq!(run(&sub, "With success.", 1), "Wit success.");
    assert_eq!(run(&sub, "WITH success", 1), "WIT success");
    assert_eq!(run(&sub, "with success", 1), "wit success");
}

#[test]
fn boundaries_are_kept_verbatim() {
    let sub = substituter(WITH, 1.0);
    assert_eq!(run(&sub, "(with)", 1), "(wit)");
    assert_eq!(run(&sub, "with,with;with", 1), "wit,wit;wit");
    assert_eq!(run(&sub, "with with", 1), "wit wit");
    assert_eq!(run(&sub, "with\n\twith\r\n", 1), "wit\n\twit\r\n");
    assert_eq!(run(&sub, "with", 1), "wit");
}

#[test]
fn unicode_word_characters_are_not_boundaries() {
    let sub = substituter(WITH, 1.0);
    assert_eq!(run(&sub, "éwith withé", 1), "éwith withé");
    assert_eq!(run(&sub, "«with» with…", 1), "«wit» wit…");
}

#[test]
fn keys_are_matched_literally() {
    let sub = substituter(r#"{"can't": ["cain't"], "a.m.": ["mornin'"]}"#, 1.0);
    assert_eq!(run(&sub, "I CAN'T go at 9 a.m. sharp", 1), "I CAIN'T go at 9 mornin' sharp");
    assert_eq!(run(&sub, "9 axmx sharp", 1), "9 axmx sharp");
}

#[test]
fn longer_keys_win_over_their_prefixes() {
    let sub = substituter(r#"{"with": ["wit"], "with-it": ["hip"]}"#, 1.0);
    assert_eq!(run(&sub, "so with-it with", 1), "so hip wit");
}

#[test]
fn zero_probability_is_identity() {
    let sub = substituter(WITH, 0.0);
    let text = "With him, WITH her, with them.";
    assert_eq!(run(&sub, text, 9), text);
}

#[test]
fn unmapped_text_passes_through() {
    let sub = substituter(WITH, 1.0);
    let text = "Nothing here matches at all!\n";
    assert_eq!(run(&sub, text, 3), text);
    assert_eq!(run(&sub, "", 3), "");
}

#[test]
fn candidates_are_drawn_from_the_mapping() {
    let sub = substituter(r#"{"brother": ["brotha", "bruh", "bro"]}"#, 1.0);
    let mut seen = std::collections::HashSet::new();
    for seed in 0..64 {
        let out = run(&sub, "brother", seed);
        assert!(["brotha", "bruh", "bro"].contains(&out.as_str()), "{out}");
        seen.insert(out);
    }
    assert!(seen.len() > 1);
}

#[test]
fn same_seed_same_output() {
    let sub = substituter(r#"{"with": ["wit"], "brother": ["brotha", "bruh"]}"#, 0.5);
    let text = "With my brother, with your brother, WITH THE BROTHER. ".repeat(20);
    let first = run(&sub, &text, 77);
    assert_eq!(first, run(&sub, &text, 77));
    assert_ne!(first, text);
}

#[test]
fn partial_probability_replaces_a_fraction() {
    let sub = substituter(WITH, 0.5);
    let text = "with ".repeat(1000);
    let out = run(&sub, &text, 2024);
    let replaced = out.split_whitespace().filter(|w| *w == "wit").count();
    assert!((350..=650).contains(&replaced), "replaced {replaced}");
}

#[test]
fn invalid_probability_is_a_configuration_error() {
    let mapping = Arc::new(ZiMappingDictionary::from_json_str(WITH).unwrap());
    for probability in [-0.1, 1.01, f64::NAN] {
        let err = ZiDialectSubstituter::new(mapping.clone(), probability).unwrap_err();
        assert!(matches!(err, ZiError::Configuration { .. }));
    }
}

#[test]
fn overlapping_vocabularies_are_not_idempotent() {
    let sub = substituter(r#"{"is": ["be"], "be": ["is"]}"#, 1.0);
    let once = run(&sub, "it is what it be", 1);
    let twice = run(&sub, &once, 1);
    assert_eq!(once, "it be what it is");
    assert_ne!(once, twice);
}

#[test]
fn disjoint_vocabularies_settle_after_one_pass() {
    let sub = substituter(WITH, 1.0);
    let once = run(&sub, "with you", 1);
    assert_eq!(run(&sub, &once, 1), once);
}

proptest! {
    #[test]
    fn zero_probability_never_changes_text(text in "\\PC*") {
        let sub = substituter(r#"{"with": ["wit"], "the": ["da"]}"#, 0.0);
        prop_assert_eq!(run(&sub, &text, 5), text);
    }

    #[test]
    fn texts_without_keys_are_untouched(text in "[a-vx-z0-9 ,.!?-]*", seed in any::<u64>()) {
        let sub = substituter(WITH, 1.0);
        prop_assert_eq!(run(&sub, &text, seed), text);
    }
}

#[test]
fn unicode_case_folds_still_find_their_entry() {
    let sub = substituter(r#"{"so": ["sho"]}"#, 1.0);
    assert_eq!(run(&sub, "\u{17f}o good", 1), "sho good");
}
