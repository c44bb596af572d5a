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

//! # Zi Dialect Substitution
//!
//! Probability-gated, case-preserving whole-word substitution driven by a
//! [`ZiMappingDictionary`].
//!
//! ## Matching
//!
//! All mapping keys are compiled into one case-insensitive alternation when
//! the substituter is built. A key only matches as a whole word: the
//! characters on either side must be neither word characters nor `-`, or be
//! the edge of the text. So with `{"with": ["wit"]}` the word "within" is
//! never touched, while "with," and "(with)" are.
//!
//! Boundary characters are not part of the replaced span, and one boundary
//! may be shared by two neighbouring matches ("with with" has two candidates).
//!
//! ## Randomness
//!
//! For every match one `f64` is drawn from the caller's RNG; the word is
//! replaced iff the draw is below the configured probability, in which case a
//! second draw picks the candidate. Callers pass a freshly seeded RNG per
//! instance (see [`crate::seed`]) to make the output reproducible.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Regex, RegexBuilder};

use crate::errors::{Result, ZiError};
use crate::mapping::ZiMappingDictionary;

// Large dictionaries with case-insensitive Unicode classes exceed the default limit.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Replaces mapped words in text with case-matched target-dialect synonyms.
#[derive(Clone, Debug)]
pub struct ZiDialectSubstituter {
    mapping: Arc<ZiMappingDictionary>,
    probability: f64,
    pattern: Regex,
}

impl ZiDialectSubstituter {
    /// Compiles the whole-word pattern for `mapping`.
    ///
    /// Fails with [`ZiError::Configuration`] if `probability` is not within
    /// `[0, 1]`, and with [`ZiError::InvalidMapping`] for an empty mapping.
    pub fn new(mapping: Arc<ZiMappingDictionary>, probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ZiError::configuration(format!(
                "substitution probability must be in [0,1], got {probability}"
            )));
        }
        if mapping.is_empty() {
            return Err(ZiError::invalid_mapping("mapping may not be empty"));
        }

        let pattern = build_pattern(&mapping)?;
        log::debug!(
            "compiled dialect pattern for {} mapping entries (p = {})",
            mapping.len(),
            probability
        );

        Ok(Self {
            mapping,
            probability,
            pattern,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Substitutes eligible words in `text`, consuming randomness from `rng`.
    ///
    /// Text outside matched words is copied verbatim. With probability `0`
    /// the result always equals the input.
    pub fn substitute<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut copied = 0;
        let mut cursor = 0;
        let mut matched = 0usize;
        let mut replaced = 0usize;

        while let Some(captures) = self.pattern.captures_at(text, cursor) {
            let Some(word) = captures.get(1) else {
                break;
            };
            matched += 1;

            output.push_str(&text[copied..word.start()]);
            let original = word.as_str();
            if rng.gen::<f64>() < self.probability {
                let candidates = self.lookup(original)?;
                let candidate = candidates
                    .choose(rng)
                    .ok_or_else(|| ZiError::lookup(original))?;
                output.push_str(&match_case(original, candidate));
                replaced += 1;
            } else {
                output.push_str(original);
            }

            copied = word.end();
            // Resume at the word end so the trailing boundary can lead the next match.
            cursor = word.end();
        }
        output.push_str(&text[copied..]);

        if matched > 0 {
            log::debug!("dialect substitution replaced {replaced} of {matched} matched words");
        }
        Ok(output)
    }

    fn lookup(&self, word: &str) -> Result<&[String]> {
        if let Some(candidates) = self.mapping.get(word) {
            return Ok(candidates);
        }
        // Regex case folding accepts words such as "\u{17f}o" for "so" that
        // only agree with their key once both sides are uppercased.
        let upper = word.to_uppercase();
        self.mapping
            .entries()
            .find(|(key, _)| key.to_uppercase() == upper)
            .map(|(_, candidates)| candidates)
            .ok_or_else(|| ZiError::lookup(word))
    }
}

fn build_pattern(mapping: &ZiMappingDictionary) -> Result<Regex> {
    let mut keys: Vec<&str> = mapping.keys().collect();
    // Longest first so that overlapping keys prefer the fuller word.
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternation = keys
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");

    let source = format!(r"(?:^|[^\w-])({alternation})(?:[^\w-]|$)");
    Ok(RegexBuilder::new(&source)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?)
}

/// Returns `replacement` recased to follow the pattern of `original`.
///
/// - an all-caps original of two or more characters uppercases the whole
///   replacement ("WITH" -> "WIT");
/// - an original starting with an uppercase letter uppercases only the first
///   character of the replacement ("With" -> "Wit", "I" -> "Ah");
/// - anything else returns the replacement unchanged.
///
/// A word is all-caps when it has at least one uppercase letter and no
/// lowercase letter, so "U.S." and "I'M" qualify.
pub fn match_case(original: &str, replacement: &str) -> String {
    let mut chars = original.chars();
    let Some(first) = chars.next() else {
        return replacement.to_string();
    };
    let multi_char = chars.next().is_some();

    if multi_char && is_all_caps(original) {
        return replacement.to_uppercase();
    }

    if first.is_uppercase() {
        let mut rest = replacement.chars();
        return match rest.next() {
            Some(head) => head.to_uppercase().chain(rest).collect(),
            None => String::new(),
        };
    }

    replacement.to_string()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
