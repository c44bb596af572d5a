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

//! # Zi Mapping Module
//!
//! Word-to-synonym tables that drive dialect substitution.
//!
//! A mapping file is a JSON object whose keys are lowercase source-dialect
//! words and whose values are non-empty arrays of target-dialect words:
//!
//! ```json
//! {"with": ["wit"], "brother": ["brotha", "bruh"]}
//! ```
//!
//! Mappings are validated once at load time and are immutable afterwards, so a
//! single [`ZiMappingDictionary`] can be shared behind an `Arc` by any number
//! of substituters.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::{Result, ZiError};

/// Immutable mapping from lowercase source words to candidate synonyms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiMappingDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl ZiMappingDictionary {
    /// Builds a dictionary from `(word, candidates)` pairs, validating every entry.
    ///
    /// Keys are lowercased. Fails with [`ZiError::InvalidMapping`] when the
    /// dictionary is empty, a key is empty or contains whitespace, a candidate
    /// list or candidate string is empty, or two keys collide once lowercased.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (word, candidates) in entries {
            let word: String = word.into();
            if word.is_empty() {
                return Err(ZiError::invalid_mapping("mapping keys may not be empty"));
            }
            if word.chars().any(char::is_whitespace) {
                return Err(ZiError::invalid_mapping(format!(
                    "mapping key '{word}' must be a single word"
                )));
            }
            if candidates.is_empty() {
                return Err(ZiError::invalid_mapping(format!(
                    "mapping key '{word}' has no candidates"
                )));
            }
            let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
            if candidates.iter().any(String::is_empty) {
                return Err(ZiError::invalid_mapping(format!(
                    "mapping key '{word}' has an empty candidate"
                )));
            }

            let key = word.to_lowercase();
            if map.insert(key, candidates).is_some() {
                return Err(ZiError::invalid_mapping(format!(
                    "mapping key '{word}' is duplicated (keys are case-insensitive)"
                )));
            }
        }

        if map.is_empty() {
            return Err(ZiError::invalid_mapping("mapping may not be empty"));
        }

        Ok(Self { entries: map })
    }

    /// Parses a JSON object of `word -> [candidates]`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        // BTreeMap keeps key order stable for error reporting.
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Self::from_entries(raw)
    }

    /// Loads and validates a mapping file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            ZiError::Io(format!("cannot open mapping file {}: {err}", path.display()))
        })?;
        let mapping = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "loaded dialect mapping with {} entries from {}",
            mapping.len(),
            path.display()
        );
        Ok(mapping)
    }

    /// Returns the candidates for `word`, retrying with `word` lowercased.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        let candidates = match self.entries.get(word) {
            Some(candidates) => Some(candidates),
            None => self.entries.get(&word.to_lowercase()),
        };
        candidates.map(Vec::as_slice)
    }

    /// Iterates over `(word, candidates)` pairs in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(word, candidates)| (word.as_str(), candidates.as_slice()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the lowercase source words in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
