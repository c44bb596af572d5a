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

//! # Zi Dialect Configuration
//!
//! Configuration of the `perturb.dialect` operator.
//!
//! Operator factories receive configuration as JSON:
//!
//! ```json
//! {
//!     "probability": 0.5,
//!     "source_dialect": "SAE",
//!     "target_dialect": "AAVE",
//!     "mapping_dir": "benchmark_output/perturbations/dialect"
//! }
//! ```
//!
//! `prob`, `source_class` and `target_class` are accepted as aliases. Dialect
//! names are case-insensitive and normalised to uppercase. When no explicit
//! `mapping_path` is given, a known dialect pair resolves to
//! `<mapping_dir>/<SOURCE>_to_<TARGET>_mapping.json`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};

/// Standard American English.
pub const SAE: &str = "SAE";
/// African American Vernacular English.
pub const AAVE: &str = "AAVE";

/// Dialect pairs that have a conventional mapping file name.
///
/// The SAE to AAVE table comes from Ziems et al. (2022), "VALUE: Understanding
/// Dialect Disparity in NLU".
pub const KNOWN_DIALECT_PAIRS: &[(&str, &str)] = &[(SAE, AAVE)];

pub const DEFAULT_MAPPING_DIR: &str = "benchmark_output/perturbations/dialect";
pub const DEFAULT_TEXT_FIELD: &str = "payload.text";
pub const DEFAULT_REFERENCES_FIELD: &str = "payload.references";
pub const DEFAULT_TAG_FIELD: &str = "metadata.perturbation";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiDialectConfig {
    /// Probability of substituting each eligible word.
    #[serde(alias = "prob")]
    pub probability: f64,

    #[serde(alias = "source_class", default = "default_source")]
    pub source_dialect: String,

    #[serde(alias = "target_class", default = "default_target")]
    pub target_dialect: String,

    /// Explicit mapping file; overrides pair resolution.
    #[serde(default)]
    pub mapping_path: Option<PathBuf>,

    #[serde(default = "default_mapping_dir")]
    pub mapping_dir: PathBuf,

    #[serde(default = "default_text_field")]
    pub text_field: String,

    #[serde(default = "default_references_field")]
    pub references_field: String,

    #[serde(default = "default_true")]
    pub perturb_references: bool,

    /// Where the perturbation description is written on each record.
    #[serde(default = "default_tag_field")]
    pub tag_field: String,
}

fn default_source() -> String {
    SAE.to_string()
}

fn default_target() -> String {
    AAVE.to_string()
}

fn default_mapping_dir() -> PathBuf {
    PathBuf::from(DEFAULT_MAPPING_DIR)
}

fn default_text_field() -> String {
    DEFAULT_TEXT_FIELD.to_string()
}

fn default_references_field() -> String {
    DEFAULT_REFERENCES_FIELD.to_string()
}

fn default_tag_field() -> String {
    DEFAULT_TAG_FIELD.to_string()
}

fn default_true() -> bool {
    true
}

impl ZiDialectConfig {
    pub fn new(
        probability: f64,
        source_dialect: impl Into<String>,
        target_dialect: impl Into<String>,
    ) -> Self {
        Self {
            probability,
            source_dialect: source_dialect.into().to_uppercase(),
            target_dialect: target_dialect.into().to_uppercase(),
            mapping_path: None,
            mapping_dir: default_mapping_dir(),
            text_field: default_text_field(),
            references_field: default_references_field(),
            perturb_references: true,
            tag_field: default_tag_field(),
        }
    }

    pub fn with_mapping_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mapping_path = Some(path.into());
        self
    }

    pub fn with_mapping_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mapping_dir = dir.into();
        self
    }

    /// Parses and validates an operator configuration object.
    pub fn from_value(config: &Value) -> Result<Self> {
        if !config.is_object() {
            return Err(ZiError::configuration("perturb.dialect config must be object"));
        }
        let mut parsed: Self = serde_json::from_value(config.clone())
            .map_err(|err| ZiError::configuration(format!("perturb.dialect config: {err}")))?;
        parsed.source_dialect = parsed.source_dialect.to_uppercase();
        parsed.target_dialect = parsed.target_dialect.to_uppercase();
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(ZiError::configuration(format!(
                "perturb.dialect 'probability' must be in [0,1], got {}",
                self.probability
            )));
        }
        if self.source_dialect.trim().is_empty() || self.target_dialect.trim().is_empty() {
            return Err(ZiError::configuration(
                "perturb.dialect source and target dialects may not be empty",
            ));
        }
        Ok(())
    }

    /// Returns the mapping file to load for this configuration.
    ///
    /// Fails with [`ZiError::Configuration`] when no explicit path is set and
    /// the dialect pair has no conventional mapping.
    pub fn resolve_mapping_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.mapping_path {
            return Ok(path.clone());
        }

        let source = self.source_dialect.to_uppercase();
        let target = self.target_dialect.to_uppercase();
        let known = KNOWN_DIALECT_PAIRS
            .iter()
            .any(|(s, t)| *s == source && *t == target);
        if !known {
            let available = KNOWN_DIALECT_PAIRS
                .iter()
                .map(|(s, t)| format!("{s}->{t}"))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ZiError::configuration(format!(
                "no mapping available from {source} to {target}; known pairs: {available}"
            )));
        }

        Ok(self
            .mapping_dir
            .join(format!("{source}_to_{target}_mapping.json")))
    }
}
