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

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ZiDialectConfig;
use crate::errors::{Result, ZiError};
use crate::mapping::ZiMappingDictionary;
use crate::operator::ZiOperator;
use crate::record::{ZiFieldPath, ZiRecord, ZiRecordBatch};
use crate::seed::{derive_seed, seeded_rng};
use crate::substitute::ZiDialectSubstituter;

/// Name under which the dialect perturbation is registered.
pub const DIALECT_PERTURBATION_NAME: &str = "dialect";

/// Serializable summary of a configured dialect perturbation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiDialectDescription {
    pub name: String,
    pub robustness: bool,
    pub fairness: bool,
    pub prob: f64,
    pub source_class: String,
    pub target_class: String,
    pub mapping_file_path: Option<PathBuf>,
}

/// Fairness perturbation that rewrites instance text into a target dialect.
///
/// Each record is perturbed with its own RNG seeded from the record id, first
/// the text field and then, if enabled, every reference in order.
#[derive(Debug)]
pub struct ZiPerturbDialect {
    substituter: ZiDialectSubstituter,
    source_dialect: String,
    target_dialect: String,
    mapping_file_path: Option<PathBuf>,
    text_field: ZiFieldPath,
    references_field: ZiFieldPath,
    perturb_references: bool,
    tag_field: ZiFieldPath,
}

impl ZiPerturbDialect {
    /// Builds the operator, loading the mapping file the config resolves to.
    pub fn from_config(config: &ZiDialectConfig) -> Result<Self> {
        config.validate()?;
        let path = config.resolve_mapping_path()?;
        let mapping = ZiMappingDictionary::from_path(&path)?;
        let mut operator = Self::with_mapping(config, Arc::new(mapping))?;
        operator.mapping_file_path = Some(path);
        Ok(operator)
    }

    /// Builds the operator around an already loaded mapping.
    pub fn with_mapping(config: &ZiDialectConfig, mapping: Arc<ZiMappingDictionary>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            substituter: ZiDialectSubstituter::new(mapping, config.probability)?,
            source_dialect: config.source_dialect.to_uppercase(),
            target_dialect: config.target_dialect.to_uppercase(),
            mapping_file_path: config.mapping_path.clone(),
            text_field: ZiFieldPath::parse(&config.text_field)?,
            references_field: ZiFieldPath::parse(&config.references_field)?,
            perturb_references: config.perturb_references,
            tag_field: ZiFieldPath::parse(&config.tag_field)?,
        })
    }

    pub fn substituter(&self) -> &ZiDialectSubstituter {
        &self.substituter
    }

    /// Perturbs a standalone text with a fresh RNG seeded by `seed`.
    pub fn perturb(&self, text: &str, seed: u64) -> Result<String> {
        let mut rng = seeded_rng(seed);
        self.substituter.substitute(text, &mut rng)
    }

    /// Perturbs one record in place.
    ///
    /// Fails with [`ZiError::Validation`] if the record has no id. Missing or
    /// non-string fields are left alone.
    pub fn perturb_record(&self, record: &mut ZiRecord) -> Result<()> {
        let seed = match record.id.as_deref() {
            Some(id) => derive_seed(id),
            None => {
                return Err(ZiError::validation(
                    "perturb.dialect requires records with an id",
                ))
            }
        };
        let mut rng = seeded_rng(seed);

        if let Some(Value::String(text)) = self.text_field.resolve_mut(record) {
            *text = self.substituter.substitute(text, &mut rng)?;
        }

        if self.perturb_references {
            if let Some(Value::Array(references)) = self.references_field.resolve_mut(record) {
                for reference in references.iter_mut() {
                    // Plain strings, or reference objects carrying an `output` string.
                    let target = match reference {
                        Value::String(text) => Some(text),
                        Value::Object(map) => match map.get_mut("output") {
                            Some(Value::String(text)) => Some(text),
                            _ => None,
                        },
                        _ => None,
                    };
                    if let Some(text) = target {
                        *text = self.substituter.substitute(text, &mut rng)?;
                    }
                }
            }
        }

        let description = serde_json::to_value(self.description())?;
        if !self.tag_field.set_value(record, description) {
            log::warn!(
                "perturb.dialect could not write its tag on record {:?}",
                record.id
            );
        }
        Ok(())
    }

    pub fn description(&self) -> ZiDialectDescription {
        ZiDialectDescription {
            name: DIALECT_PERTURBATION_NAME.to_string(),
            robustness: false,
            fairness: true,
            prob: self.substituter.probability(),
            source_class: self.source_dialect.clone(),
            target_class: self.target_dialect.clone(),
            mapping_file_path: self.mapping_file_path.clone(),
        }
    }
}

impl ZiOperator for ZiPerturbDialect {
    fn name(&self) -> &'static str {
        "perturb.dialect"
    }

    fn apply(&self, mut batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
        for record in &mut batch {
            self.perturb_record(record)?;
        }
        log::debug!(
            "perturb.dialect {} -> {} applied to {} records",
            self.source_dialect,
            self.target_dialect,
            batch.len()
        );
        Ok(batch)
    }
}

/// Factory that constructs [`ZiPerturbDialect`] from JSON configuration.
pub fn perturb_dialect_factory(config: &Value) -> Result<Box<dyn ZiOperator + Send + Sync>> {
    let config = ZiDialectConfig::from_value(config)?;
    Ok(Box::new(ZiPerturbDialect::from_config(&config)?))
}
