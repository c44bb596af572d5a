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

//! # Zi Record Module
//!
//! Evaluation instances as they flow through perturbation operators.
//!
//! A [`ZiRecord`] carries an identifier (which seeds per-instance randomness),
//! a JSON payload holding the instance text and its references, and optional
//! metadata. [`ZiFieldPath`] addresses a value inside either of them:
//!
//! ```rust
//! use zi_dialect::record::{ZiFieldPath, ZiRecord};
//! use serde_json::json;
//!
//! let mut record = ZiRecord::new(Some("id7".to_string()), json!({
//!     "text": "I am going with my brother.",
//!     "references": ["He is with me."]
//! }));
//! let text = ZiFieldPath::parse("payload.text").unwrap();
//! if let Some(value) = text.resolve_mut(&mut record) {
//!     *value = json!("I am goin' wit my brotha.");
//! }
//! let tag = ZiFieldPath::parse("metadata.perturbation.name").unwrap();
//! assert!(tag.set_value(&mut record, json!("dialect")));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};

/// Generic metadata map that may accompany a record.
pub type ZiMetadata = Map<String, Value>;

/// A single evaluation instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZiRecord {
    /// Stable identifier; perturbation operators derive their seed from it.
    pub id: Option<String>,

    /// Primary payload carrying the instance text and references.
    pub payload: Value,

    /// Additional attributes such as applied perturbations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ZiMetadata>,
}

impl ZiRecord {
    /// Constructs a record with the given payload and optional identifier.
    pub fn new(id: impl Into<Option<String>>, payload: Value) -> Self {
        ZiRecord {
            id: id.into(),
            payload,
            metadata: None,
        }
    }

    /// Returns a mutable reference to the metadata map, creating it if necessary.
    pub fn metadata_mut(&mut self) -> &mut ZiMetadata {
        self.metadata.get_or_insert_with(ZiMetadata::new)
    }
}

/// Convenience alias for working on batches of records.
pub type ZiRecordBatch = Vec<ZiRecord>;

/// Dot-delimited path referencing either payload or metadata values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiFieldPath {
    segments: Vec<String>,
}

impl ZiFieldPath {
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<String> = path
            .split('.')
            .map(|segment| segment.trim().to_string())
            .filter(|segment| !segment.is_empty())
            .collect();

        let Some(first) = segments.first() else {
            return Err(ZiError::validation("field path may not be empty"));
        };

        if first != "payload" && first != "metadata" {
            return Err(ZiError::validation(
                "field path must start with 'payload' or 'metadata'",
            ));
        }

        if first == "metadata" && segments.len() == 1 {
            return Err(ZiError::validation(
                "metadata paths must include at least one key",
            ));
        }

        Ok(Self { segments })
    }

    /// Returns a mutable handle to an existing value at this path.
    pub fn resolve_mut<'a>(&self, record: &'a mut ZiRecord) -> Option<&'a mut Value> {
        let (root, rest) = self.segments.split_first()?;
        match root.as_str() {
            "payload" => {
                let mut current = &mut record.payload;
                for segment in rest {
                    current = current.as_object_mut()?.get_mut(segment)?;
                }
                Some(current)
            }
            "metadata" => {
                let (key, rest) = rest.split_first()?;
                let mut current = record.metadata.as_mut()?.get_mut(key)?;
                for segment in rest {
                    current = current.as_object_mut()?.get_mut(segment)?;
                }
                Some(current)
            }
            _ => None,
        }
    }

    /// Writes `value` at this path, creating intermediate objects as needed.
    ///
    /// Returns `false` if an intermediate segment holds a non-object value.
    pub fn set_value(&self, record: &mut ZiRecord, value: Value) -> bool {
        let Some((root, rest)) = self.segments.split_first() else {
            return false;
        };
        let Some((last, parents)) = rest.split_last() else {
            // Bare `payload` replaces the whole payload.
            if root == "payload" {
                record.payload = value;
                return true;
            }
            return false;
        };

        let mut current = match root.as_str() {
            "payload" => {
                if !record.payload.is_object() {
                    record.payload = Value::Object(Map::new());
                }
                match record.payload.as_object_mut() {
                    Some(map) => map,
                    None => return false,
                }
            }
            "metadata" => record.metadata_mut(),
            _ => return false,
        };
        for segment in parents {
            current = match current
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()))
            {
                Value::Object(map) => map,
                _ => return false,
            };
        }
        current.insert(last.clone(), value);
        true
    }
}
