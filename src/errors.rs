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

//! # Zi Error Module
//!
//! This module defines the error types used throughout the dialect
//! perturbation crate.
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors while reading mapping files
//! - **Serde**: Malformed JSON in mapping files or configuration
//! - **Validation**: Invalid inputs such as records without identifiers
//! - **Configuration**: Out-of-range probabilities or unknown dialect pairs
//! - **InvalidMapping**: Mapping dictionaries that fail load-time checks
//! - **Lookup**: A matched word missing from the mapping
//! - **Operator**: Failures raised while an operator processes a batch
//! - **Internal**: Unexpected internal failures
//!
//! ## Usage
//!
//! ```rust
//! use zi_dialect::errors::{Result, ZiError};
//!
//! fn check(probability: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&probability) {
//!         return Err(ZiError::configuration("probability must be in [0,1]"));
//!     }
//!     Ok(probability)
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi dialect perturbation.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Validation errors triggered by invalid inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Invalid construction parameters. Not recoverable mid-run.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Mapping dictionaries rejected at load time.
    #[error("invalid mapping: {message}")]
    InvalidMapping { message: String },

    /// A matched word has no entry in the mapping.
    #[error("lookup error: no mapping entry for '{word}'")]
    Lookup { word: String },

    /// Any failure raised by an operator implementation.
    #[error("operator '{operator}' failed: {message}")]
    Operator { operator: String, message: String },

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<regex::Error> for ZiError {
    fn from(err: regex::Error) -> Self {
        ZiError::internal(format!("pattern compilation failed: {err}"))
    }
}

impl ZiError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct configuration errors.
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        ZiError::Configuration {
            message: message.into(),
        }
    }

    /// Helper to construct mapping validation errors.
    pub fn invalid_mapping<T: Into<String>>(message: T) -> Self {
        ZiError::InvalidMapping {
            message: message.into(),
        }
    }

    pub fn lookup<T: Into<String>>(word: T) -> Self {
        ZiError::Lookup { word: word.into() }
    }

    /// Helper to construct operator errors.
    pub fn operator(name: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Operator {
            operator: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        ZiError::Internal(message.into())
    }
}
