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

//! # Zi Dialect
//!
//! Dialect perturbation for fairness evaluation of language models. Words of
//! a source dialect (e.g. Standard American English) are swapped for
//! target-dialect synonyms (e.g. African American Vernacular English) from a
//! mapping dictionary, with a configured probability per word and with the
//! casing of the original word preserved.
//!
//! ## Module Overview
//!
//! - **mapping**: Loading and validating word-to-synonym dictionaries
//! - **substitute**: Whole-word, case-matched, probability-gated substitution
//! - **seed**: Deterministic per-instance seeding
//! - **config**: Operator configuration and dialect-pair resolution
//! - **record**: ZiRecord and field paths into its payload and metadata
//! - **operator**: Core operator trait and execution helper
//! - **operators**: The `perturb.dialect` operator
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use zi_dialect::{seeded_rng, ZiDialectSubstituter, ZiMappingDictionary};
//!
//! let mapping = ZiMappingDictionary::from_json_str(r#"{"with": ["wit"]}"#)?;
//! let substituter = ZiDialectSubstituter::new(Arc::new(mapping), 1.0)?;
//! let mut rng = seeded_rng(42);
//! assert_eq!(substituter.substitute("With success.", &mut rng)?, "Wit success.");
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, ZiError>`.

pub mod config;
pub mod errors;
pub mod mapping;
pub mod operator;
pub mod operators;
pub mod record;
pub mod seed;
pub mod substitute;

pub use config::{ZiDialectConfig, AAVE, KNOWN_DIALECT_PAIRS, SAE};
pub use errors::{Result, ZiError};
pub use mapping::ZiMappingDictionary;
pub use operator::{execute_operator, ZiOperator};
pub use operators::dialect::{perturb_dialect_factory, ZiDialectDescription, ZiPerturbDialect};
pub use record::{ZiFieldPath, ZiMetadata, ZiRecord, ZiRecordBatch};
pub use seed::{derive_seed, seeded_rng};
pub use substitute::{match_case, ZiDialectSubstituter};
