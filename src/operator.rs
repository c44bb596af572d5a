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

//! # Zi Operator Module
//!
//! The operator trait that perturbations implement, and a helper that runs an
//! operator while attaching its name to any failure.
//!
//! Operators receive a batch of records and return the processed batch.
//! Perturbation operators keep the batch length and order and only rewrite
//! text fields in place.

use crate::errors::{Result, ZiError};
use crate::record::ZiRecordBatch;

/// Contracts that every Zi operator must fulfill.
///
/// Operators are expected to be deterministic: the same batch must produce
/// the same output, which for perturbations means all randomness is seeded
/// from the records themselves.
pub trait ZiOperator: std::fmt::Debug {
    /// Unique, human-readable name for the operator, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Applies the operator to an incoming batch of records.
    fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch>;
}

/// Convenience helper to execute an operator while normalizing errors.
///
/// Any error returned by the operator is rewrapped as
/// [`ZiError::Operator`] carrying the operator's name.
pub fn execute_operator(
    operator: &dyn ZiOperator,
    batch: ZiRecordBatch,
) -> Result<ZiRecordBatch> {
    let size = batch.len();
    let out = operator
        .apply(batch)
        .map_err(|err| ZiError::operator(operator.name(), err.to_string()))?;
    log::debug!("operator '{}' processed {} records", operator.name(), size);
    Ok(out)
}
