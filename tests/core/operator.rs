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

use serde_json::json;
use zi_dialect::errors::{Result, ZiError};
use zi_dialect::operator::{execute_operator, ZiOperator};
use zi_dialect::record::{ZiRecord, ZiRecordBatch};

#[derive(Debug)]
struct PassThrough;

impl ZiOperator for PassThrough {
    fn name(&self) -> &'static str {
        "pass"
    }

    fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
        Ok(batch)
    }
}

#[derive(Debug)]
struct Failing;

impl ZiOperator for Failing {
    fn name(&self) -> &'static str {
        "fail"
    }

    fn apply(&self, _batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
        Err(ZiError::validation("boom"))
    }
}

#[test]
fn execute_success_returns_same_batch() {
    let batch = vec![ZiRecord::new(Some("id1".to_string()), json!({"text": "hi"}))];
    let result = execute_operator(&PassThrough, batch).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].payload, json!({"text": "hi"}));
}

#[test]
fn execute_error_wraps_with_operator_name() {
    let batch = vec![ZiRecord::new(None, json!(null))];
    let err = execute_operator(&Failing, batch).unwrap_err();
    match err {
        ZiError::Operator { operator, message } => {
            assert_eq!(operator, "fail");
            assert!(message.contains("boom"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
