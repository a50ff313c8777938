// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::shared::error::{Result, TemplateError};

/// Upper bound for template cost values.
pub const MAX_COST: i64 = 1_000_000;

pub fn validate_integer(value: i64) -> Result<()> {
    if value > MAX_COST {
        return Err(TemplateError::validation_error(format!(
            "Please enter a value smaller than {MAX_COST}"
        )));
    }
    Ok(())
}

pub fn validate_positive_integer(value: i64) -> Result<()> {
    validate_integer(value)?;
    if value < 0 {
        return Err(TemplateError::validation_error(
            "Please enter a positive value",
        ));
    }
    Ok(())
}
