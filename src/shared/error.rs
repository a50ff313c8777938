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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, TemplateError>;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to parse values of chart {}", .chart.as_deref().unwrap_or(""))]
    ValuesParse { chart: Option<String> },

    #[error("Cluster template doesn't contain a status")]
    MissingStatus,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl TemplateError {
    pub fn values_parse(chart: Option<&str>) -> Self {
        Self::ValuesParse {
            chart: chart.map(str::to_owned),
        }
    }

    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn validation_error(context: impl Into<String>) -> Self {
        Self::ValidationError(context.into())
    }
}
