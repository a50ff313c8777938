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

use crate::domain::template::types::ClusterTemplate;
use crate::shared::error::TemplateError;
use std::path::PathBuf;

pub fn load_template_file(file_path: &str) -> Result<ClusterTemplate, TemplateError> {
    let path = resolve_template_path(file_path)?;

    if !path.exists() {
        return Err(TemplateError::ConfigError(format!(
            "Cluster template file does not exist: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| {
        TemplateError::ConfigError(format!(
            "Failed to read cluster template file {}: {}",
            path.display(),
            e
        ))
    })?;

    let template: ClusterTemplate = serde_yaml::from_str(&content).map_err(|e| {
        TemplateError::ConfigError(format!(
            "Failed to parse cluster template file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(template)
}

pub fn resolve_template_path(path: &str) -> Result<PathBuf, TemplateError> {
    let path = PathBuf::from(path);

    if path.is_absolute() {
        Ok(path)
    } else {
        std::env::current_dir()
            .map_err(|e| TemplateError::ConfigError(format!("Cannot get current directory: {}", e)))
            .map(|cwd| cwd.join(path))
    }
}

pub fn write_output_file(file_path: &str, content: &str) -> Result<(), TemplateError> {
    std::fs::write(file_path, content).map_err(|e| {
        TemplateError::ConfigError(format!("Failed to write output file {}: {}", file_path, e))
    })
}
