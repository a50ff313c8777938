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

use crate::domain::instance::properties::collect_properties;
use crate::domain::template::types::ClusterTemplate;
use crate::domain::validation::name::{validate_name, NameValidationType};
use crate::domain::validation::numeric::validate_positive_integer;
use crate::shared::error::{Result, TemplateError};

/// Pure checks over a ClusterTemplate manifest, run before the template is
/// used to generate an instance.
#[derive(Debug, Default)]
pub struct TemplateValidator;

impl TemplateValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, template: &ClusterTemplate) -> Result<()> {
        self.validate_metadata(template)?;
        self.validate_cost(template)?;
        self.validate_setup_names(template)?;
        self.validate_values(template)?;
        Ok(())
    }

    /// The template must be named, and the name must be a valid DNS
    /// subdomain so the generated clusterTemplateRef can resolve.
    pub fn validate_metadata(&self, template: &ClusterTemplate) -> Result<()> {
        let name = template.name();
        if name.is_empty() {
            return Err(TemplateError::validation_error(
                "Cluster template has no name",
            ));
        }
        validate_name(name, NameValidationType::DnsSubdomain, &[])
    }

    pub fn validate_cost(&self, template: &ClusterTemplate) -> Result<()> {
        if let Some(cost) = template.spec.as_ref().and_then(|spec| spec.cost) {
            validate_positive_integer(cost)?;
        }
        Ok(())
    }

    /// Setup stage names are RFC 1123 labels and must be mutually unique,
    /// since properties are tagged by stage name.
    pub fn validate_setup_names(&self, template: &ClusterTemplate) -> Result<()> {
        let Some(setup_stages) = template
            .status
            .as_ref()
            .and_then(|status| status.cluster_setup.as_ref())
        else {
            return Ok(());
        };

        let mut seen: Vec<String> = Vec::with_capacity(setup_stages.len());
        for stage in setup_stages {
            validate_name(&stage.name, NameValidationType::Rfc1123Label, &seen).map_err(
                |err| {
                    TemplateError::validation_error(format!(
                        "Cluster setup '{}': {}",
                        stage.name, err
                    ))
                },
            )?;
            seen.push(stage.name.clone());
        }
        Ok(())
    }

    /// All values blobs must parse; a template without a status cannot be
    /// instantiated at all.
    pub fn validate_values(&self, template: &ClusterTemplate) -> Result<()> {
        let status = template.status.as_ref().ok_or(TemplateError::MissingStatus)?;
        collect_properties(status)?;
        Ok(())
    }
}
