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
use crate::domain::instance::types::{ClusterTemplateInstance, ClusterTemplateInstanceSpec};
use crate::domain::template::types::ClusterTemplate;
use crate::infrastructure::constants::{api_version, cluster_template_instance_gvk};
use crate::shared::error::{Result, TemplateError};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Builds a ClusterTemplateInstance from a template's status.
///
/// The template must carry a status: the instance's values are derived from
/// the resolved charts it reports. Name and namespace are left for the
/// caller; `spec.values` is omitted entirely when no properties exist.
pub fn build_instance(template: &ClusterTemplate) -> Result<ClusterTemplateInstance> {
    let status = template.status.as_ref().ok_or(TemplateError::MissingStatus)?;

    let values = collect_properties(status)?;
    let gvk = cluster_template_instance_gvk();

    Ok(ClusterTemplateInstance {
        api_version: api_version(&gvk),
        kind: gvk.kind,
        metadata: ObjectMeta::default(),
        spec: ClusterTemplateInstanceSpec {
            cluster_template_ref: template.name().to_string(),
            values: if values.is_empty() { None } else { Some(values) },
        },
    })
}

/// Builds the instance and serializes it to YAML for display or export.
pub fn generate_instance_yaml(template: &ClusterTemplate) -> Result<String> {
    let instance = build_instance(template)?;
    let yaml = serde_yaml::to_string(&instance)?;
    Ok(yaml)
}
