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

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

/// A ClusterTemplateInstance resource, freshly built from a template.
///
/// Name and namespace are left unset for the caller to fill in before
/// submission. Field declaration order is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterTemplateInstance {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ClusterTemplateInstanceSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterTemplateInstanceSpec {
    pub cluster_template_ref: String,

    /// Settings overridden for this instance. `None` means "no overrides";
    /// the field is omitted from serialized output rather than emitted as an
    /// empty list, so downstream consumers can tell the two apart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<InstancePropertyValue>>,
}

/// One resolved key/value setting extracted from a chart's values block.
/// `cluster_setup` names the owning setup stage; the base cluster
/// definition's properties carry no stage name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstancePropertyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_setup: Option<String>,
    pub name: String,
    pub value: serde_yaml::Value,
}

impl InstancePropertyValue {
    pub fn new(
        cluster_setup: Option<&str>,
        name: impl Into<String>,
        value: serde_yaml::Value,
    ) -> Self {
        Self {
            cluster_setup: cluster_setup.map(str::to_owned),
            name: name.into(),
            value,
        }
    }
}
