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

/// A ClusterTemplate custom resource as read from a YAML manifest.
///
/// Only the fields this tool consumes are modeled; unknown fields in the
/// manifest are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<ClusterTemplateSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ClusterTemplateStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterTemplateSpec {
    /// Estimated cost of instantiating this template, in cluster quota units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}

/// Status reported by the cluster templates operator. The cluster definition
/// is required whenever a status exists; post-installation setup stages are
/// optional and ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterTemplateStatus {
    pub cluster_definition: ClusterDefinitionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_setup: Option<Vec<ClusterSetupStatus>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDefinitionStatus {
    /// Resolved Helm values of the base chart, as a YAML text block.
    /// A missing field is treated like an empty block.
    #[serde(default)]
    pub values: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSetupStatus {
    pub name: String,

    #[serde(default)]
    pub values: String,
}

impl ClusterTemplate {
    /// Template name, or an empty string when metadata carries none.
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("")
    }
}
