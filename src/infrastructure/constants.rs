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

use kube::core::GroupVersionKind;

/// API group and version of the cluster templates operator
pub const API_GROUP: &str = "clustertemplate.openshift.io";
pub const API_VERSION: &str = "v1alpha1";

/// Resource kinds
pub const KIND_CLUSTER_TEMPLATE: &str = "ClusterTemplate";
pub const KIND_CLUSTER_TEMPLATE_INSTANCE: &str = "ClusterTemplateInstance";

pub fn cluster_template_gvk() -> GroupVersionKind {
    GroupVersionKind::gvk(API_GROUP, API_VERSION, KIND_CLUSTER_TEMPLATE)
}

pub fn cluster_template_instance_gvk() -> GroupVersionKind {
    GroupVersionKind::gvk(API_GROUP, API_VERSION, KIND_CLUSTER_TEMPLATE_INSTANCE)
}

/// apiVersion string for a GVK; core-group resources carry no group prefix.
pub fn api_version(gvk: &GroupVersionKind) -> String {
    if gvk.group.is_empty() {
        gvk.version.clone()
    } else {
        format!("{}/{}", gvk.group, gvk.version)
    }
}
