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

//! ClusterTemplateInstance generation

pub mod builder;
pub mod properties;
pub mod types;

pub use self::builder::{build_instance, generate_instance_yaml};
pub use self::properties::{collect_properties, parse_values};
pub use self::types::{
    ClusterTemplateInstance, ClusterTemplateInstanceSpec, InstancePropertyValue,
};
