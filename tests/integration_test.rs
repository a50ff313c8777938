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

use clustertemplate_kube::*;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

mod test_utils {
    use super::*;

    pub fn create_test_template() -> ClusterTemplate {
        ClusterTemplate {
            api_version: Some("clustertemplate.openshift.io/v1alpha1".to_string()),
            kind: Some("ClusterTemplate".to_string()),
            metadata: ObjectMeta {
                name: Some("my-template".to_string()),
                ..Default::default()
            },
            spec: Some(ClusterTemplateSpec { cost: Some(200) }),
            status: Some(ClusterTemplateStatus {
                cluster_definition: ClusterDefinitionStatus {
                    values: "replicas: 3\nregion: us-east".to_string(),
                },
                cluster_setup: Some(vec![ClusterSetupStatus {
                    name: "monitoring".to_string(),
                    values: "enabled: true".to_string(),
                }]),
            }),
        }
    }
}

#[test]
fn test_instance_generation_scenario() {
    let template = test_utils::create_test_template();
    let instance = build_instance(&template).unwrap();

    assert_eq!(instance.spec.cluster_template_ref, "my-template");

    let values = instance.spec.values.as_ref().unwrap();
    assert_eq!(values.len(), 3);

    assert_eq!(values[0].cluster_setup, None);
    assert_eq!(values[0].name, "replicas");
    assert_eq!(values[0].value, serde_yaml::Value::from(3));

    assert_eq!(values[1].cluster_setup, None);
    assert_eq!(values[1].name, "region");
    assert_eq!(values[1].value, serde_yaml::Value::from("us-east"));

    assert_eq!(values[2].cluster_setup.as_deref(), Some("monitoring"));
    assert_eq!(values[2].name, "enabled");
    assert_eq!(values[2].value, serde_yaml::Value::from(true));
}

#[test]
fn test_property_count_and_order_across_stages() {
    let mut template = test_utils::create_test_template();
    let status = template.status.as_mut().unwrap();
    status.cluster_definition.values = "a: 1\nb: 2\nc: 3".to_string();
    status.cluster_setup = Some(vec![
        ClusterSetupStatus {
            name: "stage1".to_string(),
            values: "d: 4\ne: 5".to_string(),
        },
        ClusterSetupStatus {
            name: "stage2".to_string(),
            values: "f: 6".to_string(),
        },
    ]);

    let properties = collect_properties(template.status.as_ref().unwrap()).unwrap();
    assert_eq!(properties.len(), 6);
    let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "e", "f"]);
    let stages: Vec<Option<&str>> = properties
        .iter()
        .map(|p| p.cluster_setup.as_deref())
        .collect();
    assert_eq!(
        stages,
        vec![
            None,
            None,
            None,
            Some("stage1"),
            Some("stage1"),
            Some("stage2")
        ]
    );
}

#[test]
fn test_generated_yaml_round_trips() {
    let template = test_utils::create_test_template();
    let yaml = generate_instance_yaml(&template).unwrap();

    let reparsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(
        reparsed["apiVersion"],
        serde_yaml::Value::from("clustertemplate.openshift.io/v1alpha1")
    );
    assert_eq!(
        reparsed["kind"],
        serde_yaml::Value::from("ClusterTemplateInstance")
    );
    assert_eq!(
        reparsed["spec"]["clusterTemplateRef"],
        serde_yaml::Value::from("my-template")
    );
    assert_eq!(
        reparsed["spec"]["values"][0]["name"],
        serde_yaml::Value::from("replicas")
    );
    assert_eq!(reparsed["spec"]["values"][0]["value"], serde_yaml::Value::from(3));
    assert_eq!(
        reparsed["spec"]["values"][2]["clusterSetup"],
        serde_yaml::Value::from("monitoring")
    );

    // And the typed form survives the trip too
    let instance: ClusterTemplateInstance = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(instance, build_instance(&template).unwrap());
}

#[test]
fn test_generation_is_deterministic() {
    let template = test_utils::create_test_template();
    let first = generate_instance_yaml(&template).unwrap();
    let second = generate_instance_yaml(&template).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_template_without_status_is_rejected() {
    let mut template = test_utils::create_test_template();
    template.status = None;
    let err = build_instance(&template).unwrap_err();
    assert!(matches!(err, TemplateError::MissingStatus));
    assert_eq!(err.to_string(), "Cluster template doesn't contain a status");
}

#[test]
fn test_malformed_stage_values_report_the_stage() {
    let mut template = test_utils::create_test_template();
    template.status.as_mut().unwrap().cluster_setup = Some(vec![ClusterSetupStatus {
        name: "db".to_string(),
        values: "a: [unclosed".to_string(),
    }]);

    let err = build_instance(&template).unwrap_err();
    assert_eq!(err.to_string(), "Failed to parse values of chart db");
}

#[test]
fn test_template_validator_end_to_end() {
    let template = test_utils::create_test_template();
    assert!(TemplateValidator::new().validate(&template).is_ok());

    let mut invalid = template.clone();
    invalid.metadata.name = Some("Invalid_Name".to_string());
    assert!(TemplateValidator::new().validate(&invalid).is_err());

    let mut invalid = template.clone();
    invalid.spec = Some(ClusterTemplateSpec {
        cost: Some(MAX_COST + 1),
    });
    assert!(TemplateValidator::new().validate(&invalid).is_err());
}

#[test]
fn test_name_validation_matches_kubernetes_rules() {
    assert!(validate_name("my-namespace", NameValidationType::Rfc1123Label, &[]).is_ok());
    assert!(validate_name("my.cr.name", NameValidationType::DnsSubdomain, &[]).is_ok());
    assert!(validate_name("my.cr.name", NameValidationType::Rfc1123Label, &[]).is_err());
    assert!(validate_name("-leading", NameValidationType::DnsSubdomain, &[]).is_err());
}
