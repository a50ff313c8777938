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

use crate::domain::instance::types::InstancePropertyValue;
use crate::domain::template::types::ClusterTemplateStatus;
use crate::shared::error::{Result, TemplateError};
use serde_yaml::Value;

/// Parses a chart's YAML values block into an ordered property list.
///
/// Blank input, an empty document and an explicit `null` all yield zero
/// properties. Anything that parses to a non-mapping top level fails with a
/// parse error naming the owning chart. Key order of the source document is
/// preserved.
pub fn parse_values(
    values: &str,
    cluster_setup: Option<&str>,
) -> Result<Vec<InstancePropertyValue>> {
    if values.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: Value =
        serde_yaml::from_str(values).map_err(|_| TemplateError::values_parse(cluster_setup))?;

    let mapping = match parsed {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(mapping) => mapping,
        _ => return Err(TemplateError::values_parse(cluster_setup)),
    };

    let mut properties = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        // Scalar keys are stringified like a dynamic YAML loader would;
        // sequence or mapping keys are not representable as property names.
        let name = match key {
            Value::String(name) => name,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            _ => return Err(TemplateError::values_parse(cluster_setup)),
        };
        properties.push(InstancePropertyValue::new(cluster_setup, name, value));
    }

    Ok(properties)
}

/// Aggregates all properties of a template status: the base cluster
/// definition first, then each setup stage in listed order. Any parse
/// failure aborts the whole aggregation.
pub fn collect_properties(status: &ClusterTemplateStatus) -> Result<Vec<InstancePropertyValue>> {
    let mut properties = parse_values(&status.cluster_definition.values, None)?;

    let Some(setup_stages) = &status.cluster_setup else {
        return Ok(properties);
    };

    for stage in setup_stages {
        properties.extend(parse_values(&stage.values, Some(&stage.name))?);
    }

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::types::{ClusterDefinitionStatus, ClusterSetupStatus};

    fn status(definition: &str, setup: &[(&str, &str)]) -> ClusterTemplateStatus {
        ClusterTemplateStatus {
            cluster_definition: ClusterDefinitionStatus {
                values: definition.to_string(),
            },
            cluster_setup: if setup.is_empty() {
                None
            } else {
                Some(
                    setup
                        .iter()
                        .map(|(name, values)| ClusterSetupStatus {
                            name: name.to_string(),
                            values: values.to_string(),
                        })
                        .collect(),
                )
            },
        }
    }

    #[test]
    fn test_blank_input_yields_no_properties() {
        assert!(parse_values("", None).unwrap().is_empty());
        assert!(parse_values("   \n", None).unwrap().is_empty());
    }

    #[test]
    fn test_null_document_yields_no_properties() {
        assert!(parse_values("null", None).unwrap().is_empty());
        assert!(parse_values("~", None).unwrap().is_empty());
    }

    #[test]
    fn test_empty_mapping_yields_no_properties() {
        assert!(parse_values("{}", None).unwrap().is_empty());
    }

    #[test]
    fn test_preserves_document_key_order() {
        let properties = parse_values("zebra: 1\nalpha: 2\nmiddle: 3", None).unwrap();
        let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_values_keep_their_yaml_types() {
        let properties = parse_values("replicas: 3\nregion: us-east\nha: true", None).unwrap();
        assert_eq!(properties[0].value, Value::from(3));
        assert_eq!(properties[1].value, Value::from("us-east"));
        assert_eq!(properties[2].value, Value::from(true));
    }

    #[test]
    fn test_properties_are_tagged_with_the_stage_name() {
        let properties = parse_values("enabled: true", Some("monitoring")).unwrap();
        assert_eq!(properties[0].cluster_setup.as_deref(), Some("monitoring"));
    }

    #[test]
    fn test_malformed_input_names_the_stage() {
        let err = parse_values("a: [unclosed", Some("db")).unwrap_err();
        match err {
            TemplateError::ValuesParse { chart } => assert_eq!(chart.as_deref(), Some("db")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_mapping_top_level_is_rejected() {
        let err = parse_values("- a\n- b", None).unwrap_err();
        assert!(matches!(err, TemplateError::ValuesParse { chart: None }));
        assert!(parse_values("just a string", Some("db")).is_err());
    }

    #[test]
    fn test_scalar_keys_are_stringified() {
        let properties = parse_values("8080: http\ntrue: enabled", None).unwrap();
        assert_eq!(properties[0].name, "8080");
        assert_eq!(properties[1].name, "true");
    }

    #[test]
    fn test_collect_orders_definition_before_stages() {
        let status = status(
            "replicas: 3\nregion: us-east",
            &[("monitoring", "enabled: true"), ("db", "size: 10Gi")],
        );
        let properties = collect_properties(&status).unwrap();
        assert_eq!(properties.len(), 4);
        assert_eq!(properties[0].name, "replicas");
        assert_eq!(properties[0].cluster_setup, None);
        assert_eq!(properties[1].name, "region");
        assert_eq!(properties[2].name, "enabled");
        assert_eq!(properties[2].cluster_setup.as_deref(), Some("monitoring"));
        assert_eq!(properties[3].name, "size");
        assert_eq!(properties[3].cluster_setup.as_deref(), Some("db"));
    }

    #[test]
    fn test_collect_without_setup_returns_definition_only() {
        let status = status("replicas: 3", &[]);
        let properties = collect_properties(&status).unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].name, "replicas");
    }

    #[test]
    fn test_collect_propagates_stage_parse_failure() {
        let status = status("replicas: 3", &[("db", ": bad :")]);
        let err = collect_properties(&status).unwrap_err();
        match err {
            TemplateError::ValuesParse { chart } => assert_eq!(chart.as_deref(), Some("db")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
