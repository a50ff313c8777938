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

//! Name validation for DNS Subdomain Names (most CRs) and RFC 1123 Label
//! Names (namespaces). See
//! https://kubernetes.io/docs/concepts/overview/working-with-objects/names/

use crate::shared::error::{Result, TemplateError};
use regex::Regex;
use std::sync::LazyLock;

static DNS_SUBDOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.-]*$").unwrap());

static RFC_1123_LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]*$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameValidationType {
    #[default]
    DnsSubdomain,
    Rfc1123Label,
}

impl NameValidationType {
    pub fn max_length(&self) -> usize {
        match self {
            Self::DnsSubdomain => 253,
            Self::Rfc1123Label => 63,
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::DnsSubdomain => &DNS_SUBDOMAIN_PATTERN,
            Self::Rfc1123Label => &RFC_1123_LABEL_PATTERN,
        }
    }

    fn charset_message(&self) -> &'static str {
        match self {
            Self::DnsSubdomain => "Use lowercase alphanumeric characters, dot (.) or hyphen (-)",
            Self::Rfc1123Label => "Use lowercase alphanumeric characters, or hyphen (-)",
        }
    }
}

fn is_start_end_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Validates a resource name against the given naming scheme and a list of
/// names already in use. Checks run in order: length, start/end characters,
/// charset, uniqueness; the first failure wins.
pub fn validate_name(
    name: &str,
    kind: NameValidationType,
    used_names: &[String],
) -> Result<()> {
    let max_length = kind.max_length();
    if name.is_empty() || name.len() > max_length {
        return Err(TemplateError::validation_error(format!(
            "1-{max_length} characters"
        )));
    }

    let trimmed = name.trim();
    if !trimmed.is_empty() {
        let starts_valid = trimmed.chars().next().is_some_and(is_start_end_char);
        let ends_valid = trimmed.chars().next_back().is_some_and(is_start_end_char);
        if !starts_valid || !ends_valid {
            return Err(TemplateError::validation_error(
                "Must start and end with a lowercase alphanumeric character",
            ));
        }
    }

    if !kind.pattern().is_match(name) {
        return Err(TemplateError::validation_error(kind.charset_message()));
    }

    if used_names.iter().any(|used| used == name) {
        return Err(TemplateError::validation_error("Must be unique"));
    }

    Ok(())
}
