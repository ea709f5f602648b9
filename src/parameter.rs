//! Request parameters and their transition overrides.
//!
//! A [`ResourceParameter`] describes one request parameter accepted by a
//! bound resource, classified by where it appears in the request. Parameters
//! carry an optional [`TransitionOverride`] that adjusts how they surface in
//! derived transition templates (optionality and template variable name).

// Internal imports (std, crate)
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Where a request parameter appears, based on its declared location.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Path,
    Query,
    Header,
    Cookie,
    Matrix,
    Form,
}

impl ParameterKind {
    /// The lowercase location string for this kind (e.g., "query")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
            Self::Matrix => "matrix",
            Self::Form => "form",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path" => Ok(Self::Path),
            "query" => Ok(Self::Query),
            "header" => Ok(Self::Header),
            "cookie" => Ok(Self::Cookie),
            "matrix" => Ok(Self::Matrix),
            "form" => Ok(Self::Form),
            other => Err(Error::parameter(format!(
                "unknown parameter location '{}'",
                other
            ))),
        }
    }
}

/// Transition-specific override metadata attached to a parameter.
///
/// Declared alongside the parameter to adjust how it appears in transition
/// templates; absent override metadata means all defaults apply.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransitionOverride {
    /// Whether the parameter may be omitted when following the transition
    #[serde(default)]
    pub optional: bool,
    /// Replacement template variable name; `None` keeps the parameter's own name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
}

impl TransitionOverride {
    pub fn optional() -> Self {
        Self {
            optional: true,
            variable_name: None,
        }
    }

    pub fn named(variable_name: impl Into<String>) -> Self {
        Self {
            optional: false,
            variable_name: Some(variable_name.into()),
        }
    }
}

/// A request parameter accepted by a bound resource.
///
/// Identity and ordering are defined by the composite key
/// (parameter name, declared type name), ties on the name broken by the type
/// name. Two parameters agreeing on that key compare equal even if their
/// kind or override metadata differ, so a binding keeps only the first one
/// it sees.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceParameter {
    /// Name of the parameter as declared in the request
    pub name: String,
    /// Name of the parameter's declared type
    pub type_name: String,
    /// Where the parameter appears in the request
    pub kind: ParameterKind,
    /// Override metadata for transition-template derivation, if declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_override: Option<TransitionOverride>,
}

impl ResourceParameter {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        kind: ParameterKind,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind,
            transition_override: None,
        }
    }

    /// Attach transition override metadata
    pub fn with_override(mut self, transition_override: TransitionOverride) -> Self {
        self.transition_override = Some(transition_override);
        self
    }

    pub fn is_path_param(&self) -> bool {
        matches!(self.kind, ParameterKind::Path)
    }

    pub fn is_query_param(&self) -> bool {
        matches!(self.kind, ParameterKind::Query)
    }

    /// Resolved template variable name: the override's name when declared,
    /// otherwise the parameter's own name.
    pub fn variable_name(&self) -> &str {
        self.transition_override
            .as_ref()
            .and_then(|o| o.variable_name.as_deref())
            .unwrap_or(&self.name)
    }

    /// Whether the parameter is optional when following a transition.
    /// Defaults to `false` without override metadata.
    pub fn is_optional(&self) -> bool {
        self.transition_override
            .as_ref()
            .map(|o| o.optional)
            .unwrap_or(false)
    }
}

impl PartialEq for ResourceParameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.type_name == other.type_name
    }
}

impl Eq for ResourceParameter {}

impl PartialOrd for ResourceParameter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResourceParameter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.type_name.cmp(&other.type_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_kind_parse_and_display() {
        for kind in [
            ParameterKind::Path,
            ParameterKind::Query,
            ParameterKind::Header,
            ParameterKind::Cookie,
            ParameterKind::Matrix,
            ParameterKind::Form,
        ] {
            assert_eq!(kind.as_str().parse::<ParameterKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_kind_parse_unknown_location() {
        let err = "body".parse::<ParameterKind>().unwrap_err();
        assert!(err.to_string().contains("unknown parameter location 'body'"));
    }

    #[test]
    fn test_ordering_is_pure_function_of_name_and_type() {
        let a = ResourceParameter::new("access-token", "String", ParameterKind::Query);
        let b = ResourceParameter::new("pid", "String", ParameterKind::Path);
        let c = ResourceParameter::new("pid", "Integer", ParameterKind::Path);

        let mut forward = BTreeSet::new();
        forward.insert(b.clone());
        forward.insert(a.clone());
        forward.insert(c.clone());

        let mut reverse = BTreeSet::new();
        reverse.insert(c.clone());
        reverse.insert(a.clone());
        reverse.insert(b.clone());

        let keys: Vec<(&str, &str)> = forward
            .iter()
            .map(|p| (p.name.as_str(), p.type_name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("access-token", "String"),
                ("pid", "Integer"),
                ("pid", "String"),
            ]
        );
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_identity_ignores_kind_and_override() {
        let declared = ResourceParameter::new("id", "String", ParameterKind::Query);
        let redeclared = ResourceParameter::new("id", "String", ParameterKind::Header)
            .with_override(TransitionOverride::optional());
        assert_eq!(declared, redeclared);
    }

    #[test]
    fn test_override_resolution_defaults() {
        let plain = ResourceParameter::new("id", "String", ParameterKind::Query);
        assert!(!plain.is_optional());
        assert_eq!(plain.variable_name(), "id");

        let adjusted = ResourceParameter::new("id", "String", ParameterKind::Query)
            .with_override(TransitionOverride {
                optional: true,
                variable_name: Some("personId".to_string()),
            });
        assert!(adjusted.is_optional());
        assert_eq!(adjusted.variable_name(), "personId");
    }
}
