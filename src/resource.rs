//! Descriptor types contributed by the host discovery collaborator.
//!
//! These are the raw inputs fed into a [`crate::binding::ResourceBinding`]
//! as the host tool walks the declared resource classes: the definitions
//! themselves, their HTTP operations, the response codes and warnings they
//! document, and the hypermedia transitions reachable from them. The
//! aggregation layer performs no validation of these descriptors beyond its
//! own de-duplication rules; malformed declaration data is the discovery
//! collaborator's responsibility.

use serde::{Deserialize, Serialize};

/// A declared API resource type contributing operations to a path.
///
/// Identity is the `qualified_name`; a binding holds at most one definition
/// per qualified name regardless of how often discovery revisits it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceDefinition {
    /// Fully qualified name of the declaring resource type
    pub qualified_name: String,
    /// Short name used in documentation output
    pub name: String,
    /// Namespace the definition belongs to, if declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ResourceDefinition {
    /// Create a new definition with no declared namespace
    pub fn new(qualified_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            name: name.into(),
            namespace: None,
        }
    }
}

/// One HTTP operation belonging to a resource definition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceMethod {
    /// Name of the operation as declared (e.g., a handler name)
    pub name: String,
    /// HTTP method of the operation (e.g., "GET")
    pub http_method: String,
    /// Media types this operation produces, as declared
    #[serde(default)]
    pub produces: Vec<String>,
    /// Media types this operation consumes, as declared
    #[serde(default)]
    pub consumes: Vec<String>,
}

impl ResourceMethod {
    pub fn new(name: impl Into<String>, http_method: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            http_method: http_method.into(),
            produces: Vec::new(),
            consumes: Vec::new(),
        }
    }

    /// Declare the media types this operation produces
    pub fn with_produces<I, S>(mut self, produces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.produces = produces.into_iter().map(Into::into).collect();
        self
    }

    /// Declare the media types this operation consumes
    pub fn with_consumes<I, S>(mut self, consumes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.consumes = consumes.into_iter().map(Into::into).collect();
        self
    }
}

/// A response status code and the condition under which it is returned.
///
/// Used both for documented status codes and for warnings; bindings keep
/// these with set semantics, so equal descriptors collapse to one entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ResponseCode {
    /// The numeric HTTP status code
    pub code: u16,
    /// The documented condition under which the code is returned
    pub condition: String,
}

impl ResponseCode {
    pub fn new(code: u16, condition: impl Into<String>) -> Self {
        Self {
            code,
            condition: condition.into(),
        }
    }
}

/// A hypermedia state transition reachable from a bound resource.
///
/// Ordered by link relation first so that documentation output lists
/// transitions deterministically.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct StateTransition {
    /// Link relation identifying the transition
    pub rel: String,
    /// Human-readable description of the transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the application state the transition leads to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_state: Option<String>,
}

impl StateTransition {
    pub fn new(rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            description: None,
            target_state: None,
        }
    }
}
