//! Resource binding aggregation.
//!
//! A [`ResourceBinding`] is the per-path aggregate the host discovery tool
//! builds up while walking declared resource classes: every resource
//! definition sharing the path contributes its methods, response codes,
//! warnings, transition links, and request parameters to the same binding.
//! Once discovery completes, the binding's read accessors and the derived
//! views in [`crate::transition`] feed documentation output.
//!
//! A binding is written by a single discovery thread and queried afterward;
//! no internal synchronization is provided.
//!
//! # Examples
//!
//! ```
//! use hyperbind::{BindingMetadata, ResourceBinding, ResourceDefinition};
//!
//! let metadata = BindingMetadata {
//!     states: vec!["person".to_string()],
//!     ..BindingMetadata::default()
//! };
//! let binding = ResourceBinding::new(
//!     "/persons/{pid}",
//!     ResourceDefinition::new("api.PersonResource", "Person"),
//!     Some(&metadata),
//! );
//! assert_eq!(binding.path(), "/persons/{pid}");
//! assert!(binding.states().contains("person"));
//! ```

// Internal imports (std, crate)
use std::collections::{BTreeSet, HashSet};

use crate::parameter::ResourceParameter;
use crate::resource::{ResourceDefinition, ResourceMethod, ResponseCode, StateTransition};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Marker the declaration model uses for unset string values.
pub const DEFAULT_SENTINEL: &str = "##default";

/// Raw binding metadata as declared on a resource class.
///
/// String fields default to [`DEFAULT_SENTINEL`], the declaration model's
/// marker for "not specified"; [`ResourceBinding::new`] normalizes the
/// sentinel away.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingMetadata {
    /// Declared namespace, or the default sentinel
    #[serde(default = "default_marker")]
    pub namespace: String,
    /// Declared project id, or the default sentinel
    #[serde(default = "default_marker")]
    pub project_id: String,
    /// Application states reachable from this binding
    #[serde(default)]
    pub states: Vec<String>,
}

impl Default for BindingMetadata {
    fn default() -> Self {
        Self {
            namespace: default_marker(),
            project_id: default_marker(),
            states: Vec::new(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_SENTINEL.to_string()
}

/// Aggregated documentation model for all resource definitions sharing a
/// URI path.
#[derive(Clone, Debug)]
pub struct ResourceBinding {
    path: String,
    namespace: Option<String>,
    project_id: Option<String>,
    states: BTreeSet<String>,
    definitions: Vec<ResourceDefinition>,
    methods: Vec<ResourceMethod>,
    status_codes: HashSet<ResponseCode>,
    warnings: HashSet<ResponseCode>,
    links: BTreeSet<StateTransition>,
    resource_parameters: BTreeSet<ResourceParameter>,
}

impl ResourceBinding {
    /// Create a binding for `path` seeded with its first contributing
    /// definition.
    ///
    /// Absent metadata yields an empty state set and no namespace or
    /// project id; a metadata namespace or project id equal to the default
    /// sentinel is treated as absent.
    pub fn new(
        path: impl Into<String>,
        definition: ResourceDefinition,
        metadata: Option<&BindingMetadata>,
    ) -> Self {
        let (namespace, project_id, states) = match metadata {
            Some(metadata) => (
                normalize(&metadata.namespace),
                normalize(&metadata.project_id),
                metadata.states.iter().cloned().collect(),
            ),
            None => (None, None, BTreeSet::new()),
        };

        Self {
            path: path.into(),
            namespace,
            project_id,
            states,
            definitions: vec![definition],
            methods: Vec::new(),
            status_codes: HashSet::new(),
            warnings: HashSet::new(),
            links: BTreeSet::new(),
            resource_parameters: BTreeSet::new(),
        }
    }

    /// Append a definition unless one with the same qualified name is
    /// already present. Returns whether the definition was added.
    pub fn add_definition_if_absent(&mut self, definition: ResourceDefinition) -> bool {
        let duplicate = self
            .definitions
            .iter()
            .any(|d| d.qualified_name == definition.qualified_name);
        if duplicate {
            log::debug!(
                "Skipping duplicate resource definition '{}' for path '{}'",
                definition.qualified_name,
                self.path
            );
            return false;
        }
        self.definitions.push(definition);
        true
    }

    /// Record an HTTP operation contributed by one of the definitions
    pub fn add_method(&mut self, method: ResourceMethod) {
        self.methods.push(method);
    }

    /// Record a documented status code. Returns whether it was new.
    pub fn add_status_code(&mut self, status_code: ResponseCode) -> bool {
        self.status_codes.insert(status_code)
    }

    /// Record a documented warning code. Returns whether it was new.
    pub fn add_warning(&mut self, warning: ResponseCode) -> bool {
        self.warnings.insert(warning)
    }

    /// Record a state-transition link. Returns whether it was new.
    pub fn add_link(&mut self, link: StateTransition) -> bool {
        self.links.insert(link)
    }

    /// Record an accepted request parameter. Parameters are keyed by
    /// (name, type name); a parameter equal on that key to one already
    /// present is dropped. Returns whether it was new.
    pub fn add_resource_parameter(&mut self, parameter: ResourceParameter) -> bool {
        self.resource_parameters.insert(parameter)
    }

    /// The URI path template this binding represents
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The declared namespace, if any
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The declared project id, if any
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Application states reachable from this binding, sorted
    pub fn states(&self) -> &BTreeSet<String> {
        &self.states
    }

    /// Contributing definitions in insertion order
    pub fn definitions(&self) -> &[ResourceDefinition] {
        &self.definitions
    }

    /// Contributed HTTP operations in insertion order
    pub fn methods(&self) -> &[ResourceMethod] {
        &self.methods
    }

    /// Documented status codes
    pub fn status_codes(&self) -> &HashSet<ResponseCode> {
        &self.status_codes
    }

    /// Documented warning codes
    pub fn warnings(&self) -> &HashSet<ResponseCode> {
        &self.warnings
    }

    /// State-transition links, ordered by link relation
    pub fn links(&self) -> &BTreeSet<StateTransition> {
        &self.links
    }

    /// Accepted request parameters in canonical (name, type) order
    pub fn resource_parameters(&self) -> &BTreeSet<ResourceParameter> {
        &self.resource_parameters
    }

    /// Union of the media types produced by the contributed methods,
    /// sorted lexicographically and independent of insertion order.
    pub fn produces(&self) -> BTreeSet<String> {
        self.methods
            .iter()
            .flat_map(|method| method.produces.iter().cloned())
            .collect()
    }

    /// Union of the media types consumed by the contributed methods,
    /// sorted lexicographically and independent of insertion order.
    pub fn consumes(&self) -> BTreeSet<String> {
        self.methods
            .iter()
            .flat_map(|method| method.consumes.iter().cloned())
            .collect()
    }
}

fn normalize(value: &str) -> Option<String> {
    if value == DEFAULT_SENTINEL {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterKind;

    fn person_definition() -> ResourceDefinition {
        ResourceDefinition::new("api.PersonResource", "Person")
    }

    #[test]
    fn test_construction_without_metadata() {
        let binding = ResourceBinding::new("/persons/{pid}", person_definition(), None);
        assert!(binding.states().is_empty());
        assert_eq!(binding.namespace(), None);
        assert_eq!(binding.project_id(), None);
        assert_eq!(binding.definitions().len(), 1);
    }

    #[test]
    fn test_construction_normalizes_sentinel_metadata() {
        let metadata = BindingMetadata::default();
        let binding = ResourceBinding::new("/persons/{pid}", person_definition(), Some(&metadata));
        assert_eq!(binding.namespace(), None);
        assert_eq!(binding.project_id(), None);

        let metadata = BindingMetadata {
            namespace: "gx".to_string(),
            project_id: "gedcomx".to_string(),
            states: vec!["person".to_string(), "person".to_string()],
        };
        let binding = ResourceBinding::new("/persons/{pid}", person_definition(), Some(&metadata));
        assert_eq!(binding.namespace(), Some("gx"));
        assert_eq!(binding.project_id(), Some("gedcomx"));
        assert_eq!(binding.states().len(), 1);
    }

    #[test]
    fn test_states_are_sorted_and_deduplicated() {
        let metadata = BindingMetadata {
            states: vec![
                "relationship".to_string(),
                "person".to_string(),
                "relationship".to_string(),
            ],
            ..BindingMetadata::default()
        };
        let binding = ResourceBinding::new("/persons/{pid}", person_definition(), Some(&metadata));
        let states: Vec<&str> = binding.states().iter().map(String::as_str).collect();
        assert_eq!(states, vec!["person", "relationship"]);
    }

    #[test]
    fn test_add_definition_if_absent_is_idempotent() {
        let mut binding = ResourceBinding::new("/persons/{pid}", person_definition(), None);
        assert!(!binding.add_definition_if_absent(person_definition()));
        assert!(binding
            .add_definition_if_absent(ResourceDefinition::new("api.PersonSubtree", "Subtree")));
        assert!(!binding
            .add_definition_if_absent(ResourceDefinition::new("api.PersonSubtree", "Subtree")));

        let names: Vec<&str> = binding
            .definitions()
            .iter()
            .map(|d| d.qualified_name.as_str())
            .collect();
        assert_eq!(names, vec!["api.PersonResource", "api.PersonSubtree"]);
    }

    #[test]
    fn test_produces_and_consumes_are_sorted_unions() {
        let mut binding = ResourceBinding::new("/persons/{pid}", person_definition(), None);
        binding.add_method(
            ResourceMethod::new("readPerson", "GET")
                .with_produces(["application/xml", "application/json"]),
        );
        binding.add_method(
            ResourceMethod::new("updatePerson", "POST")
                .with_produces(["application/json"])
                .with_consumes(["application/json"]),
        );

        let produces_set = binding.produces();
        let produces: Vec<&str> = produces_set.iter().map(String::as_str).collect();
        assert_eq!(produces, vec!["application/json", "application/xml"]);
        let consumes_set = binding.consumes();
        let consumes: Vec<&str> = consumes_set.iter().map(String::as_str).collect();
        assert_eq!(consumes, vec!["application/json"]);
    }

    #[test]
    fn test_produces_is_insertion_order_independent() {
        let mut forward = ResourceBinding::new("/persons", person_definition(), None);
        forward.add_method(ResourceMethod::new("a", "GET").with_produces(["text/html"]));
        forward.add_method(ResourceMethod::new("b", "GET").with_produces(["application/json"]));

        let mut reverse = ResourceBinding::new("/persons", person_definition(), None);
        reverse.add_method(ResourceMethod::new("b", "GET").with_produces(["application/json"]));
        reverse.add_method(ResourceMethod::new("a", "GET").with_produces(["text/html"]));

        assert_eq!(forward.produces(), reverse.produces());
    }

    #[test]
    fn test_set_backed_mutators_deduplicate() {
        let mut binding = ResourceBinding::new("/persons/{pid}", person_definition(), None);
        assert!(binding.add_status_code(ResponseCode::new(200, "Upon a successful read.")));
        assert!(!binding.add_status_code(ResponseCode::new(200, "Upon a successful read.")));
        assert!(binding.add_warning(ResponseCode::new(299, "Deprecated representation.")));
        assert!(binding.add_link(StateTransition::new("self")));
        assert!(!binding.add_link(StateTransition::new("self")));
        assert!(binding
            .add_resource_parameter(ResourceParameter::new("pid", "String", ParameterKind::Path)));
        assert!(!binding
            .add_resource_parameter(ResourceParameter::new("pid", "String", ParameterKind::Path)));
    }
}
