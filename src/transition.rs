//! Transition template derivation.
//!
//! This module flattens a [`ResourceBinding`]'s aggregated state into
//! [`TransitionTemplateProperties`]: for every application state declared on
//! the binding, a set of string properties describing how to construct a
//! URI/query template for transitioning into that state. The derivation is a
//! pure read over the binding; repeated calls with no intervening mutation
//! return identical mappings.
//!
//! Keys follow the `<state>.<suffix>` scheme consumed by the rendering
//! collaborator:
//!
//! - `<state>.<param>.optional` — `"true"` or `"false"`
//! - `<state>.<param>.variableName` — resolved template variable name
//! - `<state>.queryParams` — comma-joined query parameter names
//! - `<state>.path` — the binding's path template
//! - `<state>.namespace` — the binding's namespace, empty when absent

// Internal imports (std, crate)
use std::collections::BTreeMap;

use crate::binding::ResourceBinding;

// External imports (alphabetized)
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Flattened per-state template properties derived from a binding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransitionTemplateProperties {
    properties: BTreeMap<String, String>,
}

impl TransitionTemplateProperties {
    /// Look up a property value by its full key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate the properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.properties.iter()
    }

    /// The underlying ordered key/value map
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Serialize the properties as a flat JSON object for rendering
    /// contexts that consume JSON.
    pub fn to_json(&self) -> crate::Result<JsonValue> {
        Ok(serde_json::to_value(&self.properties)?)
    }

    /// Merge every property into a template-rendering context.
    pub fn merge_into(&self, context: &mut tera::Context) {
        for (key, value) in &self.properties {
            context.insert(key, value);
        }
    }
}

impl IntoIterator for TransitionTemplateProperties {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl ResourceBinding {
    /// Derive the per-state template properties from the binding's current
    /// state.
    ///
    /// Only path and query parameters participate; parameters declared at
    /// any other location are excluded entirely, including from the
    /// `queryParams` lists. A binding with no states yields an empty
    /// mapping.
    pub fn transition_template_properties(&self) -> TransitionTemplateProperties {
        let mut properties = BTreeMap::new();
        for state in self.states() {
            let mut query_params = String::new();
            for parameter in self.resource_parameters() {
                if !parameter.is_path_param() && !parameter.is_query_param() {
                    continue;
                }

                if parameter.is_query_param() {
                    if !query_params.is_empty() {
                        query_params.push(',');
                    }
                    query_params.push_str(&parameter.name);
                }

                properties.insert(
                    format!("{}.{}.optional", state, parameter.name),
                    parameter.is_optional().to_string(),
                );
                properties.insert(
                    format!("{}.{}.variableName", state, parameter.name),
                    parameter.variable_name().to_string(),
                );
            }

            properties.insert(format!("{}.queryParams", state), query_params);
            properties.insert(format!("{}.path", state), self.path().to_string());
            properties.insert(
                format!("{}.namespace", state),
                self.namespace().unwrap_or_default().to_string(),
            );
        }
        TransitionTemplateProperties { properties }
    }
}
