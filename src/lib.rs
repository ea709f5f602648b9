//! Hyperbind Core Library
//!
//! This library provides the metadata-aggregation layer used by REST API
//! documentation pipelines: it merges the resource definitions that share a
//! URI path into a single [`binding::ResourceBinding`] and derives, per
//! application state, the flattened template properties needed to render a
//! URI/query template for transitioning into that state.
//!
//! The crate performs no I/O and serves no requests; it is a static,
//! build-time transformation driven entirely by a host discovery tool.

pub mod binding;
pub mod error;
pub mod parameter;
pub mod resource;
pub mod transition;

pub use crate::{
    binding::{BindingMetadata, ResourceBinding},
    error::{Error, Result},
    parameter::{ParameterKind, ResourceParameter, TransitionOverride},
    resource::{ResourceDefinition, ResourceMethod, ResponseCode, StateTransition},
    transition::TransitionTemplateProperties,
};
