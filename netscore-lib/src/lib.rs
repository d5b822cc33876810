#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for netscore
//!
//! This library computes a composite quality score for a package from its
//! manifest (`package.json`-style metadata) and its dependency lock file.
//!
//! # Module Organization
//!
//! - [`documents`]: Loading and querying the two input documents
//! - [`metrics`]: The individual metric functions and the orchestrator that combines them
//! - [`reports`]: Report generation in JSON and console formats
//! - [`recommend`]: Interfaces for the package recommendation collaborator
//! - `commands`: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod documents;
pub mod metrics;
pub mod recommend;
pub mod reports;

pub use crate::commands::{Host, run};
