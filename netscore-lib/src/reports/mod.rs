//! Report generation for scoring results
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **JSON**: The machine-readable contract. A single object with the twelve
//!   report entries in their fixed order, pretty-printed with two-space indents.
//!   Failed scores appear as the integer `-1`.
//! - **Console**: An aligned, optionally colored text table of the same entries.
//!
//! Both generators consume [`MetricsReport::entries`](crate::metrics::MetricsReport::entries),
//! so the ordering rules live in one place.

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
