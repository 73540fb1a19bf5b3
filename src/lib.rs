//! vmgraph
//!
//! A versioned, observable view-model graph for a two-element screen (a
//! fixed title over a switchable subtitle), driven by a presenter that
//! re-derives layout from device and content modes and publishes every
//! change to subscribed renderers.
//!
//! Pure core (`model`, `state`, `view_state`) with a thin impure shell
//! (`config`, `logging`, `view`, `integration`).

pub mod config;
pub mod integration;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;
