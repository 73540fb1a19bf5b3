//! View-state layer - render descriptions and the render binding
//!
//! # Module Structure
//!
//! - `renderer`: RenderDescription and the layout resolution rule
//! - `binding`: RenderBinding - subscription that keeps a description current

pub mod binding;
pub mod renderer;

pub use binding::{BindingStats, RenderBinding};
pub use renderer::{describe, resolve_layout, FrameConstraint, RenderDescription, TextElement};
