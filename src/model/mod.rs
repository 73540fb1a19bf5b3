//! View-model types (pure).
//!
//! All types in this module are pure data with smart constructors. The graph
//! is an owned tree: a [`MetadataNode`] root exclusively owning one
//! [`TextNode`].

pub mod error;
pub mod layout_spec;
pub mod metadata_node;
pub mod text_node;
pub mod version;

// Re-export for convenience
pub use error::{AppError, ViewModelError};
pub use layout_spec::{Alignment, LayoutSpec};
pub use metadata_node::MetadataNode;
pub use text_node::TextNode;
pub use version::{Revision, VersionToken, Versionable, VersionedValue};
