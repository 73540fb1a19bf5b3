//! Root node of one screen's view-model graph.

use crate::model::layout_spec::validate_max_lines;
use crate::model::{
    Alignment, LayoutSpec, Revision, TextNode, VersionToken, Versionable, ViewModelError,
};

/// Screen state: the root layout plus the exclusively owned subtitle.
///
/// The graph is a tree. Nothing else references the subtitle, so all change
/// detection can be derived from this value alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataNode {
    layout: Option<LayoutSpec>,
    subtitle: TextNode,
    revision: Revision,
}

impl MetadataNode {
    /// Fresh graph at [`Revision::INITIAL`].
    pub fn new(layout: Option<LayoutSpec>, subtitle: TextNode) -> Self {
        Self {
            layout,
            subtitle,
            revision: Revision::INITIAL,
        }
    }

    /// Root layout; `None` means unconstrained.
    pub fn layout(&self) -> Option<&LayoutSpec> {
        self.layout.as_ref()
    }

    /// The owned subtitle node.
    pub fn subtitle(&self) -> &TextNode {
        &self.subtitle
    }

    /// Exclusive access to the owned child.
    ///
    /// Mutations made through it are reflected in [`MetadataNode::revision`]
    /// and [`Versionable::version_token`] because both are derived from the
    /// child on every call.
    pub fn subtitle_mut(&mut self) -> &mut TextNode {
        &mut self.subtitle
    }

    /// Replace the root layout. An equal layout is a no-op.
    pub fn set_layout(&mut self, layout: Option<LayoutSpec>) {
        if self.layout == layout {
            return;
        }
        self.layout = layout;
        self.revision = self.revision.next();
    }

    /// Update wrap fields of the root layout; absent layout stays absent.
    pub fn update_wrap(
        &mut self,
        max_lines: i64,
        alignment: Alignment,
    ) -> Result<(), ViewModelError> {
        let max_lines = validate_max_lines(max_lines)?;
        self.set_wrap(max_lines, alignment);
        Ok(())
    }

    /// Typed wrap update; cannot fail. Absent layout stays absent.
    pub fn set_wrap(&mut self, max_lines: u32, alignment: Alignment) {
        if let Some(layout) = self.layout {
            self.set_layout(Some(layout.with_wrap(max_lines, alignment)));
        }
    }

    /// Revision of the whole tree: strictly increases on any mutation
    /// reachable from the root.
    pub fn revision(&self) -> Revision {
        self.revision.combined(self.subtitle.revision())
    }
}

impl Versionable for MetadataNode {
    /// Graph token: root layout, subtitle layout, subtitle content.
    ///
    /// Unlike the subtitle's own content-only token this covers every
    /// observable field, so a layout-only change is detected.
    fn version_token(&self) -> VersionToken {
        VersionToken::combine([
            self.layout.version_token(),
            self.subtitle.layout().copied().version_token(),
            self.subtitle.version_token(),
        ])
    }
}
