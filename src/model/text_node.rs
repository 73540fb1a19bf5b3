//! Leaf text node of the view-model graph.

use crate::model::layout_spec::validate_max_lines;
use crate::model::{Alignment, LayoutSpec, Revision, VersionToken, Versionable, ViewModelError};
use std::sync::Arc;

/// A piece of text plus its optional layout.
///
/// # Version Policy
/// [`Versionable::version_token`] is defined by content only: two nodes with
/// equal text report equal tokens, whatever their layout or identity. Use
/// [`TextNode::revision`] when layout changes must be detected too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    content: Arc<str>,
    layout: Option<LayoutSpec>,
    revision: Revision,
}

impl TextNode {
    /// Fresh node at [`Revision::INITIAL`].
    pub fn new(content: impl Into<Arc<str>>, layout: Option<LayoutSpec>) -> Self {
        Self {
            content: content.into(),
            layout,
            revision: Revision::INITIAL,
        }
    }

    /// Current text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Own layout; `None` means unconstrained.
    pub fn layout(&self) -> Option<&LayoutSpec> {
        self.layout.as_ref()
    }

    /// Mutation counter; bumped whenever content or layout actually changes.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Replace content, leaving layout untouched. Equal text is a no-op.
    pub fn update_content(&mut self, new_text: impl Into<Arc<str>>) {
        let new_text = new_text.into();
        if self.content == new_text {
            return;
        }
        self.content = new_text;
        self.revision = self.revision.next();
    }

    /// Replace the whole layout. An equal layout is a no-op.
    pub fn set_layout(&mut self, layout: Option<LayoutSpec>) {
        if self.layout == layout {
            return;
        }
        self.layout = layout;
        self.revision = self.revision.next();
    }

    /// Update wrap fields of the node's own layout.
    ///
    /// A node without layout stays without one. Validation happens before any
    /// write, so an error leaves the node unchanged.
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
}

impl Versionable for TextNode {
    fn version_token(&self) -> VersionToken {
        VersionToken::from_content(Arc::clone(&self.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LayoutSpec {
        LayoutSpec::new(Some(24), None, Alignment::Leading, 2).unwrap()
    }

    #[test]
    fn equal_content_gives_equal_tokens_regardless_of_layout() {
        let a = TextNode::new("same", Some(layout()));
        let b = TextNode::new("same", None);
        assert_eq!(a.version_token(), b.version_token());
    }

    #[test]
    fn different_content_gives_different_tokens() {
        let a = TextNode::new("one", None);
        let b = TextNode::new("two", None);
        assert_ne!(a.version_token(), b.version_token());
    }

    #[test]
    fn update_content_keeps_layout_and_bumps_revision() {
        let mut node = TextNode::new("before", Some(layout()));
        node.update_content("after");
        assert_eq!(node.content(), "after");
        assert_eq!(node.layout(), Some(&layout()));
        assert_eq!(node.revision().get(), 1);
    }

    #[test]
    fn writing_equal_content_does_not_bump_revision() {
        let mut node = TextNode::new("same", None);
        node.update_content("same");
        assert_eq!(node.revision(), Revision::INITIAL);
    }

    #[test]
    fn layout_change_bumps_revision_but_not_token() {
        let mut node = TextNode::new("text", Some(layout()));
        let token = node.version_token();
        node.update_wrap(3, Alignment::Center).unwrap();
        assert_eq!(node.layout().map(|l| l.max_lines()), Some(3));
        assert_eq!(node.revision().get(), 1);
        assert_eq!(node.version_token(), token);
    }

    #[test]
    fn update_wrap_without_layout_is_noop() {
        let mut node = TextNode::new("text", None);
        node.update_wrap(3, Alignment::Center).unwrap();
        assert!(node.layout().is_none());
        assert_eq!(node.revision(), Revision::INITIAL);
        assert!(node.update_wrap(-1, Alignment::Center).is_err());
    }

    #[test]
    fn update_wrap_rejects_negative_and_leaves_node() {
        let mut node = TextNode::new("text", Some(layout()));
        let before = node.clone();
        let err = node.update_wrap(-1, Alignment::Center);
        assert!(err.is_err());
        assert_eq!(node, before);
    }
}
