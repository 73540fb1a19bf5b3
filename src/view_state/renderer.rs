//! Graph → render description.
//!
//! A [`RenderDescription`] is what the rendering layer draws: a stack aligned
//! leading or center, holding a fixed title label and the subtitle text with
//! its resolved constraints. It is plain data, so it can be diffed, cached,
//! serialized or drawn by any backend.

use crate::model::{Alignment, LayoutSpec, MetadataNode};
use serde::Serialize;

/// Size constraint of the outer frame. `None` = fill the available space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FrameConstraint {
    /// Width in cells.
    pub width: Option<u16>,
    /// Height in cells.
    pub height: Option<u16>,
}

/// A text leaf with its effective layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextElement {
    /// Text to draw.
    pub content: String,
    /// Resolved layout; `None` means unconstrained.
    pub layout: Option<LayoutSpec>,
}

impl TextElement {
    /// Alignment of the text within its box (leading when unconstrained).
    pub fn text_alignment(&self) -> Alignment {
        self.layout.map(|l| l.alignment()).unwrap_or_default()
    }

    /// `Some(n)` when the text may occupy at most `n` lines.
    pub fn line_limit(&self) -> Option<u32> {
        self.layout.and_then(|l| l.line_limit())
    }
}

/// Everything needed to draw one frame of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderDescription {
    /// Outer frame size.
    pub frame: FrameConstraint,
    /// Placement of the title and the subtitle box.
    pub stack_alignment: Alignment,
    /// Fixed label on the first row.
    pub title: String,
    /// Absent when the subtitle has no text: an empty subtitle is
    /// deliberately not drawn, leaving the title alone in the frame.
    pub subtitle: Option<TextElement>,
}

/// Effective layout of a leaf text element.
///
/// Explicit override first, then the node's own layout, else unconstrained.
pub fn resolve_layout(
    preferred: Option<&LayoutSpec>,
    own: Option<&LayoutSpec>,
) -> Option<LayoutSpec> {
    preferred.or(own).copied()
}

/// Build the render description for `graph`.
///
/// `subtitle_override` takes precedence over the subtitle's own layout.
pub fn describe(
    graph: &MetadataNode,
    title: &str,
    subtitle_override: Option<&LayoutSpec>,
) -> RenderDescription {
    let root = graph.layout();
    let frame = FrameConstraint {
        width: root.and_then(|l| l.width()),
        height: root.and_then(|l| l.height()),
    };
    // A root without layout stacks leading.
    let stack_alignment = root.map(|l| l.alignment()).unwrap_or_default();

    let subtitle_node = graph.subtitle();
    let subtitle = (!subtitle_node.content().is_empty()).then(|| TextElement {
        content: subtitle_node.content().to_string(),
        layout: resolve_layout(subtitle_override, subtitle_node.layout()),
    });

    RenderDescription {
        frame,
        stack_alignment,
        title: title.to_string(),
        subtitle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextNode;

    fn spec(width: u16, alignment: Alignment, max_lines: i64) -> LayoutSpec {
        LayoutSpec::new(Some(width), None, alignment, max_lines).unwrap()
    }

    #[test]
    fn resolve_prefers_override() {
        let preferred = spec(10, Alignment::Center, 1);
        let own = spec(20, Alignment::Leading, 2);
        assert_eq!(resolve_layout(Some(&preferred), Some(&own)), Some(preferred));
    }

    #[test]
    fn resolve_falls_back_to_own() {
        let own = spec(20, Alignment::Leading, 2);
        assert_eq!(resolve_layout(None, Some(&own)), Some(own));
    }

    #[test]
    fn resolve_without_any_layout_is_unconstrained() {
        assert_eq!(resolve_layout(None, None), None);
    }

    #[test]
    fn describe_reads_root_and_subtitle() {
        let graph = MetadataNode::new(
            Some(spec(40, Alignment::Center, 0)),
            TextNode::new("hello", Some(spec(24, Alignment::Center, 2))),
        );
        let desc = describe(&graph, "Title", None);

        assert_eq!(desc.frame.width, Some(40));
        assert_eq!(desc.frame.height, None);
        assert_eq!(desc.stack_alignment, Alignment::Center);
        assert_eq!(desc.title, "Title");
        let subtitle = desc.subtitle.expect("subtitle present");
        assert_eq!(subtitle.content, "hello");
        assert_eq!(subtitle.line_limit(), Some(2));
        assert_eq!(subtitle.text_alignment(), Alignment::Center);
    }

    #[test]
    fn describe_without_root_layout_is_leading_and_unbounded() {
        let graph = MetadataNode::new(None, TextNode::new("hello", None));
        let desc = describe(&graph, "Title", None);
        assert_eq!(desc.frame, FrameConstraint::default());
        assert_eq!(desc.stack_alignment, Alignment::Leading);
        let subtitle = desc.subtitle.unwrap();
        assert_eq!(subtitle.layout, None);
        assert_eq!(subtitle.line_limit(), None);
        assert_eq!(subtitle.text_alignment(), Alignment::Leading);
    }

    #[test]
    fn describe_applies_override() {
        let graph = MetadataNode::new(
            None,
            TextNode::new("hello", Some(spec(24, Alignment::Center, 2))),
        );
        let preferred = spec(8, Alignment::Leading, 1);
        let desc = describe(&graph, "Title", Some(&preferred));
        assert_eq!(desc.subtitle.unwrap().layout, Some(preferred));
    }

    #[test]
    fn describe_omits_empty_subtitle() {
        let graph = MetadataNode::new(None, TextNode::new("", None));
        assert!(describe(&graph, "Title", None).subtitle.is_none());
    }

    #[test]
    fn description_serializes_to_json() {
        let graph = MetadataNode::new(
            Some(spec(40, Alignment::Center, 0)),
            TextNode::new("hi", None),
        );
        let json = serde_json::to_value(describe(&graph, "Title", None)).unwrap();
        assert_eq!(json["stack_alignment"], "center");
        assert_eq!(json["frame"]["width"], 40);
        assert_eq!(json["subtitle"]["content"], "hi");
        assert!(json["subtitle"]["layout"].is_null());
    }
}
