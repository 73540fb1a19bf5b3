//! Screen widget: draws a [`RenderDescription`] into a ratatui buffer.
//!
//! Layout rules:
//! - The frame is the description's width/height clipped to the target area.
//! - Row 0 holds the title, placed per the stack alignment.
//! - The subtitle box sits below it, placed per the stack alignment, as wide
//!   as its layout allows (frame width when unconstrained). Text is wrapped
//!   to the box, aligned per the subtitle layout, and cut to `max_lines`
//!   and `height`.

use crate::model::Alignment;
use crate::view::wrap::wrap_words;
use crate::view_state::{RenderDescription, TextElement};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Widget adapter over a borrowed render description.
#[derive(Debug, Clone, Copy)]
pub struct ScreenWidget<'a> {
    description: &'a RenderDescription,
}

impl<'a> ScreenWidget<'a> {
    /// Widget drawing `description`.
    pub fn new(description: &'a RenderDescription) -> Self {
        Self { description }
    }
}

impl Widget for ScreenWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let desc = self.description;
        let frame = frame_rect(desc, area);
        if frame.is_empty() {
            return;
        }

        let title_x = frame.x + offset(desc.stack_alignment, frame.width, desc.title.width());
        buf.set_stringn(
            title_x,
            frame.y,
            &desc.title,
            usize::from(frame.width),
            Style::default().add_modifier(Modifier::BOLD),
        );

        if let Some(subtitle) = &desc.subtitle {
            let body = Rect {
                y: frame.y.saturating_add(1),
                height: frame.height.saturating_sub(1),
                ..frame
            };
            render_text(subtitle, desc.stack_alignment, body, buf);
        }
    }
}

/// Outer frame: requested size clipped to `area`.
fn frame_rect(desc: &RenderDescription, area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: desc.frame.width.map_or(area.width, |w| w.min(area.width)),
        height: desc.frame.height.map_or(area.height, |h| h.min(area.height)),
    }
}

/// Lines of `element` as they will appear in a box `box_width` wide.
pub fn text_lines(element: &TextElement, box_width: u16) -> Vec<String> {
    let mut lines = wrap_words(&element.content, box_width);
    if let Some(limit) = element.line_limit() {
        lines.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    if let Some(height) = element.layout.and_then(|l| l.height()) {
        lines.truncate(usize::from(height));
    }
    lines
}

fn render_text(element: &TextElement, placement: Alignment, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let box_width = element
        .layout
        .and_then(|l| l.width())
        .map_or(area.width, |w| w.min(area.width));
    let box_x = area.x + offset(placement, area.width, usize::from(box_width));

    let lines = text_lines(element, box_width);
    let alignment = element.text_alignment();
    for (row, line) in lines.iter().take(usize::from(area.height)).enumerate() {
        // row < area.height, which is a u16
        let y = area.y + row as u16;
        let x = box_x + offset(alignment, box_width, line.width());
        buf.set_stringn(x, y, line, usize::from(box_width), Style::default());
    }
}

/// Leading offset of content `content_width` wide inside `available` columns.
fn offset(alignment: Alignment, available: u16, content_width: usize) -> u16 {
    match alignment {
        Alignment::Leading => 0,
        Alignment::Center => {
            let content = u16::try_from(content_width).unwrap_or(u16::MAX);
            available.saturating_sub(content) / 2
        }
    }
}

/// Render `description` off-screen and return the visible text.
///
/// Trailing spaces are trimmed from every row and trailing empty rows are
/// dropped.
pub fn render_to_string(description: &RenderDescription, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    ScreenWidget::new(description).render(area, &mut buf);
    buffer_to_string(&buf)
}

/// Convert a buffer to plain text, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::with_capacity(usize::from(area.height));

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
