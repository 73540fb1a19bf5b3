//! Layout parameters attached to view-model nodes.

use crate::model::ViewModelError;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a stack or of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush to the leading edge.
    #[default]
    Leading,
    /// Centered.
    Center,
}

/// Immutable layout snapshot: size constraints plus line wrapping.
///
/// `width`/`height` are in terminal cells; `None` means unconstrained.
/// `max_lines == 0` means unlimited. Values are valid by construction; all
/// updates return a new spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLayoutSpec")]
pub struct LayoutSpec {
    width: Option<u16>,
    height: Option<u16>,
    alignment: Alignment,
    max_lines: u32,
}

impl LayoutSpec {
    /// Smart constructor: rejects negative line counts.
    pub fn new(
        width: Option<u16>,
        height: Option<u16>,
        alignment: Alignment,
        max_lines: i64,
    ) -> Result<Self, ViewModelError> {
        Ok(Self {
            width,
            height,
            alignment,
            max_lines: validate_max_lines(max_lines)?,
        })
    }

    /// No size constraint, leading alignment, unlimited lines.
    pub fn unconstrained() -> Self {
        Self {
            width: None,
            height: None,
            alignment: Alignment::Leading,
            max_lines: 0,
        }
    }

    /// Copy with new wrap fields; width and height untouched.
    ///
    /// On error `self` is unchanged (it is `Copy`; nothing was written).
    pub fn with_updated_wrap(
        &self,
        max_lines: i64,
        alignment: Alignment,
    ) -> Result<Self, ViewModelError> {
        Ok(self.with_wrap(validate_max_lines(max_lines)?, alignment))
    }

    /// Infallible form of [`LayoutSpec::with_updated_wrap`] for already typed counts.
    pub fn with_wrap(&self, max_lines: u32, alignment: Alignment) -> Self {
        Self {
            max_lines,
            alignment,
            ..*self
        }
    }

    /// Copy with a new width constraint.
    pub fn with_width(self, width: Option<u16>) -> Self {
        Self { width, ..self }
    }

    /// Copy with a new height constraint.
    pub fn with_height(self, height: Option<u16>) -> Self {
        Self { height, ..self }
    }

    /// Width constraint in cells.
    pub fn width(&self) -> Option<u16> {
        self.width
    }

    /// Height constraint in cells.
    pub fn height(&self) -> Option<u16> {
        self.height
    }

    /// Stack or text alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Raw wrap count (0 = unlimited).
    pub fn max_lines(&self) -> u32 {
        self.max_lines
    }

    /// `Some(n)` when wrapping is limited to `n` lines.
    pub fn line_limit(&self) -> Option<u32> {
        (self.max_lines > 0).then_some(self.max_lines)
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::unconstrained()
    }
}

/// Check a raw line count: non-negative and within `u32`.
pub(crate) fn validate_max_lines(max_lines: i64) -> Result<u32, ViewModelError> {
    if max_lines < 0 {
        return Err(ViewModelError::InvalidArgument {
            field: "max_lines",
            reason: format!("must be >= 0 (got {max_lines})"),
        });
    }
    u32::try_from(max_lines).map_err(|_| ViewModelError::InvalidArgument {
        field: "max_lines",
        reason: format!("must fit in 32 bits (got {max_lines})"),
    })
}

/// Unvalidated wire form; routed through [`LayoutSpec::new`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLayoutSpec {
    #[serde(default)]
    width: Option<u16>,
    #[serde(default)]
    height: Option<u16>,
    #[serde(default)]
    alignment: Alignment,
    #[serde(default)]
    max_lines: i64,
}

impl TryFrom<RawLayoutSpec> for LayoutSpec {
    type Error = ViewModelError;

    fn try_from(raw: RawLayoutSpec) -> Result<Self, Self::Error> {
        LayoutSpec::new(raw.width, raw.height, raw.alignment, raw.max_lines)
    }
}
