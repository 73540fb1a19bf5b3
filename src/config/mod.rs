//! Configuration module.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};

use crate::model::{Alignment, LayoutSpec, MetadataNode, TextNode};
use crate::state::{ContentMode, DeviceMode, Presenter, PresenterOptions, SubtitleTexts};

/// Default frame width in cells.
pub const DEFAULT_ROOT_WIDTH: u16 = 40;

/// Default subtitle box width in cells.
pub const DEFAULT_SUBTITLE_WIDTH: u16 = 24;

/// Initial line limit of the subtitle, before device rules apply.
const INITIAL_SUBTITLE_MAX_LINES: u32 = 2;

/// Everything needed to build the screen's graph and presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Fixed label above the subtitle.
    pub title: String,
    /// Frame width in cells.
    pub root_width: u16,
    /// Subtitle box width in cells.
    pub subtitle_width: u16,
    /// Short and long subtitle texts.
    pub texts: SubtitleTexts,
    /// Initial device mode.
    pub device_mode: DeviceMode,
    /// Initial content mode.
    pub content_mode: ContentMode,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title: "Title".to_string(),
            root_width: DEFAULT_ROOT_WIDTH,
            subtitle_width: DEFAULT_SUBTITLE_WIDTH,
            texts: SubtitleTexts::default(),
            device_mode: DeviceMode::default(),
            content_mode: ContentMode::default(),
        }
    }
}

impl ScreenConfig {
    /// Initial graph: root constrained to `root_width`, subtitle holding the
    /// text for `content_mode` in a `subtitle_width` box.
    pub fn build_graph(&self) -> MetadataNode {
        let root = LayoutSpec::unconstrained().with_width(Some(self.root_width));
        let subtitle_layout = LayoutSpec::unconstrained()
            .with_width(Some(self.subtitle_width))
            .with_wrap(INITIAL_SUBTITLE_MAX_LINES, Alignment::Leading);
        let subtitle = TextNode::new(
            self.texts.for_mode(self.content_mode).clone(),
            Some(subtitle_layout),
        );
        MetadataNode::new(Some(root), subtitle)
    }

    /// Initial presenter state matching this config.
    pub fn presenter_options(&self) -> PresenterOptions {
        PresenterOptions {
            device_mode: self.device_mode,
            content_mode: self.content_mode,
            texts: self.texts.clone(),
        }
    }

    /// Presenter over [`ScreenConfig::build_graph`] in the configured modes.
    pub fn build_presenter(&self) -> Presenter {
        Presenter::with_options(self.build_graph(), self.presenter_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::presenter::{LONG_TEXT_UNIT, SHORT_TEXT};

    #[test]
    fn default_screen_matches_initial_state() {
        let config = ScreenConfig::default();
        assert_eq!(config.title, "Title");
        assert_eq!(config.device_mode, DeviceMode::Compact);
        assert_eq!(config.content_mode, ContentMode::Long);
        assert_eq!(config.texts.short.as_ref(), SHORT_TEXT);
        assert_eq!(config.texts.long.as_ref(), LONG_TEXT_UNIT.repeat(3));
    }

    #[test]
    fn build_graph_uses_widths_and_long_text() {
        let graph = ScreenConfig::default().build_graph();
        let root = graph.layout().expect("root layout");
        assert_eq!(root.width(), Some(40));
        assert_eq!(root.max_lines(), 0);

        let subtitle = graph.subtitle().layout().expect("subtitle layout");
        assert_eq!(subtitle.width(), Some(24));
        assert_eq!(subtitle.max_lines(), 2);
        assert_eq!(subtitle.alignment(), Alignment::Leading);
        assert_eq!(graph.subtitle().content(), LONG_TEXT_UNIT.repeat(3));
    }

    #[test]
    fn build_graph_honors_short_content_mode() {
        let config = ScreenConfig {
            content_mode: ContentMode::Short,
            ..ScreenConfig::default()
        };
        assert_eq!(config.build_graph().subtitle().content(), SHORT_TEXT);
    }

    #[test]
    fn build_presenter_applies_device_rules() {
        let presenter = ScreenConfig::default().build_presenter();
        let graph = presenter.graph();
        assert_eq!(graph.layout().unwrap().alignment(), Alignment::Center);
        assert_eq!(graph.subtitle().layout().unwrap().alignment(), Alignment::Center);
        assert_eq!(graph.subtitle().layout().unwrap().max_lines(), 2);
        // Widths survive the rule application.
        assert_eq!(graph.layout().unwrap().width(), Some(40));
        assert_eq!(graph.subtitle().layout().unwrap().width(), Some(24));
    }

    #[test]
    fn build_presenter_in_regular_mode() {
        let config = ScreenConfig {
            device_mode: DeviceMode::Regular,
            ..ScreenConfig::default()
        };
        let presenter = config.build_presenter();
        assert_eq!(presenter.device_mode(), DeviceMode::Regular);
        assert_eq!(presenter.graph().subtitle().layout().unwrap().max_lines(), 3);
    }
}
