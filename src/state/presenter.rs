//! Presenter: the single writer of the view-model graph.
//!
//! Every public transition mutates the graph synchronously and then publishes
//! exactly one notification carrying the post-transition graph. Handlers only
//! ever see `&MetadataNode` while the presenter is mutably borrowed, so a
//! handler cannot reenter the presenter.

use crate::model::{MetadataNode, VersionedValue};
use crate::state::modes::{ContentMode, DeviceMode};
use crate::state::publisher::{Publisher, Subscription};
use std::sync::Arc;
use tracing::debug;

/// Unit text repeated to build the long subtitle.
pub const LONG_TEXT_UNIT: &str = "This is a very long title and content ";

/// Number of repetitions of [`LONG_TEXT_UNIT`] in the long subtitle.
pub const LONG_TEXT_REPEAT: usize = 3;

/// Subtitle shown in [`ContentMode::Short`].
pub const SHORT_TEXT: &str = "Short subtitle";

/// The two subtitle literals the content toggle switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTexts {
    /// Text for [`ContentMode::Short`].
    pub short: Arc<str>,
    /// Text for [`ContentMode::Long`].
    pub long: Arc<str>,
}

impl SubtitleTexts {
    /// Pair of texts, short first.
    pub fn new(short: impl Into<Arc<str>>, long: impl Into<Arc<str>>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
        }
    }

    /// Text for `mode`.
    pub fn for_mode(&self, mode: ContentMode) -> &Arc<str> {
        match mode {
            ContentMode::Short => &self.short,
            ContentMode::Long => &self.long,
        }
    }
}

impl Default for SubtitleTexts {
    fn default() -> Self {
        Self::new(SHORT_TEXT, LONG_TEXT_UNIT.repeat(LONG_TEXT_REPEAT))
    }
}

/// Initial state of a [`Presenter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenterOptions {
    /// Initial device mode.
    pub device_mode: DeviceMode,
    /// Initial content mode.
    pub content_mode: ContentMode,
    /// Texts the content toggle switches between.
    pub texts: SubtitleTexts,
}

/// External events the presenter reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PresenterEvent {
    /// Flip compact/regular.
    #[value(name = "device")]
    ToggleDeviceMode,
    /// Flip short/long subtitle.
    #[value(name = "content")]
    ToggleContentMode,
    /// Republish without mutating.
    #[value(name = "refresh")]
    Refresh,
}

/// Owns the graph, applies transitions, publishes changes.
#[derive(Debug)]
pub struct Presenter {
    graph: MetadataNode,
    device_mode: DeviceMode,
    content_mode: ContentMode,
    texts: SubtitleTexts,
    publisher: Publisher<MetadataNode>,
    publish_count: u64,
}

impl Presenter {
    /// Presenter in `{compact, long}` with the default subtitle texts.
    pub fn new(graph: MetadataNode) -> Self {
        Self::with_options(graph, PresenterOptions::default())
    }

    /// Presenter in the given initial state.
    ///
    /// Brings `graph` in line with `options` right away: the layout rules of
    /// `options.device_mode` and the subtitle text of `options.content_mode`.
    /// Nothing is published: nobody can be subscribed yet.
    pub fn with_options(graph: MetadataNode, options: PresenterOptions) -> Self {
        let mut presenter = Self {
            graph,
            device_mode: options.device_mode,
            content_mode: options.content_mode,
            texts: options.texts,
            publisher: Publisher::new(),
            publish_count: 0,
        };
        presenter.apply_layout_rules();
        presenter.apply_content();
        presenter
    }

    /// Current graph.
    pub fn graph(&self) -> &MetadataNode {
        &self.graph
    }

    /// Owned, immutable copy of the graph with its token captured now.
    pub fn snapshot(&self) -> VersionedValue<MetadataNode> {
        VersionedValue::new(self.graph.clone())
    }

    /// Current device mode.
    pub fn device_mode(&self) -> DeviceMode {
        self.device_mode
    }

    /// Current content mode.
    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    /// Total notifications published so far.
    pub fn publish_count(&self) -> u64 {
        self.publish_count
    }

    /// Live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.publisher.subscriber_count()
    }

    /// Register a "graph changed" handler.
    pub fn subscribe(
        &mut self,
        handler: impl FnMut(&MetadataNode) + 'static,
    ) -> Subscription<MetadataNode> {
        self.publisher.subscribe(handler)
    }

    /// Remove a handler. Returns `false` if it was not registered here.
    pub fn unsubscribe(&mut self, subscription: Subscription<MetadataNode>) -> bool {
        self.publisher.unsubscribe(subscription)
    }

    /// Dispatch an external event to its transition.
    pub fn handle(&mut self, event: PresenterEvent) {
        match event {
            PresenterEvent::ToggleDeviceMode => self.toggle_device_mode(),
            PresenterEvent::ToggleContentMode => self.toggle_content_mode(),
            PresenterEvent::Refresh => self.refresh(),
        }
    }

    /// Flip compact/regular, re-derive both layouts, publish.
    pub fn toggle_device_mode(&mut self) {
        self.device_mode = self.device_mode.toggled();
        self.apply_layout_rules();
        debug!(device_mode = %self.device_mode, "device mode toggled");
        self.publish("toggle_device_mode");
    }

    /// Flip short/long, swap the subtitle text, publish.
    pub fn toggle_content_mode(&mut self) {
        self.content_mode = self.content_mode.toggled();
        self.apply_content();
        debug!(content_mode = %self.content_mode, "content mode toggled");
        self.publish("toggle_content_mode");
    }

    /// Publish the current graph unchanged.
    pub fn refresh(&mut self) {
        self.publish("refresh");
    }

    fn apply_layout_rules(&mut self) {
        let rules = self.device_mode.layout_rules();
        self.graph.set_wrap(rules.root.max_lines, rules.root.alignment);
        self.graph
            .subtitle_mut()
            .set_wrap(rules.subtitle.max_lines, rules.subtitle.alignment);
    }

    fn apply_content(&mut self) {
        let text = Arc::clone(self.texts.for_mode(self.content_mode));
        self.graph.subtitle_mut().update_content(text);
    }

    fn publish(&mut self, cause: &'static str) {
        self.publish_count += 1;
        let notified = self.publisher.publish(&self.graph);
        debug!(
            cause,
            notified,
            revision = self.graph.revision().get(),
            "graph changed"
        );
    }
}

#[cfg(test)]
#[path = "presenter_tests.rs"]
mod tests;
