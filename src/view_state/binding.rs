//! Render binding: a one-way subscription from a renderer to a presenter.
//!
//! The binding keeps the graph it last rendered as a
//! [`VersionedValue`](crate::model::VersionedValue). A notification whose graph
//! still carries that token is skipped instead of rebuilt.

use crate::model::{LayoutSpec, MetadataNode, VersionedValue};
use crate::state::{Presenter, Subscription};
use crate::view_state::renderer::{describe, RenderDescription};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::trace;

/// Render counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindingStats {
    /// Descriptions built (including the initial one).
    pub rendered: u64,
    /// Notifications skipped because the graph token was unchanged.
    pub skipped: u64,
}

struct BindingState {
    title: Arc<str>,
    subtitle_override: Option<LayoutSpec>,
    rendered_graph: VersionedValue<MetadataNode>,
    current: RenderDescription,
    stats: BindingStats,
}

impl BindingState {
    fn new(graph: &MetadataNode, title: Arc<str>, subtitle_override: Option<LayoutSpec>) -> Self {
        let current = describe(graph, &title, subtitle_override.as_ref());
        Self {
            title,
            subtitle_override,
            rendered_graph: VersionedValue::new(graph.clone()),
            current,
            stats: BindingStats {
                rendered: 1,
                skipped: 0,
            },
        }
    }

    fn on_graph_changed(&mut self, graph: &MetadataNode) {
        if self.rendered_graph.is_current_for(graph) {
            self.stats.skipped += 1;
            trace!(skipped = self.stats.skipped, "graph token unchanged, render skipped");
            return;
        }

        self.current = describe(graph, &self.title, self.subtitle_override.as_ref());
        self.rendered_graph = VersionedValue::new(graph.clone());
        self.stats.rendered += 1;
        trace!(
            rendered = self.stats.rendered,
            revision = graph.revision().get(),
            "render description rebuilt"
        );
    }
}

/// Keeps a [`RenderDescription`] in sync with a presenter's graph.
///
/// Dropping the binding unsubscribes it.
pub struct RenderBinding {
    state: Rc<RefCell<BindingState>>,
    subscription: Subscription<MetadataNode>,
}

impl RenderBinding {
    /// Subscribe to `presenter` and render its current graph immediately.
    pub fn attach(presenter: &mut Presenter, title: impl Into<Arc<str>>) -> Self {
        Self::attach_with_override(presenter, title, None)
    }

    /// Like [`RenderBinding::attach`], with a layout that overrides the
    /// subtitle's own.
    pub fn attach_with_override(
        presenter: &mut Presenter,
        title: impl Into<Arc<str>>,
        subtitle_override: Option<LayoutSpec>,
    ) -> Self {
        let state = Rc::new(RefCell::new(BindingState::new(
            presenter.graph(),
            title.into(),
            subtitle_override,
        )));

        let weak = Rc::downgrade(&state);
        let subscription = presenter.subscribe(move |graph| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().on_graph_changed(graph);
            }
        });

        Self {
            state,
            subscription,
        }
    }

    /// Current render description (cloned).
    pub fn current(&self) -> RenderDescription {
        self.state.borrow().current.clone()
    }

    /// Borrow the current render description.
    pub fn with_current<R>(&self, f: impl FnOnce(&RenderDescription) -> R) -> R {
        f(&self.state.borrow().current)
    }

    /// Render and skip counters so far.
    pub fn stats(&self) -> BindingStats {
        self.state.borrow().stats
    }

    /// Unsubscribe from `presenter` explicitly.
    pub fn detach(self, presenter: &mut Presenter) -> bool {
        presenter.unsubscribe(self.subscription)
    }
}

impl std::fmt::Debug for RenderBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderBinding")
            .field("subscription", &self.subscription)
            .field("stats", &self.stats())
            .finish()
    }
}
