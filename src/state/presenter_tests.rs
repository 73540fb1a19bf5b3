//! Tests for the presenter state machine.

use super::*;
use crate::model::{Alignment, LayoutSpec, TextNode, Versionable};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ===== Test Helpers =====

fn long_text() -> String {
    LONG_TEXT_UNIT.repeat(LONG_TEXT_REPEAT)
}

/// Graph shaped like the default screen: root 40 wide, subtitle 24 wide.
fn screen_graph() -> MetadataNode {
    let root = LayoutSpec::unconstrained().with_width(Some(40));
    let subtitle = LayoutSpec::new(Some(24), None, Alignment::Leading, 2).unwrap();
    MetadataNode::new(Some(root), TextNode::new(long_text(), Some(subtitle)))
}

fn layouts(presenter: &Presenter) -> (LayoutSpec, LayoutSpec) {
    let graph = presenter.graph();
    (
        *graph.layout().expect("root layout"),
        *graph.subtitle().layout().expect("subtitle layout"),
    )
}

// ===== Initial State =====

#[test]
fn fresh_presenter_is_compact_and_long() {
    let presenter = Presenter::new(screen_graph());
    assert_eq!(presenter.device_mode(), DeviceMode::Compact);
    assert_eq!(presenter.content_mode(), ContentMode::Long);
}

#[test]
fn fresh_presenter_applies_compact_layout() {
    let presenter = Presenter::new(screen_graph());
    let (root, subtitle) = layouts(&presenter);
    assert_eq!(root.max_lines(), 0);
    assert_eq!(root.alignment(), Alignment::Center);
    assert_eq!(subtitle.max_lines(), 2);
    assert_eq!(subtitle.alignment(), Alignment::Center);
}

#[test]
fn construction_does_not_publish() {
    let presenter = Presenter::new(screen_graph());
    assert_eq!(presenter.publish_count(), 0);
}

#[test]
fn with_options_applies_regular_layout() {
    let options = PresenterOptions {
        device_mode: DeviceMode::Regular,
        ..PresenterOptions::default()
    };
    let presenter = Presenter::with_options(screen_graph(), options);
    let (root, subtitle) = layouts(&presenter);
    assert_eq!(root.alignment(), Alignment::Leading);
    assert_eq!(subtitle.max_lines(), 3);
}

#[test]
fn construction_replaces_foreign_subtitle_text() {
    let subtitle = LayoutSpec::new(Some(24), None, Alignment::Leading, 2).unwrap();
    let graph = MetadataNode::new(None, TextNode::new("custom", Some(subtitle)));

    let presenter = Presenter::new(graph);

    assert_eq!(presenter.content_mode(), ContentMode::Long);
    assert_eq!(presenter.graph().subtitle().content(), long_text());
}

#[test]
fn construction_in_short_mode_shows_short_text() {
    let options = PresenterOptions {
        content_mode: ContentMode::Short,
        ..PresenterOptions::default()
    };
    let presenter = Presenter::with_options(screen_graph(), options);
    assert_eq!(presenter.graph().subtitle().content(), SHORT_TEXT);
}

#[test]
fn content_toggle_is_involution_over_any_supplied_graph() {
    let graph = MetadataNode::new(None, TextNode::new("custom", None));
    let mut presenter = Presenter::new(graph);
    let before = presenter.graph().subtitle().content().to_string();

    presenter.toggle_content_mode();
    presenter.toggle_content_mode();

    assert_eq!(presenter.graph().subtitle().content(), before);
}

// ===== Device Mode =====

#[test]
fn toggle_device_mode_switches_to_regular_layout() {
    let mut presenter = Presenter::new(screen_graph());
    presenter.toggle_device_mode();

    assert_eq!(presenter.device_mode(), DeviceMode::Regular);
    let (root, subtitle) = layouts(&presenter);
    assert_eq!(root.alignment(), Alignment::Leading);
    assert_eq!(root.max_lines(), 0);
    assert_eq!(subtitle.max_lines(), 3);
    assert_eq!(subtitle.alignment(), Alignment::Leading);
}

#[test]
fn toggle_device_mode_keeps_widths() {
    let mut presenter = Presenter::new(screen_graph());
    presenter.toggle_device_mode();
    let (root, subtitle) = layouts(&presenter);
    assert_eq!(root.width(), Some(40));
    assert_eq!(subtitle.width(), Some(24));
}

#[test]
fn toggle_device_mode_twice_restores_layout() {
    let mut presenter = Presenter::new(screen_graph());
    let before = layouts(&presenter);
    presenter.toggle_device_mode();
    presenter.toggle_device_mode();
    assert_eq!(layouts(&presenter), before);
    assert_eq!(presenter.device_mode(), DeviceMode::Compact);
}

#[test]
fn toggle_device_mode_leaves_content_alone() {
    let mut presenter = Presenter::new(screen_graph());
    presenter.toggle_device_mode();
    assert_eq!(presenter.graph().subtitle().content(), long_text());
}

// ===== Content Mode =====

#[test]
fn toggle_content_mode_shows_short_text() {
    let mut presenter = Presenter::new(screen_graph());
    presenter.toggle_content_mode();
    assert_eq!(presenter.content_mode(), ContentMode::Short);
    assert_eq!(presenter.graph().subtitle().content(), "Short subtitle");
}

#[test]
fn toggle_content_mode_twice_restores_long_text() {
    let mut presenter = Presenter::new(screen_graph());
    presenter.toggle_content_mode();
    presenter.toggle_content_mode();
    assert_eq!(presenter.graph().subtitle().content(), long_text());
}

#[test]
fn toggle_content_mode_leaves_layout_alone() {
    let mut presenter = Presenter::new(screen_graph());
    let before = layouts(&presenter);
    presenter.toggle_content_mode();
    assert_eq!(layouts(&presenter), before);
}

#[test]
fn custom_texts_are_used() {
    let options = PresenterOptions {
        texts: SubtitleTexts::new("tiny", "huge"),
        ..PresenterOptions::default()
    };
    let mut presenter = Presenter::with_options(screen_graph(), options);
    presenter.toggle_content_mode();
    assert_eq!(presenter.graph().subtitle().content(), "tiny");
    presenter.toggle_content_mode();
    assert_eq!(presenter.graph().subtitle().content(), "huge");
}

// ===== Publish Contract =====

#[test]
fn each_transition_publishes_exactly_once() {
    let mut presenter = Presenter::new(screen_graph());
    let count = Rc::new(Cell::new(0));
    let _sub = {
        let count = Rc::clone(&count);
        presenter.subscribe(move |_| count.set(count.get() + 1))
    };

    presenter.toggle_device_mode();
    assert_eq!(count.get(), 1);
    presenter.toggle_content_mode();
    assert_eq!(count.get(), 2);
    presenter.refresh();
    assert_eq!(count.get(), 3);
    assert_eq!(presenter.publish_count(), 3);
}

#[test]
fn notification_carries_post_transition_graph() {
    let mut presenter = Presenter::new(screen_graph());
    let seen: Rc<RefCell<Vec<(Alignment, u32, String)>>> = Rc::new(RefCell::new(Vec::new()));
    let _sub = {
        let seen = Rc::clone(&seen);
        presenter.subscribe(move |graph| {
            let root = graph.layout().map(|l| l.alignment()).unwrap_or_default();
            let lines = graph.subtitle().layout().map(|l| l.max_lines()).unwrap_or(0);
            seen.borrow_mut()
                .push((root, lines, graph.subtitle().content().to_string()));
        })
    };

    presenter.toggle_device_mode();
    presenter.toggle_content_mode();

    let seen = seen.borrow();
    assert_eq!(seen[0], (Alignment::Leading, 3, long_text()));
    assert_eq!(seen[1], (Alignment::Leading, 3, "Short subtitle".to_string()));
}

#[test]
fn notified_graph_token_matches_presenter_graph() {
    let mut presenter = Presenter::new(screen_graph());
    let last = Rc::new(RefCell::new(None));
    let _sub = {
        let last = Rc::clone(&last);
        presenter.subscribe(move |graph| *last.borrow_mut() = Some(graph.version_token()))
    };
    presenter.toggle_device_mode();
    assert_eq!(
        last.borrow().as_ref(),
        Some(&presenter.graph().version_token())
    );
}

#[test]
fn unsubscribed_handler_is_not_called() {
    let mut presenter = Presenter::new(screen_graph());
    let count = Rc::new(Cell::new(0));
    let sub = {
        let count = Rc::clone(&count);
        presenter.subscribe(move |_| count.set(count.get() + 1))
    };
    assert!(presenter.unsubscribe(sub));
    presenter.toggle_device_mode();
    assert_eq!(count.get(), 0);
    assert_eq!(presenter.subscriber_count(), 0);
}

#[test]
fn handle_dispatches_events() {
    let mut presenter = Presenter::new(screen_graph());
    presenter.handle(PresenterEvent::ToggleDeviceMode);
    presenter.handle(PresenterEvent::ToggleContentMode);
    presenter.handle(PresenterEvent::Refresh);
    assert_eq!(presenter.device_mode(), DeviceMode::Regular);
    assert_eq!(presenter.content_mode(), ContentMode::Short);
    assert_eq!(presenter.publish_count(), 3);
}

// ===== Snapshots & Revisions =====

#[test]
fn snapshot_is_detached_from_later_mutations() {
    let mut presenter = Presenter::new(screen_graph());
    let snapshot = presenter.snapshot();
    presenter.toggle_content_mode();

    assert_eq!(snapshot.value().subtitle().content(), long_text());
    assert!(!snapshot.is_current_for(presenter.graph()));
}

#[test]
fn refresh_does_not_change_revision_or_token() {
    let mut presenter = Presenter::new(screen_graph());
    let revision = presenter.graph().revision();
    let token = presenter.graph().version_token();
    presenter.refresh();
    assert_eq!(presenter.graph().revision(), revision);
    assert_eq!(presenter.graph().version_token(), token);
}

#[test]
fn every_toggle_advances_revision() {
    let mut presenter = Presenter::new(screen_graph());
    let mut last = presenter.graph().revision();
    for event in [
        PresenterEvent::ToggleDeviceMode,
        PresenterEvent::ToggleContentMode,
        PresenterEvent::ToggleDeviceMode,
        PresenterEvent::ToggleContentMode,
    ] {
        presenter.handle(event);
        let now = presenter.graph().revision();
        assert!(now > last, "{event:?} should advance the revision");
        last = now;
    }
}
