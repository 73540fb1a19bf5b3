//! Presenter state machine (pure).
//!
//! All transitions are synchronous and testable without a terminal.

pub mod modes;
pub mod presenter;
pub mod publisher;

// Re-export for convenience
pub use modes::{ContentMode, DeviceMode, LayoutRules, UnknownMode, WrapRule};
pub use presenter::{Presenter, PresenterEvent, PresenterOptions, SubtitleTexts};
pub use publisher::{Publisher, Subscription, SubscriptionId};
