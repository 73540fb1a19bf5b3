//! Event-script integration.
//!
//! Wires a presenter, a render binding and the screen widget together,
//! replays a script of events and writes one frame per step. No terminal is
//! involved: frames are rendered off-screen, so the whole loop is testable
//! against any `Write`.

use crate::config::ScreenConfig;
use crate::model::AppError;
use crate::state::PresenterEvent;
use crate::view::render_to_string;
use crate::view_state::{BindingStats, RenderBinding, RenderDescription};
use std::io::Write;
use tracing::{debug, info};

/// Frame output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rendered cells, frames separated by a blank line.
    #[default]
    Text,
    /// One `RenderDescription` JSON object per line.
    Json,
}

/// What to replay and how to print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Events replayed in order after the initial frame.
    pub events: Vec<PresenterEvent>,
    /// Frame encoding.
    pub format: OutputFormat,
    /// Off-screen buffer size for text output.
    pub width: u16,
    /// Off-screen buffer height for text output.
    pub height: u16,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            format: OutputFormat::Text,
            width: 40,
            height: 6,
        }
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames written, including the initial one.
    pub frames: usize,
    /// Render counters of the binding at the end of the run.
    pub stats: BindingStats,
}

/// Replay `script` against a presenter built from `config`.
///
/// Writes the initial frame, then one frame per event.
///
/// # Errors
///
/// Propagates write and JSON encoding failures.
pub fn run_script(
    config: &ScreenConfig,
    script: &Script,
    out: &mut impl Write,
) -> Result<RunSummary, AppError> {
    let mut presenter = config.build_presenter();
    let binding = RenderBinding::attach(&mut presenter, config.title.as_str());
    info!(
        device_mode = %presenter.device_mode(),
        content_mode = %presenter.content_mode(),
        events = script.events.len(),
        "replaying script"
    );

    let mut frames = 0;
    binding.with_current(|desc| write_frame(desc, script, frames, out))?;
    frames += 1;

    for &event in &script.events {
        debug!(?event, "dispatching");
        presenter.handle(event);
        binding.with_current(|desc| write_frame(desc, script, frames, out))?;
        frames += 1;
    }

    out.flush()?;
    let stats = binding.stats();
    binding.detach(&mut presenter);

    Ok(RunSummary { frames, stats })
}

fn write_frame(
    desc: &RenderDescription,
    script: &Script,
    index: usize,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match script.format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, desc)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", render_to_string(desc, script.width, script.height))?;
        }
    }
    Ok(())
}
