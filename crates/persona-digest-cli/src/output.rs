use std::io::Write;
use std::time::Duration;

use owo_colors::OwoColorize;
use persona_digest_core::{ProgressEvent, SkipReason};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print a real-time progress event.
pub fn print_progress(
    w: &mut dyn Write,
    event: &ProgressEvent,
    color: ColorMode,
) -> std::io::Result<()> {
    match event {
        ProgressEvent::CollectionsDiscovered { count } => {
            if *count == 0 {
                writeln!(w, "No collections found.")?;
            } else {
                writeln!(w, "Found {} collection(s)", count)?;
            }
        }
        ProgressEvent::CollectionStarted { name, index, total } => {
            writeln!(w)?;
            if color.enabled() {
                writeln!(
                    w,
                    "{} {} [{}/{}]",
                    "COLLECTION".bold().cyan(),
                    name.bold(),
                    index + 1,
                    total
                )?;
            } else {
                writeln!(w, "COLLECTION {} [{}/{}]", name, index + 1, total)?;
            }
        }
        ProgressEvent::DocumentStarted {
            filename,
            rank,
            total,
        } => {
            writeln!(w, "[{}/{}] Processing: {}", rank, total, filename)?;
        }
        ProgressEvent::DocumentSkipped { filename, reason } => match reason {
            SkipReason::Empty => {
                if color.enabled() {
                    writeln!(w, "{} {} (no text)", "SKIP:".yellow(), filename)?;
                } else {
                    writeln!(w, "SKIP: {} (no text)", filename)?;
                }
            }
            SkipReason::ExtractionFailed(message) => {
                if color.enabled() {
                    writeln!(w, "{} {}: {}", "ERROR:".red(), filename, message)?;
                } else {
                    writeln!(w, "ERROR: {}: {}", filename, message)?;
                }
            }
        },
        ProgressEvent::ReportWritten { path, sections } => {
            if color.enabled() {
                writeln!(
                    w,
                    "{} {} ({} sections)",
                    "OK:".green(),
                    path.display(),
                    sections
                )?;
            } else {
                writeln!(w, "OK: {} ({} sections)", path.display(), sections)?;
            }
        }
    }
    Ok(())
}

/// Format the total run time, rounded to two decimals.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Done in {:.2} seconds", elapsed.as_secs_f64())
}
