//! Console event sink
//!
//! Bridges use-case events to the terminal views.

use std::path::PathBuf;

use webpify::domain::ports::{MigrationEvent, MigrationEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::migrate::{
    render_conversion_failed, render_converted, render_file_rewrite, render_rewrite_failed,
    render_rewrite_started, render_skipped,
};

/// Prints each event as one block on stdout.
pub struct ConsoleEventSink {
    ui: UiContext,
    image_root: PathBuf,
    project_root: PathBuf,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext, image_root: PathBuf, project_root: PathBuf) -> Self {
        Self {
            ui,
            image_root,
            project_root,
        }
    }

    fn render(&self, event: &MigrationEvent) -> Option<String> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        let line = match event {
            MigrationEvent::Converted {
                index,
                total,
                asset,
            } => render_converted(*index, *total, asset, &self.image_root, color, unicode),
            MigrationEvent::Skipped {
                index,
                total,
                asset,
            } => render_skipped(*index, *total, asset, &self.image_root, color, unicode),
            MigrationEvent::ConversionFailed {
                index,
                total,
                failure,
            } => render_conversion_failed(*index, *total, failure, &self.image_root, color, unicode),
            MigrationEvent::RewriteStarted {
                file_count,
                candidate_count,
            } => render_rewrite_started(*file_count, *candidate_count, color),
            MigrationEvent::FileRewritten { rewrite } => {
                render_file_rewrite(rewrite, &self.project_root, color, unicode)
            }
            MigrationEvent::RewriteFailed { failure } => {
                render_rewrite_failed(failure, &self.project_root, color, unicode)
            }
            // The header and summary are printed by the command itself.
            MigrationEvent::Started { .. } | MigrationEvent::Completed { .. } => return None,
        };
        Some(line)
    }
}

impl MigrationEventSink for ConsoleEventSink {
    fn on_event(&self, event: MigrationEvent) {
        if let Some(line) = self.render(&event) {
            println!("{}", line);
        }
    }
}
