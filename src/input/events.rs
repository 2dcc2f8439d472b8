//! Serializable input events and the dispatcher that feeds them to the engine.
//!
//! Scripts are JSON lines, one event per line:
//!
//! ```text
//! {"op":"color","color":"ff8000"}
//! {"op":"begin","id":1,"x":0,"y":0}
//! {"op":"update","id":1,"x":10,"y":0}
//! {"op":"end","id":1}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use super::contact::ContactId;
use super::engine::StrokeEngine;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use thiserror::Error;

/// One normalized input or control call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum InputEvent {
    /// Contact went down
    Begin { id: ContactId, x: f64, y: f64 },
    /// Contact moved
    Update { id: ContactId, x: f64, y: f64 },
    /// Contact lifted
    End { id: ContactId },
    /// Remove the newest stroke
    Undo,
    /// Remove all strokes
    Clear,
    /// Pick the color for the next stroke
    Color { color: String },
}

/// Errors raised while reading an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid event on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses a JSON-lines event script.
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<InputEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

impl StrokeEngine {
    /// Routes one event to the matching engine operation.
    ///
    /// Invalid color strings are logged and skipped, like any other event the
    /// engine cannot act on.
    pub fn dispatch(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Begin { id, x, y } => {
                self.begin_contact(*id, *x, *y);
            }
            InputEvent::Update { id, x, y } => self.update_contact(*id, *x, *y),
            InputEvent::End { id } => self.end_contact(*id),
            InputEvent::Undo => self.undo(),
            InputEvent::Clear => self.clear(),
            InputEvent::Color { color } => {
                let _ = self.set_color_str(color);
            }
        }
    }

    /// Dispatches a sequence of events in order.
    pub fn replay<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a InputEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
    }
}
