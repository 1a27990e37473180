//! Scripted replay of recorded gestures.
//!
//! A script lists the initial panel heights (`null` for a handle whose panel
//! never resolved) and the raw occurrences to feed the document. Running it
//! mounts a fresh engine, records the panel heights after every step in the
//! `"{height}px"` form a host would write into the panel style, and tears the
//! engine down at the end.
//!
//! ```json
//! {
//!   "panels": [200.0],
//!   "steps": [
//!     { "origin": { "handle": 0 },
//!       "event": { "device": "touch", "kind": "start",
//!                  "touches": [{ "client_y": 300.0 }] } }
//!   ]
//! }
//! ```

use crate::config::ResizeConfig;
use crate::engine::ResizeEngine;
use crate::error::{ResizeError, ResizeResult};
use crate::events::{Document, EventOrigin};
use crate::input::{EventKind, RawEvent};
use crate::target::{Panel, TargetRef};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    pub origin: EventOrigin,
    pub event: RawEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub config: ResizeConfig,
    pub panels: Vec<Option<f32>>,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

/// Page state after one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame {
    pub step: usize,
    pub kind: EventKind,
    pub default_prevented: bool,
    pub active_sessions: usize,
    pub heights: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub bindings: usize,
    pub frames: Vec<ReplayFrame>,
    pub listeners_after_teardown: usize,
}

/// CSS pixel value for a height, e.g. `160px`.
pub fn css_px(height: f32) -> String {
    format!("{height}px")
}

impl ReplayScript {
    pub fn from_json_str(json: &str) -> ResizeResult<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> ResizeResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Every handle a step targets must exist on the page.
    pub fn validate(&self) -> ResizeResult<()> {
        self.config.validate()?;
        for (step, entry) in self.steps.iter().enumerate() {
            if let EventOrigin::Handle(handle) = entry.origin {
                if handle.0 >= self.panels.len() {
                    return Err(ResizeError::Replay {
                        step,
                        reason: format!("{handle} is not on the page ({} handles)", self.panels.len()),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn run(&self) -> ResizeResult<ReplayReport> {
        self.validate()?;

        let panels: Vec<Option<Arc<Mutex<Panel>>>> = self
            .panels
            .iter()
            .map(|height| height.map(|h| Arc::new(Mutex::new(Panel::new(h)))))
            .collect();
        let targets = panels
            .iter()
            .map(|panel| panel.clone().map(|p| p as TargetRef));

        let document = Document::new();
        let mut engine = ResizeEngine::mount(&document, targets, &self.config);
        let bindings = engine.subscription_count();

        let snapshot = || -> Vec<Option<String>> {
            panels
                .iter()
                .map(|panel| panel.as_ref().map(|p| css_px(p.lock().height)))
                .collect()
        };

        let mut frames = Vec::with_capacity(self.steps.len());
        for (step, entry) in self.steps.iter().enumerate() {
            // Script handles are mount indices
            let origin = match entry.origin {
                EventOrigin::Handle(index) => engine
                    .handle(index.0)
                    .map_or(entry.origin, EventOrigin::Handle),
                EventOrigin::Document => EventOrigin::Document,
            };
            let outcome = document.dispatch(origin, &entry.event);
            frames.push(ReplayFrame {
                step,
                kind: entry.event.kind(),
                default_prevented: outcome.default_prevented,
                active_sessions: engine.active_sessions(),
                heights: snapshot(),
            });
        }

        engine.teardown();
        tracing::debug!(steps = frames.len(), bindings, "replay finished");

        Ok(ReplayReport {
            bindings,
            frames,
            listeners_after_teardown: document.listener_count(),
        })
    }
}
