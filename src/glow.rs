// src/glow.rs
//
// Cursor glow: follows the pointer and exposes where to draw the highlight.
// Runs on its own task and shares nothing with the directory.

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Pointer position in pixels plus the same position as a percentage of the
/// viewport, which is what the gradient centre uses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Glow {
    pub x: f64,
    pub y: f64,
    pub x_pct: f64,
    pub y_pct: f64,
}

impl Glow {
    pub fn at(x: f64, y: f64, viewport: Viewport) -> Self {
        let pct = |v: f64, extent: f64| if extent > 0.0 { v / extent * 100.0 } else { 0.0 };
        Glow {
            x,
            y,
            x_pct: pct(x, viewport.width),
            y_pct: pct(y, viewport.height),
        }
    }
}

/// Attached glow effect. Dropping it (or calling [`GlowTracker::detach`])
/// stops the tracking task.
#[derive(Debug)]
pub struct GlowTracker {
    moves: mpsc::UnboundedSender<(f64, f64)>,
    glow: watch::Receiver<Glow>,
    task: JoinHandle<()>,
}

impl GlowTracker {
    /// Start tracking. Must be called inside a tokio runtime.
    pub fn attach(viewport: Viewport) -> Self {
        let (moves, mut rx) = mpsc::unbounded_channel::<(f64, f64)>();
        let (tx, glow) = watch::channel(Glow::default());
        debug!(?viewport, "glow attached");

        let task = tokio::spawn(async move {
            while let Some((x, y)) = rx.recv().await {
                let next = Glow::at(x, y, viewport);
                trace!(?next, "pointer moved");
                if tx.send(next).is_err() {
                    break;
                }
            }
        });

        Self { moves, glow, task }
    }

    /// Feed a pointer-move event. Never blocks; returns false once detached.
    pub fn pointer_moved(&self, x: f64, y: f64) -> bool {
        self.moves.send((x, y)).is_ok()
    }

    pub fn current(&self) -> Glow {
        *self.glow.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Glow> {
        self.glow.clone()
    }

    pub fn detach(self) {
        debug!("glow detached");
    }
}

impl Drop for GlowTracker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
