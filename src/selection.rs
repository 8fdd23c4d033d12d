//! Pointer-driven selection state machine
//!
//! Consumes pointer events in display space, tracks the in-progress drag in
//! image space (clipping escaped points to the image boundary), and commits
//! a whole-pixel [`Region`] on release. Observers registered with
//! [`SelectionController::on_finalized`] are notified of every commit.

use egui::{Pos2, Vec2};
use log::debug;

use crate::boundary::{clip_to_edge, in_bounds};
use crate::region::Region;
use crate::transform::ViewTransform;

/// Observer invoked with each finalized region.
pub type FinalizedListener = Box<dyn FnMut(Region)>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Idle,
    Selecting { anchor: Pos2, cursor: Pos2 },
}

/// Selection lifecycle: `Idle` until an in-bounds press, `Selecting` while
/// the button is held, then a transient commit on release that emits the
/// region and returns to `Idle`.
///
/// The last committed corner pair is retained separately so the canvas can
/// keep painting it; it is replaced by the next commit and dropped by
/// [`Self::clear`] when a new image loads.
pub struct SelectionController {
    state: DragState,
    committed: Option<(Pos2, Pos2)>,
    listeners: Vec<FinalizedListener>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            committed: None,
            listeners: Vec::new(),
        }
    }

    /// Register an observer for finalized regions. Observers live as long
    /// as the controller and fire in registration order.
    pub fn on_finalized(&mut self, listener: impl FnMut(Region) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Primary-button press. An in-bounds press starts a fresh drag
    /// (silently discarding any in-progress one); an out-of-bounds press
    /// leaves the controller idle.
    pub fn pointer_down(&mut self, display: Pos2, view: &ViewTransform, image_size: Vec2) {
        let p = view.to_image(display);
        if in_bounds(p, image_size) {
            self.state = DragState::Selecting { anchor: p, cursor: p };
        } else {
            debug!("press at image {:?} is outside {:?}, ignored", p, image_size);
            self.state = DragState::Idle;
        }
    }

    /// Pointer motion while the button is held. Points that leave the image
    /// are replaced by their boundary clip. Returns whether the overlay
    /// needs a repaint (always, while selecting).
    pub fn pointer_move(&mut self, display: Pos2, view: &ViewTransform, image_size: Vec2) -> bool {
        let DragState::Selecting { anchor, .. } = self.state else {
            return false;
        };

        let mut p = view.to_image(display);
        if !in_bounds(p, image_size) {
            p = clip_to_edge(anchor, p, image_size);
        }
        self.state = DragState::Selecting { anchor, cursor: p };
        true
    }

    /// Primary-button release. Commits the drag: derives the region from
    /// the corner pair, retains the pair for rendering, notifies observers,
    /// and returns to idle. A release without a preceding press is a no-op
    /// and emits nothing.
    pub fn pointer_up(&mut self) -> Option<Region> {
        let DragState::Selecting { anchor, cursor } = self.state else {
            return None;
        };

        let region = Region::from_corners(anchor, cursor);
        self.committed = Some((anchor, cursor));
        for listener in &mut self.listeners {
            listener(region);
        }
        self.state = DragState::Idle;
        Some(region)
    }

    /// Corner pair of the drag in progress, if any.
    pub fn live_corners(&self) -> Option<(Pos2, Pos2)> {
        match self.state {
            DragState::Selecting { anchor, cursor } => Some((anchor, cursor)),
            DragState::Idle => None,
        }
    }

    /// Corner pair of the last committed selection, if any.
    pub fn committed_corners(&self) -> Option<(Pos2, Pos2)> {
        self.committed
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.state, DragState::Selecting { .. })
    }

    /// Drop all selection state. Registered observers are kept.
    pub fn clear(&mut self) {
        self.state = DragState::Idle;
        self.committed = None;
    }
}
