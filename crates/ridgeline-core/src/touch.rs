// File: crates/ridgeline-core/src/touch.rs
// Summary: Touch lifecycle state machine driving the value popup.

use crate::chart::ChartFrame;
use crate::popup::{layout_popup, place_popup};
use crate::scene::TextLabel;
use crate::text::TextMeasurer;
use crate::types::{Color, Point, Rect, Size};

/// Phase of a single touch, as reported by the host. Multi-touch is not
/// tracked: hosts pass the first touch of a touch set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// A popup ready to draw: placed origin, measured size, background, and
/// the stacked per-series value labels (origins relative to the popup).
#[derive(Clone, Debug)]
pub struct PopupFrame {
    pub origin: Point,
    pub size: Size,
    pub background: Color,
    pub labels: Vec<TextLabel>,
}

impl PopupFrame {
    /// Popup bounds in view coordinates.
    pub fn rect(&self) -> Rect {
        Rect { origin: self.origin, size: self.size }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TouchState {
    Idle,
    Tracking,
}

/// Tracks one touch at a time: `Idle -> Tracking` on begin, updates while
/// tracking, back to `Idle` on end or cancel. The popup exists only while
/// tracking.
#[derive(Debug)]
pub struct TouchController {
    state: TouchState,
}

impl TouchController {
    pub fn new() -> Self {
        Self { state: TouchState::Idle }
    }

    pub fn is_tracking(&self) -> bool {
        self.state == TouchState::Tracking
    }

    /// Advance the state machine with one touch event. Returns the popup
    /// to show, or `None` when no popup is visible (popup disabled, move
    /// without a begin, or touch ended).
    pub fn handle(
        &mut self,
        frame: &ChartFrame,
        phase: TouchPhase,
        touch: Point,
        text: &dyn TextMeasurer,
    ) -> Option<PopupFrame> {
        match phase {
            TouchPhase::Began => {
                if !frame.options.show_popup_on_touch {
                    return None;
                }
                self.state = TouchState::Tracking;
                Some(self.popup_at(frame, touch, text))
            }
            TouchPhase::Moved => {
                if self.state != TouchState::Tracking {
                    return None;
                }
                Some(self.popup_at(frame, touch, text))
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.state = TouchState::Idle;
                None
            }
        }
    }

    fn popup_at(&self, frame: &ChartFrame, touch: Point, text: &dyn TextMeasurer) -> PopupFrame {
        let touch = frame.clamp_touch(touch);
        let values = frame.values_at(touch.x);
        let layout = layout_popup(&values, &frame.colors, text);
        let origin = place_popup(touch, layout.size, frame.bounds);
        PopupFrame {
            origin,
            size: layout.size,
            background: frame.options.popup_background,
            labels: layout.labels,
        }
    }
}

impl Default for TouchController {
    fn default() -> Self {
        Self::new()
    }
}
