//! GUI widgets
//!
//! A small retained widget layer for the HUD overlay. Every widget
//! implements the same two-call contract: `layout` measures it under a set
//! of constraints and caches the result, `draw` paints it at a screen
//! origin using the cached size. Containers position their children from
//! those cached sizes.

pub mod flex;
pub mod widgets;

pub use flex::{Align, FlexParams, FlexRow, Margin};
pub use widgets::{Image, Label, Spacer};

/// How much space a widget may take along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// The widget must be exactly this big.
    Exactly(f32),
    /// The widget may pick any size up to this limit.
    AtMost(f32),
    /// No limit; the widget picks its natural size.
    Unspecified,
}

impl Measure {
    /// Resolve a widget's preferred extent against this measure.
    pub fn resolve(&self, preferred: f32) -> f32 {
        match self {
            Measure::Exactly(v) => *v,
            Measure::AtMost(v) => preferred.min(*v),
            Measure::Unspecified => preferred,
        }
    }
}

/// Layout constraints for both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub width: Measure,
    pub height: Measure,
}

impl Constraints {
    pub fn exact(width: f32, height: f32) -> Self {
        Self {
            width: Measure::Exactly(width),
            height: Measure::Exactly(height),
        }
    }

    pub fn loose(width: f32, height: f32) -> Self {
        Self {
            width: Measure::AtMost(width),
            height: Measure::AtMost(height),
        }
    }
}

/// A measured widget size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// The widget contract shared by every HUD element.
pub trait Widget {
    /// Measure under the constraints and cache the chosen size.
    fn layout(&mut self, constraints: Constraints) -> Size;

    /// Paint at the given screen origin, using the last layout's size.
    fn draw(&self, x: f32, y: f32);
}
