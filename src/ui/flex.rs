//! Row flex container
//!
//! Lays children out left to right. Fixed children take their measured
//! width; children with a positive `grow` factor split the leftover space
//! proportionally. Cross-axis placement follows each child's alignment.

use super::{Constraints, Measure, Size, Widget};

/// Cross-axis placement of a child within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Outer spacing around a child.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margin {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margin {
    pub fn uniform(v: f32) -> Self {
        Self { left: v, top: v, right: v, bottom: v }
    }
}

/// Per-child layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlexParams {
    /// Share of leftover main-axis space; zero means fixed size.
    pub grow: f32,
    pub align: Align,
    pub margin: Margin,
}

struct Child {
    widget: Box<dyn Widget>,
    params: FlexParams,
    size: Size,
    x: f32,
    y: f32,
}

/// A horizontal row of widgets.
pub struct FlexRow {
    children: Vec<Child>,
    size: Size,
}

impl FlexRow {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            size: Size::default(),
        }
    }

    pub fn add(&mut self, widget: Box<dyn Widget>, params: FlexParams) {
        self.children.push(Child {
            widget,
            params,
            size: Size::default(),
            x: 0.0,
            y: 0.0,
        });
    }

    #[cfg(test)]
    fn child_frame(&self, index: usize) -> (f32, f32, Size) {
        let child = &self.children[index];
        (child.x, child.y, child.size)
    }
}

impl Default for FlexRow {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for FlexRow {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let max_w = match constraints.width {
            Measure::Exactly(v) | Measure::AtMost(v) => v,
            Measure::Unspecified => f32::INFINITY,
        };
        let max_h = match constraints.height {
            Measure::Exactly(v) | Measure::AtMost(v) => v,
            Measure::Unspecified => f32::INFINITY,
        };

        // First pass: measure the fixed children and tally grow factors
        let mut used = 0.0;
        let mut grow_total = 0.0;
        for child in &mut self.children {
            let margin = child.params.margin;
            used += margin.left + margin.right;
            if child.params.grow > 0.0 {
                grow_total += child.params.grow;
                continue;
            }
            let inner = Constraints::loose(
                (max_w - used).max(0.0),
                (max_h - margin.top - margin.bottom).max(0.0),
            );
            child.size = child.widget.layout(inner);
            used += child.size.w;
        }

        // Second pass: hand the leftover to the growing children
        if grow_total > 0.0 {
            let leftover = (max_w - used).max(0.0);
            for child in &mut self.children {
                if child.params.grow <= 0.0 {
                    continue;
                }
                let margin = child.params.margin;
                let share = leftover * child.params.grow / grow_total;
                let inner = Constraints {
                    width: Measure::Exactly(share),
                    height: Measure::AtMost((max_h - margin.top - margin.bottom).max(0.0)),
                };
                child.size = child.widget.layout(inner);
            }
        }

        // Row height: exact when constrained, otherwise the tallest child
        let row_h = match constraints.height {
            Measure::Exactly(v) => v,
            _ => self
                .children
                .iter()
                .map(|c| c.size.h + c.params.margin.top + c.params.margin.bottom)
                .fold(0.0, f32::max),
        };

        // Position pass
        let mut x = 0.0;
        for child in &mut self.children {
            let margin = child.params.margin;
            x += margin.left;
            child.x = x;
            child.y = match child.params.align {
                Align::Start => margin.top,
                Align::Center => (row_h - child.size.h) / 2.0,
                Align::End => row_h - child.size.h - margin.bottom,
            };
            x += child.size.w + margin.right;
        }

        let row_w = match constraints.width {
            Measure::Exactly(v) => v,
            _ => x,
        };
        self.size = Size::new(row_w, row_h);
        self.size
    }

    fn draw(&self, x: f32, y: f32) {
        for child in &self.children {
            child.widget.draw(x + child.x, y + child.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Spacer;

    fn block(w: f32, h: f32) -> Box<Spacer> {
        Box::new(Spacer::new(w, h))
    }

    #[test]
    fn test_fixed_children_stack_left_to_right() {
        let mut row = FlexRow::new();
        row.add(block(100.0, 20.0), FlexParams::default());
        row.add(block(50.0, 10.0), FlexParams::default());

        let size = row.layout(Constraints::exact(800.0, 600.0));
        assert_eq!(size, Size::new(800.0, 600.0));

        let (x0, _, s0) = row.child_frame(0);
        let (x1, _, s1) = row.child_frame(1);
        assert_eq!(x0, 0.0);
        assert_eq!(s0.w, 100.0);
        assert_eq!(x1, 100.0);
        assert_eq!(s1.w, 50.0);
    }

    #[test]
    fn test_grow_splits_leftover() {
        let mut row = FlexRow::new();
        row.add(block(100.0, 20.0), FlexParams::default());
        row.add(block(0.0, 20.0), FlexParams { grow: 1.0, ..FlexParams::default() });
        row.add(block(0.0, 20.0), FlexParams { grow: 3.0, ..FlexParams::default() });

        row.layout(Constraints::exact(500.0, 100.0));
        let (_, _, s1) = row.child_frame(1);
        let (_, _, s2) = row.child_frame(2);
        assert_eq!(s1.w, 100.0);
        assert_eq!(s2.w, 300.0);

        let (x2, _, _) = row.child_frame(2);
        assert_eq!(x2, 200.0);
    }

    #[test]
    fn test_margins_offset_children() {
        let mut row = FlexRow::new();
        let params = FlexParams { margin: Margin::uniform(10.0), ..FlexParams::default() };
        row.add(block(30.0, 30.0), params);
        row.add(block(30.0, 30.0), params);

        row.layout(Constraints::exact(400.0, 100.0));
        let (x0, y0, _) = row.child_frame(0);
        let (x1, _, _) = row.child_frame(1);
        assert_eq!(x0, 10.0);
        assert_eq!(y0, 10.0);
        assert_eq!(x1, 60.0);
    }

    #[test]
    fn test_alignment() {
        let mut row = FlexRow::new();
        row.add(block(10.0, 20.0), FlexParams { align: Align::Start, ..FlexParams::default() });
        row.add(block(10.0, 20.0), FlexParams { align: Align::Center, ..FlexParams::default() });
        row.add(block(10.0, 20.0), FlexParams { align: Align::End, ..FlexParams::default() });

        row.layout(Constraints::exact(400.0, 100.0));
        assert_eq!(row.child_frame(0).1, 0.0);
        assert_eq!(row.child_frame(1).1, 40.0);
        assert_eq!(row.child_frame(2).1, 80.0);
    }

    #[test]
    fn test_unconstrained_row_hugs_children() {
        let mut row = FlexRow::new();
        row.add(block(40.0, 15.0), FlexParams::default());
        row.add(block(60.0, 25.0), FlexParams::default());

        let size = row.layout(Constraints {
            width: Measure::Unspecified,
            height: Measure::Unspecified,
        });
        assert_eq!(size, Size::new(100.0, 25.0));
    }
}
