//! Leaf widgets
//!
//! The HUD building blocks: a text label, an image, and a fixed-size
//! spacer. Labels and images paint with macroquad's 2D calls; a missing
//! image texture draws as a flat placeholder instead of failing.

use macroquad::prelude::*;

use super::{Constraints, Size, Widget};

/// A fixed-size invisible block. Pads rows and stands in for real widgets
/// in layout tests.
pub struct Spacer {
    preferred: Size,
    size: Size,
}

impl Spacer {
    pub fn new(w: f32, h: f32) -> Self {
        Self {
            preferred: Size::new(w, h),
            size: Size::default(),
        }
    }
}

impl Widget for Spacer {
    fn layout(&mut self, constraints: Constraints) -> Size {
        self.size = Size::new(
            constraints.width.resolve(self.preferred.w),
            constraints.height.resolve(self.preferred.h),
        );
        self.size
    }

    fn draw(&self, _x: f32, _y: f32) {}
}

/// A single line of text.
pub struct Label {
    text: String,
    font: Option<Font>,
    font_size: u16,
    color: Color,
    size: Size,
    baseline: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, font: Option<Font>, font_size: u16, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            font_size,
            color,
            size: Size::default(),
            baseline: 0.0,
        }
    }
}

impl Widget for Label {
    fn layout(&mut self, _constraints: Constraints) -> Size {
        // Text does not wrap; the measured line is the size
        let dims = measure_text(&self.text, self.font.as_ref(), self.font_size, 1.0);
        self.baseline = dims.offset_y;
        self.size = Size::new(dims.width, dims.height);
        self.size
    }

    fn draw(&self, x: f32, y: f32) {
        draw_text_ex(
            &self.text,
            x.round(),
            (y + self.baseline).round(),
            TextParams {
                font: self.font.as_ref(),
                font_size: self.font_size,
                color: self.color,
                ..Default::default()
            },
        );
    }
}

/// A texture drawn at a requested size. Without a texture (a failed load)
/// it paints a flat placeholder rectangle.
pub struct Image {
    texture: Option<Texture2D>,
    preferred: Size,
    size: Size,
}

impl Image {
    pub fn new(texture: Option<Texture2D>, w: f32, h: f32) -> Self {
        Self {
            texture,
            preferred: Size::new(w, h),
            size: Size::default(),
        }
    }
}

impl Widget for Image {
    fn layout(&mut self, constraints: Constraints) -> Size {
        self.size = Size::new(
            constraints.width.resolve(self.preferred.w),
            constraints.height.resolve(self.preferred.h),
        );
        self.size
    }

    fn draw(&self, x: f32, y: f32) {
        match &self.texture {
            Some(texture) => draw_texture_ex(
                texture,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(self.size.w, self.size.h)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(
                x,
                y,
                self.size.w,
                self.size.h,
                Color::from_rgba(80, 80, 90, 160),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Measure;

    #[test]
    fn test_spacer_respects_constraints() {
        let mut spacer = Spacer::new(100.0, 40.0);

        let natural = spacer.layout(Constraints {
            width: Measure::Unspecified,
            height: Measure::Unspecified,
        });
        assert_eq!(natural, Size::new(100.0, 40.0));

        let squeezed = spacer.layout(Constraints::loose(60.0, 100.0));
        assert_eq!(squeezed, Size::new(60.0, 40.0));

        let forced = spacer.layout(Constraints::exact(200.0, 10.0));
        assert_eq!(forced, Size::new(200.0, 10.0));
    }
}
