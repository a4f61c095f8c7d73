use std::fmt;

use image::Rgb;
use imageproc::{
    drawing::{Canvas as DrawCanvas, draw_filled_circle_mut, draw_filled_rect_mut},
    rect::Rect,
};
use rand::Rng;

use crate::geom::{BoxFormat, convert_box, truncate_box};

/// Object category written to the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Rectangle];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 3] = [PaletteColor::Red, PaletteColor::Green, PaletteColor::Blue];

    pub fn rgb(self) -> Rgb<u8> {
        match self {
            PaletteColor::Red => Rgb([255, 0, 0]),
            PaletteColor::Green => Rgb([0, 255, 0]),
            PaletteColor::Blue => Rgb([0, 0, 255]),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A sampled candidate in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle { cx: i32, cy: i32, radius: i32 },
    /// Inclusive corners.
    Rectangle { x1: i32, y1: i32, x2: i32, y2: i32 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// Corner-form bounding box; every rasterized pixel lies inside it.
    pub fn bbox(&self) -> [i32; 4] {
        match *self {
            Shape::Circle { cx, cy, radius } => {
                let d = f64::from(2 * radius);
                truncate_box(convert_box(
                    [f64::from(cx), f64::from(cy), d, d],
                    BoxFormat::X1y1x2y2,
                ))
            }
            Shape::Rectangle { x1, y1, x2, y2 } => [x1, y1, x2, y2],
        }
    }

    pub fn draw<C: DrawCanvas>(&self, canvas: &mut C, color: C::Pixel) {
        match *self {
            Shape::Circle { cx, cy, radius } => {
                draw_filled_circle_mut(canvas, (cx, cy), radius, color);
            }
            Shape::Rectangle { x1, y1, x2, y2 } => {
                let rect = Rect::at(x1, y1).of_size((x2 - x1 + 1) as u32, (y2 - y1 + 1) as u32);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
    }
}

/// One placed object: corner-form box and its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub bbox: [i32; 4],
    pub category: ShapeKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn circle_box_spans_diameter() {
        let c = Shape::Circle { cx: 20, cy: 15, radius: 6 };
        assert_eq!(c.bbox(), [14, 9, 26, 21]);
        assert_eq!(c.kind(), ShapeKind::Circle);
    }

    #[test]
    fn drawn_pixels_stay_in_bbox() {
        let shapes = [
            Shape::Circle { cx: 12, cy: 12, radius: 7 },
            Shape::Rectangle { x1: 3, y1: 5, x2: 9, y2: 6 },
        ];
        for s in shapes {
            let mut mask = GrayImage::new(32, 32);
            s.draw(&mut mask, Luma([1]));
            let [x1, y1, x2, y2] = s.bbox();
            for (x, y, p) in mask.enumerate_pixels() {
                if p.0[0] != 0 {
                    let (x, y) = (x as i32, y as i32);
                    assert!(x1 <= x && x <= x2 && y1 <= y && y <= y2, "{s:?} at {x},{y}");
                }
            }
        }
    }

    #[test]
    fn rectangle_fill_is_inclusive() {
        let mut mask = GrayImage::new(16, 16);
        Shape::Rectangle { x1: 2, y1: 3, x2: 4, y2: 3 }.draw(&mut mask, Luma([1]));
        let filled = mask.pixels().filter(|p| p.0[0] != 0).count();
        assert_eq!(filled, 3);
    }

    #[test]
    fn category_names() {
        assert_eq!(ShapeKind::Circle.to_string(), "circle");
        assert_eq!(ShapeKind::Rectangle.name(), "rectangle");
        assert_eq!(PaletteColor::Green.rgb(), Rgb([0, 255, 0]));
    }
}
