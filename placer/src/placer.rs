use image::{GrayImage, Luma};
use rand::Rng;
use thiserror::Error;

use crate::{
    canvas::{Canvas, OccupancyMask, Region},
    geom::{BoxFormat, convert_box, truncate_box},
    limits::{ShapeLimits, circle_centers, rect_centers},
    shapes::{Annotation, PaletteColor, Shape, ShapeKind},
};

/// Candidates tried per placement before the slot is given up.
pub const MAX_TRIALS: u32 = 100;

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("invalid box format `{0}`, expected `xywh` or `x1y1x2y2`")]
    InvalidBoxFormat(String),
    #[error("degenerate {what} range [{low}, {high}) for a {width}x{height} canvas")]
    DegenerateRange {
        what: &'static str,
        low: i32,
        high: i32,
        width: u32,
        height: u32,
    },
}

/// Places non-overlapping shapes on canvases of one fixed size.
///
/// Holds a scratch mask reused across trials, so one placer per worker.
pub struct Placer {
    limits: ShapeLimits,
    scratch: GrayImage,
}

impl Placer {
    pub fn new(limits: ShapeLimits) -> Self {
        let scratch = GrayImage::new(limits.width(), limits.height());
        Self { limits, scratch }
    }

    pub fn limits(&self) -> &ShapeLimits {
        &self.limits
    }

    /// Blank canvas matching this placer's size.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.limits.width(), self.limits.height())
    }

    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        canvas: &mut Canvas,
        rng: &mut R,
    ) -> Option<Annotation> {
        let kind = ShapeKind::random(rng);
        self.place(kind, canvas, rng)
    }

    /// Paints one shape of `kind` where nothing is painted yet.
    ///
    /// Returns `None` once [`MAX_TRIALS`] candidates have all collided; the canvas is
    /// left untouched in that case.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        kind: ShapeKind,
        canvas: &mut Canvas,
        rng: &mut R,
    ) -> Option<Annotation> {
        debug_assert_eq!(
            (canvas.width(), canvas.height()),
            (self.limits.width(), self.limits.height())
        );

        let occupancy = canvas.occupancy();
        for _ in 0..MAX_TRIALS {
            let shape = self.sample(kind, rng);
            if !self.collides(&shape, &occupancy) {
                let color = PaletteColor::random(rng);
                shape.draw(canvas.image_mut(), color.rgb());
                return Some(Annotation {
                    bbox: shape.bbox(),
                    category: kind,
                });
            }
        }
        None
    }

    pub fn sample<R: Rng + ?Sized>(&self, kind: ShapeKind, rng: &mut R) -> Shape {
        match kind {
            ShapeKind::Circle => self.sample_circle(rng),
            ShapeKind::Rectangle => self.sample_rectangle(rng),
        }
    }

    fn sample_circle<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        let radius = rng.random_range(self.limits.radius());
        let cx = rng.random_range(circle_centers(radius, self.limits.width()));
        let cy = rng.random_range(circle_centers(radius, self.limits.height()));
        Shape::Circle { cx, cy, radius }
    }

    fn sample_rectangle<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        // integer sides halved: the painted extent is half the drawn side
        let eh = f64::from(rng.random_range(self.limits.side())) / 2.0;
        let ew = f64::from(rng.random_range(self.limits.side())) / 2.0;
        let x = rng.random_range(rect_centers(ew, self.limits.width()));
        let y = rng.random_range(rect_centers(eh, self.limits.height()));
        let [x1, y1, x2, y2] = truncate_box(convert_box(
            [f64::from(x), f64::from(y), ew, eh],
            BoxFormat::X1y1x2y2,
        ));
        Shape::Rectangle { x1, y1, x2, y2 }
    }

    fn collides(&mut self, shape: &Shape, occupancy: &OccupancyMask) -> bool {
        let region = Region::clamped(shape.bbox(), self.limits.width(), self.limits.height());
        shape.draw(&mut self.scratch, Luma([1]));
        let hit = occupancy.collides(&self.scratch, region);
        region.clear(&mut self.scratch);
        hit
    }
}
