use image::{GrayImage, Rgb, RgbImage};

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// RGB raster that accepted shapes are painted onto.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, BACKGROUND),
        }
    }

    /// Wraps an existing raster; any non-white pixel counts as occupied.
    pub fn from_image(img: RgbImage) -> Self {
        Self { img }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.img
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    pub fn occupancy(&self) -> OccupancyMask {
        OccupancyMask {
            width: self.img.width(),
            cells: self.img.pixels().map(|p| *p != BACKGROUND).collect(),
        }
    }
}

/// Per-pixel "already painted" flags, row-major.
pub struct OccupancyMask {
    width: u32,
    cells: Vec<bool>,
}

impl OccupancyMask {
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.cells[(y * self.width + x) as usize]
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// True if any non-zero scratch pixel inside the inclusive region hits an occupied cell.
    pub(crate) fn collides(&self, scratch: &GrayImage, region: Region) -> bool {
        for y in region.y0..=region.y1 {
            for x in region.x0..=region.x1 {
                if scratch.get_pixel(x, y).0[0] != 0 && self.get(x, y) {
                    return true;
                }
            }
        }
        false
    }
}

/// Inclusive pixel rectangle already clamped to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Region {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Region {
    pub fn clamped(b: [i32; 4], width: u32, height: u32) -> Self {
        let cx = |v: i32| v.clamp(0, width as i32 - 1) as u32;
        let cy = |v: i32| v.clamp(0, height as i32 - 1) as u32;
        Self {
            x0: cx(b[0]),
            y0: cy(b[1]),
            x1: cx(b[2]),
            y1: cy(b[3]),
        }
    }

    pub fn clear(&self, scratch: &mut GrayImage) {
        for y in self.y0..=self.y1 {
            for x in self.x0..=self.x1 {
                scratch.get_pixel_mut(x, y).0[0] = 0;
            }
        }
    }
}
