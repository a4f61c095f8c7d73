use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut},
    rect::Rect,
};
use placer::Annotation;

const BOX_COLOR: Rgb<u8> = Rgb([30, 15, 30]);
const LABEL_BG: Rgb<u8> = Rgb([255, 252, 150]);
const LABEL_FG: Rgb<u8> = Rgb([0, 0, 0]);
const LABEL_H: u32 = 20;
const CHAR_W: u32 = 9;
const LABEL_PX: f32 = 14.0;

/// Copy of `img` with every annotation outlined and labelled above its box.
pub fn render_preview(img: &RgbImage, annotations: &[Annotation], font: Option<&FontArc>) -> RgbImage {
    let mut out = img.clone();
    for ann in annotations {
        let [x1, y1, x2, y2] = ann.bbox;
        let label = ann.category.name();

        let strip_w = CHAR_W * label.len() as u32;
        draw_filled_rect_mut(
            &mut out,
            Rect::at(x1, y1 - LABEL_H as i32).of_size(strip_w, LABEL_H),
            LABEL_BG,
        );
        if let Some(font) = font {
            draw_text_mut(
                &mut out,
                LABEL_FG,
                x1 + 5,
                y1 - LABEL_H as i32 + 3,
                PxScale::from(LABEL_PX),
                font,
                label,
            );
        }

        draw_hollow_rect_mut(
            &mut out,
            Rect::at(x1, y1).of_size((x2 - x1 + 1) as u32, (y2 - y1 + 1) as u32),
            BOX_COLOR,
        );
    }
    out
}
