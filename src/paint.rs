//! Painting on [`RgbaImage`]s.
//!
//! [`RgbaImage`] is the pixel buffer exchanged between the detection thread,
//! the preset art and the texture uploader. It is plain data, so it can
//! cross threads freely; textures are only created from it on the main
//! thread (see [`crate::systems::textures`]).
//!
//! The helpers cover what the procedural preset art needs: filled circles,
//! ellipses, rounded rectangles, rings and thick strokes. A pixel is painted
//! when its center falls inside the shape.

use image::{Rgba, RgbaImage};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Opaque color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255])
}

fn fill_where(img: &mut RgbaImage, color: Rgba<u8>, inside: impl Fn(f32, f32) -> bool) {
    for (x, y, px) in img.enumerate_pixels_mut() {
        if inside(x as f32 + 0.5, y as f32 + 0.5) {
            *px = color;
        }
    }
}

pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
    fill_where(img, color, |x, y| {
        (x - cx) * (x - cx) + (y - cy) * (y - cy) <= r * r
    });
}

pub fn fill_ellipse(img: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgba<u8>) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    fill_where(img, color, |x, y| {
        let nx = (x - cx) / rx;
        let ny = (y - cy) / ry;
        nx * nx + ny * ny <= 1.0
    });
}

/// Circle outline of thickness `width`, centered on radius `r`.
pub fn stroke_ring(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, width: f32, color: Rgba<u8>) {
    let inner = (r - width / 2.0).max(0.0);
    let outer = r + width / 2.0;
    fill_where(img, color, |x, y| {
        let d2 = (x - cx) * (x - cx) + (y - cy) * (y - cy);
        d2 >= inner * inner && d2 <= outer * outer
    });
}

pub fn fill_round_rect(
    img: &mut RgbaImage,
    (x, y): (f32, f32),
    (w, h): (f32, f32),
    radius: f32,
    color: Rgba<u8>,
) {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    fill_where(img, color, |px, py| {
        if px < x || py < y || px > x + w || py > y + h {
            return false;
        }
        // Distance to the nearest point of the inner (unrounded) rectangle.
        let qx = px.clamp(x + r, x + w - r);
        let qy = py.clamp(y + r, y + h - r);
        (px - qx) * (px - qx) + (py - qy) * (py - qy) <= r * r
    });
}

/// Straight stroke with round caps.
pub fn stroke_line(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = (dx.abs().max(dy.abs()).ceil() as u32).max(1);
    let r = width / 2.0;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp(img, from.0 + dx * t, from.1 + dy * t, r, color);
    }
}

/// Quadratic Bézier stroke from `from` to `to` bending towards `ctrl`.
pub fn stroke_quad(
    img: &mut RgbaImage,
    from: (f32, f32),
    ctrl: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    const SEGMENTS: u32 = 16;
    let point = |t: f32| {
        let u = 1.0 - t;
        (
            u * u * from.0 + 2.0 * u * t * ctrl.0 + t * t * to.0,
            u * u * from.1 + 2.0 * u * t * ctrl.1 + t * t * to.1,
        )
    };
    let mut prev = from;
    for i in 1..=SEGMENTS {
        let next = point(i as f32 / SEGMENTS as f32);
        stroke_line(img, prev, next, width, color);
        prev = next;
    }
}

/// Filled disc limited to its bounding box, for strokes.
fn stamp(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
    let x0 = (cx - r).floor().max(0.0) as u32;
    let y0 = (cy - r).floor().max(0.0) as u32;
    let x1 = ((cx + r).ceil().max(0.0) as u32).min(img.width());
    let y1 = ((cy + r).ceil().max(0.0) as u32).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            let px = x as f32 + 0.5 - cx;
            let py = y as f32 + 0.5 - cy;
            if px * px + py * py <= r * r {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Make every pixel outside the inscribed circle transparent.
pub fn mask_circle(img: &mut RgbaImage) {
    let cx = img.width() as f32 / 2.0;
    let cy = img.height() as f32 / 2.0;
    let r = cx.min(cy);
    fill_where(img, TRANSPARENT, |x, y| {
        (x - cx) * (x - cx) + (y - cy) * (y - cy) > r * r
    });
}
