//! Procedural preset art.
//!
//! Company mode shows up to two logos and people mode up to five placeholder
//! faces. All of them are painted at startup into [`RgbaImage`]s on a 200 px
//! canvas and queued for texture upload under their preset key.

use arrayvec::ArrayVec;

use image::{Rgba, RgbaImage};

use crate::paint::{
    BLACK, WHITE, fill_circle, fill_ellipse, fill_round_rect, rgb, stroke_line, stroke_quad,
    stroke_ring,
};

/// Side of the square every preset is painted on.
pub const ART_SIZE: u32 = 200;

pub const MAX_COMPANY_PRESETS: usize = 2;
pub const MAX_PEOPLE_PRESETS: usize = 5;

/// Texture keys of the company logos, in selection order.
pub const COMPANY_KEYS: [&str; MAX_COMPANY_PRESETS] = ["company/statsig", "company/openai"];

/// Texture keys of the placeholder faces, in selection order.
pub const PEOPLE_KEYS: [&str; MAX_PEOPLE_PRESETS] = [
    "people/gold",
    "people/sky",
    "people/mint",
    "people/plum",
    "people/snow",
];

/// (skin, mouth) colors of the placeholder faces, matching [`PEOPLE_KEYS`].
const FACE_COLORS: [(u32, u32); MAX_PEOPLE_PRESETS] = [
    (0xFFD700, 0xFF6B6B),
    (0x87CEEB, 0xFFB6C1),
    (0x98D8C8, 0xF7B7A3),
    (0xDDA0DD, 0xFFA07A),
    (0xFFFFFF, 0xFF6B6B),
];

/// A painted preset, ready to be uploaded under `key`.
pub struct PresetArt {
    pub key: &'static str,
    pub image: RgbaImage,
}

pub fn company_logos() -> ArrayVec<PresetArt, MAX_COMPANY_PRESETS> {
    let mut logos = ArrayVec::new();
    logos.push(PresetArt {
        key: COMPANY_KEYS[0],
        image: paint_statsig(),
    });
    logos.push(PresetArt {
        key: COMPANY_KEYS[1],
        image: paint_openai(),
    });
    logos
}

pub fn people_faces() -> ArrayVec<PresetArt, MAX_PEOPLE_PRESETS> {
    PEOPLE_KEYS
        .iter()
        .zip(FACE_COLORS.iter())
        .map(|(key, (skin, mouth))| PresetArt {
            key: *key,
            image: paint_face(rgb(*skin), rgb(*mouth)),
        })
        .collect()
}

/// Every preset of both modes.
pub fn all_presets() -> Vec<PresetArt> {
    company_logos()
        .into_iter()
        .chain(people_faces())
        .collect()
}

fn logo_background(color: Rgba<u8>) -> RgbaImage {
    let size = ART_SIZE as f32;
    let mut img = RgbaImage::new(ART_SIZE, ART_SIZE);
    fill_round_rect(&mut img, (0.0, 0.0), (size, size), 20.0, color);
    img
}

fn paint_statsig() -> RgbaImage {
    let mut img = logo_background(rgb(0x194B7D));
    let w = 12.0;
    stroke_line(&mut img, (60.0, 140.0), (60.0, 110.0), w, WHITE);
    stroke_quad(&mut img, (60.0, 110.0), (60.0, 90.0), (80.0, 90.0), w, WHITE);
    stroke_line(&mut img, (80.0, 90.0), (120.0, 90.0), w, WHITE);
    stroke_quad(&mut img, (120.0, 90.0), (140.0, 90.0), (140.0, 70.0), w, WHITE);
    stroke_quad(&mut img, (140.0, 70.0), (140.0, 50.0), (120.0, 50.0), w, WHITE);
    stroke_line(&mut img, (120.0, 50.0), (60.0, 50.0), w, WHITE);
    stroke_line(&mut img, (60.0, 150.0), (140.0, 150.0), w, WHITE);
    img
}

fn paint_openai() -> RgbaImage {
    let mut img = logo_background(rgb(0x10A37F));
    stroke_ring(&mut img, 100.0, 100.0, 60.0, 10.0, WHITE);
    fill_circle(&mut img, 100.0, 100.0, 15.0, WHITE);
    let w = 10.0;
    stroke_line(&mut img, (100.0, 55.0), (100.0, 85.0), w, WHITE);
    stroke_line(&mut img, (100.0, 115.0), (100.0, 145.0), w, WHITE);
    stroke_line(&mut img, (145.0, 100.0), (115.0, 100.0), w, WHITE);
    stroke_line(&mut img, (85.0, 100.0), (55.0, 100.0), w, WHITE);
    img
}

fn paint_face(skin: Rgba<u8>, mouth: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::new(ART_SIZE, ART_SIZE);
    fill_circle(&mut img, 100.0, 100.0, 100.0, skin);
    fill_circle(&mut img, 75.0, 85.0, 12.0, BLACK);
    fill_circle(&mut img, 125.0, 85.0, 12.0, BLACK);
    fill_ellipse(&mut img, 100.0, 130.0, 30.0, 20.0, mouth);
    stroke_quad(&mut img, (70.0, 120.0), (100.0, 140.0), (130.0, 120.0), 3.0, BLACK);
    img
}
