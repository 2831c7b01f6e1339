use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::head::Head;
use crate::components::headimage::HeadImage;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::slot::Slot;
use crate::resources::debugmode::DebugMode;
use crate::resources::detection::DetectionBridge;
use crate::resources::input::InputState;
use crate::resources::showstate::ShowState;
use crate::resources::texturestore::TextureStore;

const HELP_LINES: [&str; 5] = [
    "P  people mode",
    "C  company mode",
    "T  toggle camera",
    "]  more presets",
    "[  fewer presets",
];

/// Draw the heads, then the overlays.
///
/// Heads are drawn in slot order, each as a `size × size` square centered
/// on the head and rotated about that center. Heads whose texture is not
/// uploaded yet are skipped.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    query: Query<(&Slot, &Head, &HeadImage, &MapPosition, &Rotation)>,
    input: Res<InputState>,
    show: Res<ShowState>,
    debug_mode: Option<Res<DebugMode>>,
    bridge: Option<Res<DetectionBridge>>,
) {
    let mut to_draw: Vec<_> = query.iter().collect();
    to_draw.sort_by(|a, b| a.0.cmp(b.0));

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    for (_, head, image, position, rotation) in to_draw.iter() {
        let Some(tex) = textures.get(&image.tex_key) else {
            continue;
        };
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: tex.width as f32,
            height: tex.height as f32,
        };
        let center = head.center(position.pos);
        let dest = Rectangle {
            x: center.x,
            y: center.y,
            width: head.size,
            height: head.size,
        };
        let origin = Vector2 {
            x: head.radius(),
            y: head.radius(),
        };
        d.draw_texture_pro(tex, src, dest, origin, rotation.degrees(), Color::WHITE);
    }

    if input.help.active {
        render_help(&mut d, &show);
    }

    if debug_mode.is_some() {
        let presets = to_draw.iter().filter(|(slot, ..)| slot.is_preset()).count();
        let detected = to_draw.len() - presets;
        let session = bridge.as_ref().and_then(|b| b.active_session());
        render_debug_ui(&mut d, presets, detected, session, textures.len());
    }
}

fn render_help(d: &mut RaylibDrawHandle, show: &ShowState) {
    d.draw_rectangle(10, 10, 260, 170, Color::new(0, 0, 0, 180));
    d.draw_rectangle_lines(10, 10, 260, 170, Color::RAYWHITE);
    let mut y = 20;
    for line in HELP_LINES {
        d.draw_text(line, 20, y, 16, Color::RAYWHITE);
        y += 20;
    }
    let status = format!(
        "{} mode, {}/{} presets",
        show.mode.label(),
        show.preset_count(),
        show.max_presets()
    );
    d.draw_text(&status, 20, y + 8, 16, Color::GOLD);
    let camera = if show.camera_enabled {
        "Camera: on"
    } else {
        "Camera: off"
    };
    d.draw_text(camera, 20, y + 28, 16, Color::GOLD);
}

fn render_debug_ui(
    d: &mut RaylibDrawHandle,
    presets: usize,
    detected: usize,
    session: Option<u64>,
    textures: usize,
) {
    let screen_h = d.get_screen_height();

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, screen_h - 50, 10, Color::LIME);

    let text = format!(
        "Heads: {} preset, {} detected | Textures: {}",
        presets, detected, textures
    );
    d.draw_text(&text, 10, screen_h - 35, 10, Color::LIME);

    let text = match session {
        Some(id) => format!("Detection session {}", id),
        None => "Detection idle".to_string(),
    };
    d.draw_text(&text, 10, screen_h - 20, 10, Color::LIME);
}
