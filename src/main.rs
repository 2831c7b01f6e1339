//! Bounce Heads main entry point.
//!
//! Round heads bounce around a window, collide elastically and spin as they
//! go. In people mode, faces found by the camera detector join the presets
//! as extra heads.
//!
//! Built on:
//! - **raylib** for the window, keyboard and textures
//! - **bevy_ecs** for the entity-component-system architecture
//! - **crossbeam-channel** for the background detection thread
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, build the ECS world
//! 2. Paint the preset art and start the detection thread
//! 3. Each frame:
//!    - Refresh the canvas size from the window
//!    - Read input, apply show control changes
//!    - Merge the latest detection result
//!    - Move, reflect off the edges, resolve collisions
//!    - Upload new images and draw
//! 4. Shut down the detection thread (releasing the camera) on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --people --camera
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;

use bounceheads::camera::{NoCamera, NoDetector};
use bounceheads::events::showcontrol::show_control_observer;
use bounceheads::events::switchdebug::switch_debug_observer;
use bounceheads::resources::bounceconfig::BounceConfig;
use bounceheads::resources::canvassize::CanvasSize;
use bounceheads::resources::debugmode::DebugMode;
use bounceheads::resources::detection::{setup_detection, shutdown_detection};
use bounceheads::resources::input::InputState;
use bounceheads::resources::pendingimages::PendingImages;
use bounceheads::resources::showstate::{ShowMode, ShowState};
use bounceheads::resources::spawnrng::SpawnRng;
use bounceheads::resources::texturestore::TextureStore;
use bounceheads::systems::bounds::bounds;
use bounceheads::systems::collision::collision;
use bounceheads::systems::detection::apply_detection_results;
use bounceheads::systems::input::update_input_state;
use bounceheads::systems::movement::movement;
use bounceheads::systems::presets::{queue_preset_art, sync_show_state};
use bounceheads::systems::render::render_system;
use bounceheads::systems::textures::upload_head_images;

/// Bouncing heads with optional camera faces.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start in people mode instead of company mode.
    #[arg(long)]
    people: bool,

    /// Start with the camera enabled.
    #[arg(long)]
    camera: bool,

    /// Seed for spawn positions and velocities.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Start with the debug overlay on.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = BounceConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{} ({}), using defaults", e, cli.config.display());
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(CanvasSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(match cli.seed {
        Some(seed) => SpawnRng::seeded(seed),
        None => SpawnRng::default(),
    });
    let mode = if cli.people {
        ShowMode::People
    } else {
        ShowMode::Company
    };
    world.insert_resource(ShowState::new(mode, cli.camera));
    world.insert_resource(InputState::default());
    world.insert_resource(PendingImages::default());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    queue_preset_art(&mut world);

    // Camera and detector backends plug in here.
    setup_detection(&mut world, Box::new(NoCamera), Box::new(NoDetector));

    world.spawn(Observer::new(show_control_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            sync_show_state,
            // Detection results land before physics so a frame never sees a
            // half-merged registry.
            apply_detection_results,
            movement,
            bounds,
            collision,
            upload_head_images,
            render_system,
        )
            .chain(),
    );

    log::info!("Bounce Heads running in {} mode", mode.label());

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        // Update canvas size each frame (may change due to resize)
        let (w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut canvas = world.resource_mut::<CanvasSize>();
            if canvas.w != w || canvas.h != h {
                canvas.w = w;
                canvas.h = h;
            }
        }

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    shutdown_detection(&mut world);
}
