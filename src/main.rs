use anyhow::{Context, Result};
use glam::Vec2;
use log::info;

use pixel_sprite_controller::engine::input::{AbilityLatch, Compass};
use pixel_sprite_controller::game::characters::{
    CharacterController, MovementPolicy, SpriteDraw, SpriteRenderer, Variant, BASE_DASH,
    BASE_JUMP,
};

/// Nominal period of the display loop
const FRAME_PERIOD_MS: u32 = 30;

/// Length of the scripted run
const DEMO_FRAMES: u32 = 150;

/// Stands in for the LCD driver: logs each blit
struct LogRenderer;

impl SpriteRenderer for LogRenderer {
    fn draw_sprite(&mut self, sprite: &SpriteDraw<'_>) {
        log::trace!(
            "blit {}x{} x{} at ({}, {}) colour {} flip {}",
            sprite.width,
            sprite.height,
            sprite.scale,
            sprite.x,
            sprite.y,
            sprite.colour,
            sprite.flip_horizontal
        );
    }
}

fn main() -> Result<()> {
    // Initialize logger; RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let variant = match std::env::var("SPRITE_VARIANT") {
        Ok(name) => name.parse::<Variant>()?,
        Err(_) => Variant::default(),
    };

    info!("Starting sprite controller demo ({:?} variant)", variant);

    match variant {
        Variant::Dash => {
            let controller =
                CharacterController::new(BASE_DASH).context("Invalid dash tuning")?;
            run(&controller, dash_script);
        }
        Variant::Jump => {
            let controller =
                CharacterController::new(BASE_JUMP).context("Invalid jump tuning")?;
            run(&controller, jump_script);
        }
    }

    Ok(())
}

/// Walk a square with two dashes, then stand still
fn dash_script(frame: u32) -> (Compass, bool) {
    match frame {
        0..=29 => (Compass::E, false),
        30..=59 => (Compass::S, frame == 40),
        60..=89 => (Compass::NW, frame == 75),
        // Dash on the spot: burns the timer without moving
        100 => (Compass::Centre, true),
        _ => (Compass::Centre, false),
    }
}

/// Run right with a jump, hop in place, then run left
fn jump_script(frame: u32) -> (Vec2, bool) {
    match frame {
        0..=49 => (Vec2::new(1.0, 0.0), frame == 20),
        50..=79 => (Vec2::new(0.1, 0.0), frame == 60),
        80..=129 => (Vec2::new(-0.9, 0.2), false),
        _ => (Vec2::ZERO, false),
    }
}

/// Drive one character through a script the way the display loop would
fn run<P, F>(controller: &CharacterController<P>, script: F)
where
    P: MovementPolicy,
    F: Fn(u32) -> (P::Input, bool),
{
    let mut state = controller.initialize(None);
    let mut latch = AbilityLatch::default();
    let mut renderer = LogRenderer;

    for frame in 0..DEMO_FRAMES {
        let (input, pressed) = script(frame);
        if pressed {
            latch.press(frame * FRAME_PERIOD_MS);
        }

        controller.update_latched(&mut state, input, &mut latch);
        controller.draw(&state, &mut renderer);

        if state.mode() != state.previous_mode() {
            info!(
                "frame {frame}: {:?} -> {:?} at {}",
                state.previous_mode(),
                state.mode(),
                state.position
            );
        }
    }

    info!(
        "Finished {} frames: {:?} at {}",
        DEMO_FRAMES,
        state.mode(),
        state.position
    );
}
