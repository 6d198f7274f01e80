//! macroquad host: window setup, asset resolution, input wiring and the
//! running/paused frame loop.

use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::EventHandler;
use macroquad::prelude::*;

use skyfire::assets::Assets;
use skyfire::audio::AudioBank;
use skyfire::compute;
use skyfire::constants::{SCENE_HEIGHT, SCENE_WIDTH};
use skyfire::display;
use skyfire::entities::Hero;
use skyfire::spawner::Spawner;

// ── Loop state machine ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunState {
    Running,
    Paused,
}

// ── Visibility events ─────────────────────────────────────────────────────────

/// Collects window visibility transitions from the host event stream. Only
/// the semantic hidden/visible payload reaches the loop.
#[derive(Default)]
struct VisibilityWatcher {
    /// The latest transition seen this frame, if any.
    hidden: Option<bool>,
}

impl EventHandler for VisibilityWatcher {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn window_minimized_event(&mut self) {
        self.hidden = Some(true);
    }

    fn window_restored_event(&mut self) {
        self.hidden = Some(false);
    }
}

// ── Input wiring ──────────────────────────────────────────────────────────────

/// Pointer-drag handling: pressing on the craft grabs it, moving the pointer
/// carries it along, releasing lets go.
fn handle_pointer(hero: &mut Hero) {
    let (mx, my) = mouse_position();
    if is_mouse_button_pressed(MouseButton::Left) && hero.contains(mx, my) {
        hero.dragging = true;
    }
    if is_mouse_button_released(MouseButton::Left) {
        hero.dragging = false;
    }
    if hero.dragging {
        hero.x = mx;
        hero.y = my;
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn window_conf() -> Conf {
    Conf {
        window_title: "Skyfire".to_string(),
        window_width: SCENE_WIDTH as i32,
        window_height: SCENE_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Resolve every asset before anything else runs; a missing file means
    // there is no game to start.
    let Assets { textures, sounds } = match Assets::load().await {
        Ok(assets) => assets,
        Err(err) => {
            error!("failed to load assets: {}", err);
            return;
        }
    };

    let mut rng = ::rand::thread_rng();
    let mut state = compute::new_state();
    let mut spawner = Spawner::new();
    let mut audio = AudioBank::start(sounds, get_time());
    let mut run_state = RunState::Running;

    let subscriber = register_input_subscriber();
    let mut visibility = VisibilityWatcher::default();

    spawner.schedule(get_time(), &mut rng);
    info!("skyfire started");

    loop {
        visibility.hidden = None;
        repeat_all_miniquad_input(&mut visibility, subscriber);

        // P toggles pause by hand, feeding the same hidden/visible payload
        // the window events produce.
        if is_key_pressed(KeyCode::P) {
            visibility.hidden = Some(run_state == RunState::Running);
        }

        // Pausing cancels the spawner and mutes audio in the same handler
        // invocation that stops ticking, so nothing fires after the pause.
        match (run_state, visibility.hidden) {
            (RunState::Running, Some(true)) => {
                run_state = RunState::Paused;
                spawner.cancel();
                audio.set_muted(true);
                info!("window hidden, game paused");
            }
            (RunState::Paused, Some(false)) => {
                run_state = RunState::Running;
                spawner.schedule(get_time(), &mut rng);
                audio.set_muted(false);
                info!("window restored, game resumed");
            }
            _ => {}
        }

        if run_state == RunState::Paused {
            next_frame().await;
            continue;
        }

        let now = get_time();

        handle_pointer(&mut state.hero);
        if is_key_pressed(KeyCode::Space) && compute::try_fire(&mut state, now) {
            audio.play_fire();
        }

        if let Some(enemy) = spawner.poll(now, &mut rng) {
            state.enemies.push(enemy);
        }

        for cue in compute::tick(&mut state) {
            audio.play(cue);
        }
        audio.service_loops(now);

        display::render(&state, &textures);
        next_frame().await;
    }
}
