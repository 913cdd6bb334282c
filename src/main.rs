//! Ocean Cleanup entry point
//!
//! Handles platform-specific initialization and runs the game loop. The web
//! build exports a `WebGame` handle that the page drives from
//! `requestAnimationFrame`; the native build plays one headless session on
//! autopilot and prints the score history.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use glam::Vec2;
    use wasm_bindgen::prelude::*;

    use ocean_cleanup::persistence::Store;
    use ocean_cleanup::renderer::tessellate;
    use ocean_cleanup::sim::Phase;
    use ocean_cleanup::{GameRunner, Tuning};

    /// Game instance holding all state
    #[wasm_bindgen]
    pub struct WebGame {
        runner: GameRunner,
        last_time: f64,
    }

    #[wasm_bindgen]
    impl WebGame {
        #[wasm_bindgen(constructor)]
        pub fn new() -> WebGame {
            let seed = js_sys::Date::now() as u64;
            log::info!("Game initialized with seed: {}", seed);
            WebGame {
                runner: GameRunner::new(seed, Tuning::default(), Store::default_location()),
                last_time: 0.0,
            }
        }

        /// Advance to `time` (ms, as passed to requestAnimationFrame)
        pub fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (time - self.last_time) / 1000.0
            } else {
                0.0
            };
            self.last_time = time;
            self.runner.update(dt);
        }

        /// Keyboard state from `KeyboardEvent.key`
        pub fn key(&mut self, key: &str, down: bool) {
            let input = &mut self.runner.input;
            match key {
                "ArrowLeft" => input.left = down,
                "ArrowRight" => input.right = down,
                "ArrowUp" => input.up = down,
                "ArrowDown" => input.down = down,
                " " if down => input.dismiss = true,
                "Enter" if down => {
                    input.start = true;
                    input.restart = true;
                }
                "b" | "B" if down => input.open_codex = true,
                "i" | "I" if down => {
                    input.autopilot = !input.autopilot;
                    log::info!("Autopilot: {}", input.autopilot);
                }
                _ if down => {
                    // 1-9 select a codex entry, 0 is the tenth
                    if let Ok(n) = key.parse::<u8>() {
                        input.codex_select = Some(if n == 0 { 10 } else { n });
                    }
                }
                _ => {}
            }
        }

        /// Click in screen pixels
        pub fn click(&mut self, x: f32, y: f32) {
            self.runner.click(Vec2::new(x, y));
        }

        /// Solid-shape vertices for this frame, flattened as
        /// `[x, y, r, g, b, a]` per vertex in NDC
        pub fn vertices(&self) -> Vec<f32> {
            let list = self.runner.frame();
            let vertices = tessellate(&list, self.runner.state.tuning.screen);
            bytemuck::cast_slice(&vertices).to_vec()
        }

        pub fn score(&self) -> u64 {
            self.runner.state.score()
        }

        pub fn finished(&self) -> bool {
            self.runner.state.phase == Phase::End
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            return;
        }
        log::info!("Ocean Cleanup starting...");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ocean_cleanup::persistence::Store;
    use ocean_cleanup::sim::{GameEvent, Phase};
    use ocean_cleanup::{GameRunner, Tuning};

    env_logger::init();
    log::info!("Ocean Cleanup (native) starting...");
    log::info!("Native mode runs a headless autopilot session");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    let tuning = load_tuning();

    let mut runner = GameRunner::new(seed, tuning, Store::default_location());
    runner.input.autopilot = true;
    runner.input.start = true;

    // Two rounds plus slack
    let max_ticks = (runner.state.tuning.round_secs * 2.0 / ocean_cleanup::consts::SIM_DT) as u64
        + u64::from(ocean_cleanup::consts::TICK_RATE) * 10;
    for _ in 0..max_ticks {
        for event in runner.step() {
            match event {
                GameEvent::DayStarted(day) => log::info!("Day {} begins", day.number()),
                GameEvent::Collected(pickup) if pickup.first_sighting => {
                    log::info!("New trash type discovered: #{}", pickup.kind.id());
                }
                GameEvent::SessionComplete { score } => println!("Final score: {}", score),
                _ => {}
            }
        }
        if runner.state.phase == Phase::End {
            break;
        }
    }

    println!(
        "Collected {} of 10 trash types",
        runner.state.registry.count()
    );
    println!("\nScore history:");
    for (i, (timestamp, score)) in runner.achievements.entries().enumerate() {
        println!("  #{}: {} - {} points", i + 1, timestamp, score);
    }
}

/// Balance overrides from `$OCEAN_CLEANUP_TUNING` (a JSON file), else defaults
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> ocean_cleanup::Tuning {
    use ocean_cleanup::Tuning;

    let Some(path) = std::env::var_os("OCEAN_CLEANUP_TUNING") else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => Tuning::from_json(&text).unwrap_or_else(|e| {
            log::warn!("Invalid tuning file, using defaults: {}", e);
            Tuning::default()
        }),
        Err(e) => {
            log::warn!("Could not read tuning file: {}", e);
            Tuning::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
