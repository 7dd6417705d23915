//! Browser binding
//!
//! The page owns the canvas, the buttons and `requestAnimationFrame`; it
//! calls `frame` once per refresh with its input flags and draws the JSON
//! snapshot it gets back.

use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::best::LocalStorageStore;
use crate::session::Session;
use crate::sim::{TickInput, Viewport, seeded};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Salto Katze ready");
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session<LocalStorageStore, Pcg32>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let seed = js_sys::Date::now() as u64;
        log::info!("New game with seed: {}", seed);
        WebGame {
            session: Session::new(
                Tuning::default(),
                Viewport::new(width, height),
                LocalStorageStore,
                seeded(seed),
            ),
        }
    }

    /// One display refresh; returns the snapshot as JSON
    pub fn frame(&mut self, now_ms: f64, jump: bool, run: bool) -> String {
        let input = TickInput {
            jump_requested: jump,
            run_held: run,
        };
        let snapshot = self.session.frame(now_ms, &input);
        serde_json::to_string(&snapshot).unwrap_or_else(|e| {
            log::warn!("Snapshot encoding failed: {}", e);
            String::from("{}")
        })
    }

    /// Pointer/tap on the canvas; restarts only after a loss
    pub fn restart(&mut self) -> bool {
        self.session.restart()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(Viewport::new(width, height));
    }

    pub fn best(&self) -> u64 {
        self.session.state().best
    }
}
