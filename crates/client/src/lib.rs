//! Featherfall Web Client
//!
//! Browser front end for the game: a canvas-2d renderer, document-level
//! keyboard input, and a requestAnimationFrame loop that feeds real
//! frame time into the simulation.

mod error;
mod input;
mod renderer;

pub use error::ClientError;
pub use input::{KeyState, Keyboard};
pub use renderer::Renderer;

use std::cell::RefCell;
use std::rc::Rc;

use featherfall_game::Game;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("featherfall client initialized");
}

/// Start the built-in campaign on the canvas with the given element id.
///
/// Returns once the animation loop is scheduled; the loop then re-arms
/// itself every frame.
#[wasm_bindgen]
pub fn run(canvas_id: &str) -> Result<(), JsValue> {
    let mut renderer = Renderer::new(canvas_id)?;
    let keyboard = Keyboard::attach()?;
    let mut game = Game::campaign();

    let window = web_sys::window().ok_or(ClientError::NoWindow)?;

    // The closure holds a handle to its own cell so it can re-schedule
    // itself each frame.
    let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = callback.clone();

    let mut last_time: Option<f64> = None;
    *callback.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        let delta = match last_time {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        last_time = Some(now_ms);

        let input = keyboard.sample();
        game.advance(delta, &input);
        renderer.draw(&game);

        if let (Some(window), Some(cb)) = (web_sys::window(), handle.borrow().as_ref()) {
            if window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .is_err()
            {
                log::error!("failed to schedule next frame; stopping");
            }
        }
    }));

    if let Some(cb) = callback.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
