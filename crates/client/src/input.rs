//! Keyboard input.
//!
//! Keydown and keyup listeners on the document maintain a shared
//! [`KeyState`]; the frame loop samples it once per frame. Jump is
//! latched: a held key fires once and must be released before it can
//! fire again.

use std::cell::RefCell;
use std::rc::Rc;

use featherfall_game::PlayerInput;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::error::ClientError;

/// Key states tracked between frames.
#[derive(Debug, Default)]
pub struct KeyState {
    left: bool,
    right: bool,
    jump_held: bool,
    jump_latched: bool,
}

impl KeyState {
    /// Record a key transition. Arrows, WASD and space are recognized.
    pub fn set_key(&mut self, key: &str, down: bool) {
        match key {
            "ArrowLeft" | "a" | "A" => self.left = down,
            "ArrowRight" | "d" | "D" => self.right = down,
            "ArrowUp" | "w" | "W" | " " => {
                self.jump_held = down;
                if !down {
                    self.jump_latched = false;
                }
            }
            _ => {}
        }
    }

    /// Sample the input for one frame, consuming the jump edge.
    pub fn sample(&mut self) -> PlayerInput {
        let jump = self.jump_held && !self.jump_latched;
        if jump {
            self.jump_latched = true;
        }
        PlayerInput {
            left: self.left,
            right: self.right,
            jump,
        }
    }
}

/// Document-level keyboard listeners feeding a shared [`KeyState`].
pub struct Keyboard {
    state: Rc<RefCell<KeyState>>,
    // Dropping the closures would detach the listeners; they live as
    // long as the keyboard does.
    _on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
    _on_keyup: Closure<dyn FnMut(KeyboardEvent)>,
}

impl Keyboard {
    /// Attach keydown and keyup listeners to the document.
    pub fn attach() -> Result<Self, ClientError> {
        let document = web_sys::window()
            .ok_or(ClientError::NoWindow)?
            .document()
            .ok_or(ClientError::NoDocument)?;

        let state = Rc::new(RefCell::new(KeyState::default()));

        let down_state = state.clone();
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if !event.repeat() {
                down_state.borrow_mut().set_key(&event.key(), true);
            }
        });

        let up_state = state.clone();
        let on_keyup = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            up_state.borrow_mut().set_key(&event.key(), false);
        });

        document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
            .map_err(|_| ClientError::Listener)?;
        document
            .add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref())
            .map_err(|_| ClientError::Listener)?;

        Ok(Self {
            state,
            _on_keydown: on_keydown,
            _on_keyup: on_keyup,
        })
    }

    /// Sample the input for one frame.
    pub fn sample(&self) -> PlayerInput {
        self.state.borrow_mut().sample()
    }
}
