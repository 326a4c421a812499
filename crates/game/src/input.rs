//! Player input handling.
//!
//! This module carries the per-frame input sampled by the client layer.
//! Held keys arrive as level states; jump arrives edge-triggered, already
//! latched by the input layer so holding the key does not re-fire.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Raw player input for a single frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Left movement key held.
    pub left: bool,

    /// Right movement key held.
    pub right: bool,

    /// Jump pressed this frame.
    pub jump: bool,
}

impl PlayerInput {
    /// Convert the held keys into a movement direction.
    ///
    /// Opposing keys cancel out.
    pub fn move_dir(&self) -> Vec2 {
        let mut x = 0.0;
        if self.right {
            x += 1.0;
        }
        if self.left {
            x -= 1.0;
        }
        Vec2::new(x, 0.0)
    }

    /// Check if any movement input is active.
    pub fn has_movement(&self) -> bool {
        self.left || self.right
    }
}
