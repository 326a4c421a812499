//! Canvas renderer.
//!
//! Draws the world into a 2d canvas. World space is Y-up with the origin
//! at the bottom-left of the view; the canvas is Y-down, so the vertical
//! axis flips on the way out. The canvas always shows `units_width`
//! world units across, and its pixel height follows the configured
//! aspect ratio.

use featherfall_game::{Game, SurfaceEffect};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::ClientError;

const BACKGROUND_COLOR: &str = "#10141f";
const SURFACE_COLOR: &str = "#8a93a6";
const HAZARD_COLOR: &str = "#d64550";
const GOAL_COLOR: &str = "#58c470";
const PLAYER_COLOR: &str = "#f2a541";
const PLAYER_DEAD_COLOR: &str = "#5a5e6b";

/// Canvas-2d renderer for the game world.
pub struct Renderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    /// Pixels per world unit.
    scaling: f32,
}

impl Renderer {
    /// Bind to the canvas with the given element id.
    pub fn new(canvas_id: &str) -> Result<Self, ClientError> {
        let document = web_sys::window()
            .ok_or(ClientError::NoWindow)?
            .document()
            .ok_or(ClientError::NoDocument)?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| ClientError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ClientError::CanvasNotFound(canvas_id.to_string()))?;

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(ClientError::NoContext)?;

        Ok(Self {
            canvas,
            context,
            scaling: 1.0,
        })
    }

    /// Recompute the world-to-pixel scale from the canvas width and fit
    /// the canvas height to the configured aspect.
    fn update_scaling(&mut self, game: &Game) {
        let width = self.canvas.width() as f32;
        self.scaling = width / game.config.units_width;

        let height = (width * game.config.aspect) as u32;
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
    }

    /// World position to canvas pixels.
    fn to_screen(&self, position: Vec2) -> (f64, f64) {
        let x = position.x * self.scaling;
        let y = self.canvas.height() as f32 - position.y * self.scaling;
        (f64::from(x), f64::from(y))
    }

    /// Fill a centered world-space box.
    fn fill_box(&self, center: Vec2, size: Vec2, color: &str) {
        let top_left = center + Vec2::new(-size.x, size.y) * 0.5;
        let (x, y) = self.to_screen(top_left);
        self.context.set_fill_style_str(color);
        self.context.fill_rect(
            x,
            y,
            f64::from(size.x * self.scaling),
            f64::from(size.y * self.scaling),
        );
    }

    /// Draw one frame of the game.
    pub fn draw(&mut self, game: &Game) {
        self.update_scaling(game);

        self.context.set_fill_style_str(BACKGROUND_COLOR);
        self.context.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );

        // Goal sits behind the geometry.
        let goal = game.current_level().goal;
        self.fill_box(goal.center(), goal.max - goal.min, GOAL_COLOR);

        for surface in &game.world.statics {
            let color = match surface.effect {
                SurfaceEffect::Hazard { .. } => HAZARD_COLOR,
                SurfaceEffect::None => SURFACE_COLOR,
            };
            self.fill_box(surface.position, surface.size, color);
        }

        for body in &game.world.bodies {
            let color = if body.id == game.player.body_id && !game.player.is_alive() {
                PLAYER_DEAD_COLOR
            } else {
                PLAYER_COLOR
            };
            self.fill_box(body.position, body.size, color);
        }
    }
}
