//! Kinematic actor: the single entity type of the game.
//!
//! An [`Actor`] owns its bounding box, velocity and a one-shot input intent.
//! Texture and animation are referenced by key/handle, never owned.
//!
//! Velocity is integrated per axis:
//! 1. accelerate along the intent direction,
//! 2. when the axis has no intent, decelerate toward zero without crossing it,
//! 3. clamp to `±max_speed`,
//! 4. clear the intent.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::animation::AnimationId;
use crate::components::collider::{Rect, overlaps};
use crate::resources::animationstore::AnimationStore;
use crate::systems::render::SpriteCanvas;

const DEFAULT_ACCELERATION: f32 = 500.0;
const DEFAULT_FRICTION: f32 = 800.0;
const DEFAULT_MAX_SPEED: f32 = 250.0;

/// Movement tuning constants, in pixels per second (squared).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub acceleration: f32,
    pub friction: f32,
    pub max_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            acceleration: DEFAULT_ACCELERATION,
            friction: DEFAULT_FRICTION,
            max_speed: DEFAULT_MAX_SPEED,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Actor {
    bounds: Rect,
    velocity: Vector2,
    intent_x: i32,
    intent_y: i32,
    pub tuning: Tuning,
    texture: Option<String>,
    animation: Option<AnimationId>,
}

impl Actor {
    /// Create an actor at rest with default tuning.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            bounds: Rect::new(x, y, w, h),
            velocity: Vector2 { x: 0.0, y: 0.0 },
            intent_x: 0,
            intent_y: 0,
            tuning: Tuning::default(),
            texture: None,
            animation: None,
        }
    }

    pub fn with_texture(mut self, tex_key: impl Into<String>) -> Self {
        self.texture = Some(tex_key.into());
        self
    }

    /// Assign an animation at construction time, keeping its playback state.
    pub fn with_animation(mut self, animation: AnimationId) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    pub fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = vy;
    }

    /// Pending intent, as set by [`Actor::set_input_intent`].
    pub fn input_intent(&self) -> (i32, i32) {
        (self.intent_x, self.intent_y)
    }

    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    pub fn animation(&self) -> Option<AnimationId> {
        self.animation
    }

    /// Store the movement direction for the next [`Actor::integrate`] call.
    ///
    /// Each component is reduced to its sign.
    pub fn set_input_intent(&mut self, ix: i32, iy: i32) {
        self.intent_x = ix.signum();
        self.intent_y = iy.signum();
    }

    /// Integrate velocity from the pending intent and advance the animation.
    ///
    /// Must run exactly once per tick, after the tick's intent was set. The
    /// intent is consumed.
    pub fn integrate(&mut self, dt: f32, animations: &mut AnimationStore) {
        if let Some(anim) = self.animation.and_then(|id| animations.get_mut(id)) {
            anim.advance(dt);
        }

        let t = self.tuning;
        self.velocity.x = integrate_axis(self.velocity.x, self.intent_x, dt, t);
        self.velocity.y = integrate_axis(self.velocity.y, self.intent_y, dt, t);

        self.intent_x = 0;
        self.intent_y = 0;
    }

    /// Move the bounds by whole pixels. No collision checks.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.bounds.x += dx;
        self.bounds.y += dy;
    }

    pub fn collides_with(&self, other: &Actor) -> bool {
        overlaps(&self.bounds(), &other.bounds())
    }

    /// Switch to `animation`, rewinding it, unless it is already assigned.
    pub fn set_animation(&mut self, animation: AnimationId, animations: &mut AnimationStore) {
        if self.animation == Some(animation) {
            return;
        }
        self.animation = Some(animation);
        if let Some(anim) = animations.get_mut(animation) {
            anim.reset();
        }
    }

    /// Draw into the actor's bounds.
    ///
    /// With an animation the current frame's source region is used, otherwise
    /// the whole texture is stretched over the bounds. Nothing is drawn
    /// without a texture.
    pub fn render<C: SpriteCanvas + ?Sized>(&self, canvas: &mut C, animations: &AnimationStore) {
        let Some(tex_key) = self.texture.as_deref() else {
            return;
        };
        match self.animation.and_then(|id| animations.get(id)) {
            Some(anim) => canvas.draw_region(tex_key, anim.source_region(), self.bounds),
            None => canvas.draw_whole(tex_key, self.bounds),
        }
    }
}

fn integrate_axis(velocity: f32, intent: i32, dt: f32, t: Tuning) -> f32 {
    let mut v = velocity + intent as f32 * t.acceleration * dt;
    if intent == 0 {
        let decay = t.friction * dt;
        if v > 0.0 {
            v = (v - decay).max(0.0);
        } else if v < 0.0 {
            v = (v + decay).min(0.0);
        }
    }
    v.clamp(-t.max_speed, t.max_speed)
}
