//! Render pass.
//!
//! [`SpriteCanvas`] is the drawing seam actors render through; the raylib
//! implementation looks textures up in the
//! [`TextureStore`](crate::resources::texturestore::TextureStore).
//! [`render_system`] clears the frame and draws every actor in
//! [`ZIndex`](crate::components::zindex::ZIndex) order.

use bevy_ecs::prelude::*;
use raylib::prelude::*;
use raylib::{RaylibHandle, RaylibThread};

use crate::components::actor::Actor;
use crate::components::collider::Rect;
use crate::components::zindex::ZIndex;
use crate::resources::animationstore::AnimationStore;
use crate::resources::texturestore::TextureStore;

/// Background clear color.
pub const CLEAR_COLOR: Color = Color {
    r: 30,
    g: 30,
    b: 30,
    a: 255,
};

/// Drawing target for sprites.
pub trait SpriteCanvas {
    /// Draw the `src` region of a texture stretched over `dest`.
    fn draw_region(&mut self, tex_key: &str, src: Rect, dest: Rect);
    /// Draw a whole texture stretched over `dest`.
    fn draw_whole(&mut self, tex_key: &str, dest: Rect);
}

/// [`SpriteCanvas`] over a raylib draw handle.
///
/// Unknown texture keys are skipped.
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    pub d: &'a mut D,
    pub textures: &'a TextureStore,
}

impl<D: RaylibDraw> SpriteCanvas for RaylibCanvas<'_, D> {
    fn draw_region(&mut self, tex_key: &str, src: Rect, dest: Rect) {
        if let Some(tex) = self.textures.get(tex_key) {
            let src: Rectangle = src.into();
            let dest: Rectangle = dest.into();
            self.d
                .draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
    }

    fn draw_whole(&mut self, tex_key: &str, dest: Rect) {
        if let Some(tex) = self.textures.get(tex_key) {
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            let dest: Rectangle = dest.into();
            self.d
                .draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
    }
}

/// Draw all actors onto `canvas`, lowest [`ZIndex`] first.
///
/// Actors sharing a z-index keep their query order.
pub fn draw_actors<'a, C: SpriteCanvas + ?Sized>(
    canvas: &mut C,
    actors: impl IntoIterator<Item = (&'a Actor, Option<&'a ZIndex>)>,
    animations: &AnimationStore,
) {
    let mut to_draw: Vec<(ZIndex, &Actor)> = actors
        .into_iter()
        .map(|(actor, z)| (z.copied().unwrap_or_default(), actor))
        .collect();
    to_draw.sort_by_key(|(z, _)| *z);

    for (_z, actor) in to_draw {
        actor.render(canvas, animations);
    }
}

/// Clear the frame and draw every actor.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    animations: Res<AnimationStore>,
    actors: Query<(&Actor, Option<&ZIndex>)>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(CLEAR_COLOR);

    let mut canvas = RaylibCanvas {
        d: &mut d,
        textures: &textures,
    };
    draw_actors(&mut canvas, actors.iter(), &animations);
}
