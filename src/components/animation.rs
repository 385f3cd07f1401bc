//! Sprite-sheet animation playback state.
//!
//! An [`Animation`] describes a horizontal run of equally sized frames in a
//! sprite sheet and tracks which one is currently visible. Animations are
//! owned by the [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! and shared between actors through an [`AnimationId`] handle, so every actor
//! assigned the same sequence sees (and advances) the same playback position.

use crate::components::collider::Rect;

/// Frame height used by [`Animation::source_region`].
pub const DEFAULT_FRAME_HEIGHT: i32 = 64;

/// Handle to an animation stored in the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// Index of the first frame of this sequence in the sheet row.
    pub start_frame: i32,
    /// Number of frames in the sequence. Always at least 1.
    pub frame_count: usize,
    /// Width of a single frame in pixels.
    pub frame_width: i32,
    /// Seconds each frame stays on screen.
    pub frame_time: f32,
    timer: f32,
    current_frame: usize,
}

impl Animation {
    /// Create a sequence starting at `start_frame` with `frame_count` frames.
    ///
    /// A zero frame count is raised to 1.
    pub fn new(start_frame: i32, frame_count: usize, frame_width: i32, frame_time: f32) -> Self {
        Self {
            start_frame,
            frame_count: frame_count.max(1),
            frame_width,
            frame_time,
            timer: 0.0,
            current_frame: 0,
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Accumulate `dt` seconds and step one frame once `frame_time` is reached.
    ///
    /// The timer restarts from zero on a step; leftover time is dropped and at
    /// most one frame is advanced per call.
    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer >= self.frame_time {
            self.timer = 0.0;
            self.current_frame = (self.current_frame + 1) % self.frame_count;
        }
    }

    /// Rewind to the first frame with an empty timer.
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.current_frame = 0;
    }

    /// Source rectangle of the current frame on row `row_offset`.
    pub fn source_region_at(&self, row_offset: i32, frame_height: i32) -> Rect {
        Rect {
            x: (self.start_frame + self.current_frame as i32) * self.frame_width,
            y: row_offset,
            w: self.frame_width,
            h: frame_height,
        }
    }

    /// Source rectangle of the current frame on the sheet's first row.
    pub fn source_region(&self) -> Rect {
        self.source_region_at(0, DEFAULT_FRAME_HEIGHT)
    }
}
