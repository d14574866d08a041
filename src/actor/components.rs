//! Components shared by the player, enemies, tiles, and particles.

use bevy::prelude::*;

/// Axis-aligned box in screen space (+y down), in pixels.
///
/// Two boxes that only share an edge do not overlap.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    /// Shrink a sprite rectangle by `inset` (total, split across both sides)
    /// keeping its center.
    pub fn from_sprite_rect(sprite: Hitbox, inset: Vec2) -> Self {
        Self::from_center(sprite.center(), (sprite.size() - inset).max(Vec2::ZERO))
    }

    /// Grow the box by `amount` keeping its center.
    pub fn inflated(&self, amount: Vec2) -> Self {
        Self::from_center(self.center(), (self.size() + amount).max(Vec2::ZERO))
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn mid_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top + self.height / 2.0)
    }

    pub fn mid_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top + self.height / 2.0)
    }

    pub fn mid_top(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top)
    }

    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.bottom())
    }

    pub fn set_right(&mut self, right: f32) {
        self.left = right - self.width;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.top = bottom - self.height;
    }

    /// Strict intersection test.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

/// Movement intent. `direction` is zero or unit length once the actor has moved.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Motion {
    pub direction: Vec2,
    /// Pixels per tick
    pub speed: f32,
}

impl Motion {
    pub fn new(speed: f32) -> Self {
        Self {
            direction: Vec2::ZERO,
            speed,
        }
    }
}

/// Frame cursor into the current animation clip.
#[derive(Component, Debug, Clone, Copy)]
pub struct Animator {
    pub frame_index: f32,
    /// Frames advanced per tick
    pub animation_speed: f32,
    /// Sprite opacity, 0.0 or 1.0 while blinking
    pub alpha: f32,
}

impl Animator {
    pub fn new(animation_speed: f32) -> Self {
        Self {
            frame_index: 0.0,
            animation_speed,
            alpha: 1.0,
        }
    }

    /// Step the cursor through a clip of `frame_count` frames.
    ///
    /// Returns true when the cursor ran past the last frame and wrapped to 0.
    pub fn advance(&mut self, frame_count: usize) -> bool {
        self.frame_index += self.animation_speed;
        if self.frame_index >= frame_count as f32 {
            self.frame_index = 0.0;
            true
        } else {
            false
        }
    }

    /// Index of the frame currently shown.
    pub fn frame(&self) -> usize {
        self.frame_index.max(0.0) as usize
    }

    pub fn restart(&mut self) {
        self.frame_index = 0.0;
    }
}

/// Which clip an entity plays: a kind ("player", a monster name,
/// "particles") and a status tag inside it.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct AnimationKey {
    pub kind: String,
    pub status: String,
}

impl AnimationKey {
    pub fn new(kind: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            status: status.into(),
        }
    }
}

/// Static image drawn over the hitbox (tiles, weapons).
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct SpriteImage(pub String);

/// Blocks movement of actors.
#[derive(Component, Debug, Default)]
pub struct Obstacle;

/// Can be hit by attack hitboxes.
#[derive(Component, Debug, Default)]
pub struct Attackable;

/// Destroyed by any hit (grass).
#[derive(Component, Debug, Default)]
pub struct Breakable;
