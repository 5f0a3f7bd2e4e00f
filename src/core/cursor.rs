use super::constants::CURSOR_FOLLOW_FACTOR;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pub target: Vec2,
    pub current: Vec2,
    pub visible: bool,
}

impl CursorFollower {
    /// Returns true on the first move, when the cursor should become visible.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        self.target = Vec2::new(x, y);
        let first = !self.visible;
        self.visible = true;
        first
    }

    /// Ease the trailing follower toward the pointer by a fixed fraction.
    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * CURSOR_FOLLOW_FACTOR;
        self.current
    }
}
