use serde::{Deserialize, Serialize};

/// A display coordinate on the 0–100 canvas used by the explore view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Both layouts orbit the middle of the canvas.
pub const CENTER: Position = Position { x: 50.0, y: 50.0 };

impl Position {
    /// Point at `radius` along `angle` (radians) from [`CENTER`], nudged by `(dx, dy)`.
    pub fn polar(angle: f64, radius: f64, dx: f64, dy: f64) -> Self {
        Self {
            x: CENTER.x + angle.cos() * radius + dx,
            y: CENTER.y + angle.sin() * radius + dy,
        }
    }

    #[cfg(test)]
    pub fn distance_from_center(&self) -> f64 {
        (self.x - CENTER.x).hypot(self.y - CENTER.y)
    }
}
