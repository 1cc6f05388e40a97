use rand::Rng;

use crate::foundation::core::Canvas;
use crate::foundation::math::uniform_index;

/// Cardinal crossing direction, in sampling-index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Enters at the top edge, exits at the bottom.
    TopToBottom,
    /// Enters at the bottom edge, exits at the top.
    BottomToTop,
    /// Enters at the left edge, exits at the right.
    LeftToRight,
    /// Enters at the right edge, exits at the left.
    RightToLeft,
}

impl Direction {
    /// All directions, indexed by sample index.
    pub const ALL: [Direction; 4] = [
        Direction::TopToBottom,
        Direction::BottomToTop,
        Direction::LeftToRight,
        Direction::RightToLeft,
    ];

    /// `true` for the two directions that travel along the y axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::TopToBottom | Direction::BottomToTop)
    }
}

/// Straight-line constant-velocity path fixed at birth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    /// Direction the path was sampled from.
    pub direction: Direction,
    /// Entry point x.
    pub origin_x: f64,
    /// Entry point y.
    pub origin_y: f64,
    /// Pixels per step along x.
    pub velocity_x: f64,
    /// Pixels per step along y.
    pub velocity_y: f64,
}

impl Trajectory {
    /// Path entering at `start` and heading towards `end` at `speed` pixels per step.
    pub fn between(direction: Direction, start: (f64, f64), end: (f64, f64), speed: f64) -> Self {
        let theta = (end.1 - start.1).atan2(end.0 - start.0);
        Self {
            direction,
            origin_x: start.0,
            origin_y: start.1,
            velocity_x: speed * theta.cos(),
            velocity_y: speed * theta.sin(),
        }
    }

    /// Unrounded position after `step` steps.
    pub fn position(&self, step: u32) -> (f64, f64) {
        let s = f64::from(step);
        (
            self.origin_x + s * self.velocity_x,
            self.origin_y + s * self.velocity_y,
        )
    }
}

/// Samples entry/exit geometry for newborn objects.
#[derive(Clone, Copy, Debug)]
pub struct TrajectoryPlanner {
    canvas: Canvas,
    margin: u32,
    speed: f64,
}

impl TrajectoryPlanner {
    /// Planner for `canvas`, keeping endpoints `margin` pixels inside each edge.
    pub fn new(canvas: Canvas, margin: u32, speed: f64) -> Self {
        Self {
            canvas,
            margin,
            speed,
        }
    }

    /// Draw a direction and two perpendicular endpoints.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Trajectory {
        let direction = Direction::ALL[uniform_index(rng.random::<f64>(), Direction::ALL.len())];
        let across = if direction.is_vertical() {
            self.canvas.width
        } else {
            self.canvas.height
        };
        let p0 = self.perpendicular(rng.random::<f64>(), across);
        let p1 = self.perpendicular(rng.random::<f64>(), across);
        self.plan(direction, p0, p1)
    }

    /// Path for `direction` whose perpendicular coordinate goes from `p0` to `p1`.
    pub fn plan(&self, direction: Direction, p0: f64, p1: f64) -> Trajectory {
        let m = f64::from(self.margin);
        let far_x = f64::from(self.canvas.width) - 1.0 - m;
        let far_y = f64::from(self.canvas.height) - 1.0 - m;
        let (start, end) = match direction {
            Direction::TopToBottom => ((p0, m), (p1, far_y)),
            Direction::BottomToTop => ((p0, far_y), (p1, m)),
            Direction::LeftToRight => ((m, p0), (far_x, p1)),
            Direction::RightToLeft => ((far_x, p0), (m, p1)),
        };
        Trajectory::between(direction, start, end, self.speed)
    }

    // Integer coordinate in [m, len - m - 1].
    fn perpendicular(&self, u: f64, len: u32) -> f64 {
        let span = f64::from(len) - 2.0 * f64::from(self.margin);
        (u * span + f64::from(self.margin)).floor()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/trajectory.rs"]
mod tests;
