use rand::Rng;

use crate::foundation::error::SpriteResult;
use crate::foundation::math::{round_half_away, within_interior};
use crate::scene::appearance::{Appearance, SpritePatch};
use crate::scene::trajectory::Trajectory;
use crate::schedule::context::RunContext;

/// An object currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveObject {
    /// Run-wide id assigned at birth.
    pub object_id: u64,
    /// What was drawn at birth.
    pub appearance: Appearance,
    /// Rendered color and coverage.
    pub patch: SpritePatch,
    /// Path fixed at birth.
    pub trajectory: Trajectory,
    /// Steps rendered since birth.
    pub step: u32,
}

/// State of one object slot. Exactly one variant holds at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectSlot {
    /// Off screen; `wait_counter` counts steps since the last disappearance.
    Waiting {
        /// Steps waited, saturating at the appear interval.
        wait_counter: u32,
    },
    /// On screen.
    Active(Box<ActiveObject>),
}

impl Default for ObjectSlot {
    fn default() -> Self {
        ObjectSlot::Waiting { wait_counter: 0 }
    }
}

/// Where an active object is drawn this step.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    /// Run-wide id.
    pub object_id: u64,
    /// Rounded center x on the visible canvas.
    pub x: i64,
    /// Rounded center y on the visible canvas.
    pub y: i64,
    /// Appearance to draw.
    pub patch: &'a SpritePatch,
}

/// Result of advancing a slot by one step.
#[derive(Debug)]
pub enum StepOutcome<'a> {
    /// Still waiting (counter advanced, or the birth draw failed).
    Waiting,
    /// Born this step; drawing starts on the next step.
    Born {
        /// Id assigned to the newborn.
        object_id: u64,
    },
    /// Active and inside the interior; must be rendered.
    Visible(Placement<'a>),
    /// Left the interior; the slot is waiting again with its counter reset.
    Disappeared {
        /// Id of the object that left.
        object_id: u64,
    },
}

impl ObjectSlot {
    /// `true` while the slot holds an on-screen object.
    pub fn is_active(&self) -> bool {
        matches!(self, ObjectSlot::Active(_))
    }

    /// Active object, if any.
    pub fn active(&self) -> Option<&ActiveObject> {
        match self {
            ObjectSlot::Active(obj) => Some(obj),
            ObjectSlot::Waiting { .. } => None,
        }
    }

    /// Advance the slot by one time step.
    ///
    /// A waiting slot counts up to the appear interval and then retries the birth draw on
    /// every step without advancing the counter further. An active slot either renders at its
    /// current rounded position or, once that position leaves the interior, resets to waiting.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        ctx: &RunContext,
        rng: &mut R,
    ) -> SpriteResult<StepOutcome<'_>> {
        let cfg = ctx.config();
        match self {
            ObjectSlot::Waiting { wait_counter } if *wait_counter < cfg.appear_interval => {
                *wait_counter += 1;
                Ok(StepOutcome::Waiting)
            }
            ObjectSlot::Waiting { .. } => {
                if rng.random::<f64>() >= cfg.birth_prob {
                    return Ok(StepOutcome::Waiting);
                }
                let appearance = Appearance::sample(rng, cfg, ctx.library());
                let patch = appearance.render(ctx.library())?;
                let trajectory = ctx.planner.sample(rng);
                let object_id = ctx.ids().allocate();
                tracing::trace!(object_id, ?appearance, ?trajectory.direction, "birth");
                *self = ObjectSlot::Active(Box::new(ActiveObject {
                    object_id,
                    appearance,
                    patch,
                    trajectory,
                    step: 0,
                }));
                Ok(StepOutcome::Born { object_id })
            }
            ObjectSlot::Active(_) => Ok(self.advance_active(ctx)),
        }
    }

    fn advance_active(&mut self, ctx: &RunContext) -> StepOutcome<'_> {
        let cfg = ctx.config();
        let Some(obj) = self.active() else {
            return StepOutcome::Waiting;
        };
        let object_id = obj.object_id;
        let (x, y) = obj.rounded_position();
        let m = cfg.margin();
        let inside = within_interior(x as f64, m, cfg.width, cfg.eps)
            && within_interior(y as f64, m, cfg.height, cfg.eps);
        if !inside {
            tracing::trace!(object_id, x, y, "disappear");
            *self = ObjectSlot::Waiting { wait_counter: 0 };
            return StepOutcome::Disappeared { object_id };
        }

        let ObjectSlot::Active(obj) = self else {
            return StepOutcome::Waiting;
        };
        obj.step += 1;
        StepOutcome::Visible(Placement {
            object_id,
            x,
            y,
            patch: &obj.patch,
        })
    }
}

impl ActiveObject {
    /// Current center, rounded half away from zero.
    pub fn rounded_position(&self) -> (i64, i64) {
        let (fx, fy) = self.trajectory.position(self.step);
        (round_half_away(fx), round_half_away(fy))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/lifecycle.rs"]
mod tests;
