use std::sync::atomic::{AtomicU64, Ordering};

use crate::assets::shapes::ShapeLibrary;
use crate::config::GeneratorConfig;
use crate::scene::trajectory::TrajectoryPlanner;

/// Hands out run-wide object ids in birth order. Ids are never reused.
#[derive(Debug, Default)]
pub struct ObjectIdAllocator {
    next: AtomicU64,
}

impl ObjectIdAllocator {
    /// Allocator whose first id is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id.
    pub fn allocate(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

/// Read-mostly state shared by every sequence worker of a run.
///
/// Owned by the scheduler; workers only borrow it. The id allocator is the single piece of
/// shared mutable state.
#[derive(Debug)]
pub struct RunContext {
    pub(crate) config: GeneratorConfig,
    pub(crate) library: ShapeLibrary,
    pub(crate) planner: TrajectoryPlanner,
    pub(crate) ids: ObjectIdAllocator,
}

impl RunContext {
    /// Build templates and planner for `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        let library = ShapeLibrary::new(config.patch_h, config.patch_w);
        let planner = TrajectoryPlanner::new(config.canvas(), config.margin(), config.speed);
        Self {
            config,
            library,
            planner,
            ids: ObjectIdAllocator::new(),
        }
    }

    /// Configuration of the run.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Shape templates and palette.
    pub fn library(&self) -> &ShapeLibrary {
        &self.library
    }

    /// Object id allocator.
    pub fn ids(&self) -> &ObjectIdAllocator {
        &self.ids
    }
}
