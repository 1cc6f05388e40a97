pub(crate) mod context;
pub(crate) mod scheduler;
pub(crate) mod sequence;
