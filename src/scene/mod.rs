pub(crate) mod appearance;
pub(crate) mod lifecycle;
pub(crate) mod trajectory;
