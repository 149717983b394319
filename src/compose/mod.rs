pub(crate) mod builder;
pub(crate) mod frame;
pub(crate) mod overlay;
pub(crate) mod queue;
