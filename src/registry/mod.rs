pub(crate) mod depth;
pub(crate) mod ids;
pub(crate) mod tables;
