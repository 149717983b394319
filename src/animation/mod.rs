pub(crate) mod ease;
pub(crate) mod fit;
pub(crate) mod motion;
