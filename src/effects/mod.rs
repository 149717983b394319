pub(crate) mod outline;
