pub(crate) mod arc;
pub(crate) mod builder;
pub(crate) mod command;
