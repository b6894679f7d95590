pub(crate) mod piece;
