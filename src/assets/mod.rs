pub(crate) mod artwork;
