pub(crate) mod contour;
pub(crate) mod rectify;
pub(crate) mod slice;
