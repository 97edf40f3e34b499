pub(crate) mod fixtures;
pub(crate) mod normalize;
pub(crate) mod status;
pub(crate) mod summary;
pub(crate) mod table;
pub(crate) mod winner;

#[cfg(test)]
pub(crate) use tests_support::*;
