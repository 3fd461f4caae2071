//! CLI command implementations

pub(crate) mod build;
pub(crate) mod collect;
pub(crate) mod common;
pub(crate) mod export;
pub(crate) mod shorten;
