//! Sync Handlers

pub(crate) mod run;
