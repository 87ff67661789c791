//! Catalog sync, payments and persistence for the Otomax top-up backend.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod integrations;
pub mod uuids;

#[cfg(test)]
mod test;
