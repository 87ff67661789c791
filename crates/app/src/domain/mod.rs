//! Otomax Domain Concerns

pub mod categories;
pub mod deposits;
pub mod methods;
pub mod sub_categories;
pub mod sync;
