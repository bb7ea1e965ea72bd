//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates request parsing and query building from the HTTP layer.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod query;
pub mod db;
pub mod seed;
#[cfg(test)]
pub mod test_support;
