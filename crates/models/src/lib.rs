pub mod errors;
pub mod db;
pub mod validation;
pub mod animal;
pub mod car;
