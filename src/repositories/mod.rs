//! Repositories for database operations

pub mod catalog;
pub mod user;

pub use catalog::CatalogRepository;
pub use user::UserRepository;
