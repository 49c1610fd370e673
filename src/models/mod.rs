//! Domain models and request/response payloads

pub mod catalog;
pub mod user;

pub use catalog::{Category, Product, ProductsQuery};
pub use user::{LoginRequest, RegisterRequest, UpdateProfileRequest, User, UserResponse};
