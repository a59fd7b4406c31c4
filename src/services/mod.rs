//! Business rules: input validation and orchestration over the repositories.

mod product_service;
mod user_service;

pub use product_service::ProductService;
pub use user_service::UserService;
