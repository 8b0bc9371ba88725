pub mod client;
pub mod types;

pub use client::{ApiError, CatalogClient, CatalogSource};
pub use types::{Book, BookListResponse};
