#![forbid(unsafe_code)]

pub mod catalog_service;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use catalog_service::CatalogService;
pub use error::{CatalogServiceError, SessionError};
pub use sessions::{QuizSession, SessionProgress, Step};
