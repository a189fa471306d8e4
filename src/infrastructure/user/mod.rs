//! User infrastructure module
//!
//! This module provides the in-memory user repository and the directory
//! service implementing the user lifecycle on top of it.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::UserDirectory;
