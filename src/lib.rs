//! User Directory API
//!
//! A small HTTP service managing an in-memory collection of user records:
//! - Create, list, fetch, partially update and delete users
//! - Email validation at the request boundary
//! - Hello-world and item echo example endpoints

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
