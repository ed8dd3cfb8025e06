//! Core library for the todo list application
//!
//! This crate contains the shared pieces used by both the persistence
//! endpoint and the terminal UI:
//! - The task model
//! - The server-side backing document
//! - The client-side task stores (remote and local fallback)

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
