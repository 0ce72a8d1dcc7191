//! # Posts Core
//!
//! The domain layer of the posts API.
//! This crate contains the entity, field validation and the store port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{RepoError, ValidationError};
