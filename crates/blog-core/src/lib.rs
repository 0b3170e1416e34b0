//! # Blog Core
//!
//! The domain layer of the blog posts service.
//! This crate contains the `BlogPost` entity, its validation rules, and the
//! repository ports; it has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{Author, BlogPost};
pub use error::{DomainError, RepoError};
