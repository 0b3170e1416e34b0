//! # Blog Shared
//!
//! Wire types shared between the API server and its clients (including the
//! integration test suites).

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
