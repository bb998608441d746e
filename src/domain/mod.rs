//! Core domain types and logic.

pub mod value;
pub mod document;
pub mod error;
