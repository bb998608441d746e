//! inistore — a small INI-style key-value config store.
//!
//! Hexagonal layout: value and table logic in [`domain`], the access trait in
//! [`ports`], the file-backed store in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
