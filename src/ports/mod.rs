//! Port traits decoupling callers from the file-backed store.

pub mod config_port;
