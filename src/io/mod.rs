//! I/O module
//!
//! - `export` - write-only pipe-delimited snapshot of customers and accounts

pub mod export;

pub use export::write_export;
