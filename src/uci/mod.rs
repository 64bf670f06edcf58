//! UCI (Universal Chess Interface) front end
//!
//! Lets a chess GUI drive the fixed-depth search over stdin/stdout.

pub mod protocol;

pub use protocol::UCI;
