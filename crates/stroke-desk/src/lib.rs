//! stroke-desk library root.
//!
//! A terminal stand-in for the stroke alert form. Exposes the session and
//! command modules so integration tests can drive a session without a
//! terminal.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod session;
