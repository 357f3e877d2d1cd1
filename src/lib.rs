//! Session-cookie authentication service.
//!
//! Register and login issue a signed, time-limited token delivered as an
//! `HttpOnly` cookie; passwords are stored as salted Argon2 hashes.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod state;
