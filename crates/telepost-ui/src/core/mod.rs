//! Core, DOM-free primitives and helpers for the console.
pub mod auth;
pub mod credentials;
pub mod error;
pub mod logic;
pub mod store;
