#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Telepost channel administration console.
//!
//! The crate is split so that everything with actual behavior — credential
//! lifecycle, the list/selection state machine, the form gate, endpoint
//! construction — is DOM-free and unit-tested on the native target. The Yew
//! rendering layer, router, HTTP client, and browser storage are compiled
//! only for wasm32.

pub mod core;
pub mod features;
pub mod models;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
