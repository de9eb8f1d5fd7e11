//! Channel create/edit feature: form controller and view.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
