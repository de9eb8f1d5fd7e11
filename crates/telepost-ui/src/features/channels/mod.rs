//! Channel list feature: state machine and list view.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
