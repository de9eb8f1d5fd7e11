//! App-wide yewdux store.
//!
//! # Design
//! - One store, two slices: the channel list machine and the toast queue.
//! - All mutation goes through the pure transition functions in
//!   `features::channels::state` and the toast helpers below, so the store
//!   itself stays a dumb container.

use crate::features::channels::state::ChannelsState;
use crate::models::{Toast, ToastKind};
use yewdux::store::Store;

/// Number of toasts kept on screen before the oldest is dropped.
const TOAST_LIMIT: usize = 4;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Channel list, filter, pagination, and selection state.
    pub channels: ChannelsState,
    /// Pending toast notifications, oldest first.
    pub toasts: Vec<Toast>,
    /// Next toast identifier.
    next_toast: u64,
}

/// Queue a toast, evicting the oldest past the display limit.
pub fn push_toast(store: &mut AppStore, kind: ToastKind, message: impl Into<String>) {
    store.next_toast += 1;
    store.toasts.push(Toast {
        id: store.next_toast,
        message: message.into(),
        kind,
    });
    if store.toasts.len() > TOAST_LIMIT {
        let drain = store.toasts.len() - TOAST_LIMIT;
        store.toasts.drain(0..drain);
    }
}

/// Remove a toast by id; unknown ids are ignored.
pub fn dismiss_toast(store: &mut AppStore, id: u64) {
    store.toasts.retain(|toast| toast.id != id);
}
