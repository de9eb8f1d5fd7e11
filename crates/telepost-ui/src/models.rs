//! Presentation models shared across screens.

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information.
    Info,
    /// Completed action.
    Success,
    /// Failed action or rejected input.
    Error,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier used for dismissal.
    pub id: u64,
    /// Message shown to the operator.
    pub message: String,
    /// Visual variant.
    pub kind: ToastKind,
}
