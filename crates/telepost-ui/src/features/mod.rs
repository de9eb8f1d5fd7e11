//! Feature surfaces: one module per screen, pure state beside the view.
pub mod channel_form;
pub mod channels;
