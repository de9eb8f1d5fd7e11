//! Form controller for creating and editing channels.
//!
//! The controller is a plain value; the view clones it, applies one
//! transition, and stores it back. Submission never reaches the network
//! while the connectivity gate is closed: a channel's destination must be
//! verified reachable before the backend is asked to persist it. A channel
//! loaded for edit starts with the gate open — its destination was verified
//! when it was created — but any edit to the chat id closes it again.

use crate::core::logic::{parse_chat_id, parse_interval};
use telepost_api_models::{Channel, NewChannel, ParseMode};
use thiserror::Error;

/// Maximum channel name length accepted by the backend.
pub const NAME_MAX_LEN: usize = 50;

/// Default publishing interval offered for new channels, in minutes.
pub const DEFAULT_INTERVAL: &str = "240";

/// Whether the form creates a new channel or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// No id bound yet; submission creates.
    Create,
    /// Bound to an existing channel; submission updates.
    Edit(i64),
}

/// Outcome of the explicit connectivity check, reflected on the chat id field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChatCheck {
    /// Not checked yet, or invalidated by a chat id edit.
    #[default]
    Unchecked,
    /// The backend confirmed the destination is reachable.
    Verified,
    /// The backend could not reach the destination.
    Failed,
}

impl ChatCheck {
    /// Whether the gate is open for submission.
    #[must_use]
    pub const fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

/// Client-side reasons a submission is rejected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// The connectivity check has not succeeded for the current chat id.
    #[error("verify the channel destination before saving")]
    Unverified,
    /// The name field is empty.
    #[error("a channel name is required")]
    MissingName,
    /// The name exceeds the backend limit.
    #[error("the channel name is limited to 50 characters")]
    NameTooLong,
    /// The chat id field does not hold an integer.
    #[error("the chat id must be numeric")]
    BadChatId,
    /// The interval field does not hold a positive minute count.
    #[error("the interval must be a positive number of minutes")]
    BadInterval,
}

/// Editable form fields plus the connectivity gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    /// Create or edit mode.
    pub mode: FormMode,
    /// Channel name; immutable once in edit mode.
    pub name: String,
    /// Raw chat id field, coerced to numeric form on check and submit.
    pub chat_id: String,
    /// Selected content rendering mode.
    pub parse_mode: ParseMode,
    /// Raw interval field, in minutes.
    pub interval: String,
    /// Connectivity gate state.
    pub check: ChatCheck,
}

impl FormState {
    /// Blank form for creating a channel.
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            chat_id: String::new(),
            parse_mode: ParseMode::default(),
            interval: DEFAULT_INTERVAL.to_string(),
            check: ChatCheck::Unchecked,
        }
    }

    /// Form pre-filled from a loaded channel.
    #[must_use]
    pub fn edit(channel: &Channel) -> Self {
        Self {
            mode: FormMode::Edit(channel.id),
            name: channel.name.clone(),
            chat_id: channel.chat_id.to_string(),
            parse_mode: channel.parse_mode,
            interval: channel.interval.to_string(),
            check: ChatCheck::Verified,
        }
    }

    /// Whether the form edits an existing channel.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Update the name field; ignored in edit mode, where the name is fixed.
    pub fn set_name(&mut self, name: String) {
        if !self.is_edit() {
            self.name = name;
        }
    }

    /// Update the chat id field, closing the connectivity gate.
    pub fn set_chat_id(&mut self, chat_id: String) {
        if chat_id != self.chat_id {
            self.chat_id = chat_id;
            self.check = ChatCheck::Unchecked;
        }
    }

    /// Update the rendering mode.
    pub const fn set_parse_mode(&mut self, mode: ParseMode) {
        self.parse_mode = mode;
    }

    /// Update the interval field.
    pub fn set_interval(&mut self, interval: String) {
        self.interval = interval;
    }

    /// The numeric chat id the check button should probe, if coercible.
    #[must_use]
    pub fn check_target(&self) -> Option<i64> {
        parse_chat_id(&self.chat_id)
    }

    /// Record the outcome of an explicit connectivity check.
    pub const fn record_check(&mut self, reachable: bool) {
        self.check = if reachable {
            ChatCheck::Verified
        } else {
            ChatCheck::Failed
        };
    }

    /// Validate the form and build the write payload.
    ///
    /// # Errors
    /// Returns the first [`FormError`] that blocks submission; no network
    /// call may be issued in that case.
    pub fn submit_payload(&self) -> Result<NewChannel, FormError> {
        if !self.check.is_verified() {
            return Err(FormError::Unverified);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(FormError::NameTooLong);
        }
        let chat_id = parse_chat_id(&self.chat_id).ok_or(FormError::BadChatId)?;
        let interval = parse_interval(&self.interval).ok_or(FormError::BadInterval)?;
        Ok(NewChannel {
            name: name.to_string(),
            chat_id,
            parse_mode: self.parse_mode,
            interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatCheck, FormError, FormMode, FormState};
    use telepost_api_models::{Channel, NewChannel, ParseMode};

    fn loaded_channel() -> Channel {
        Channel {
            id: 5,
            name: "News".into(),
            chat_id: 100,
            parse_mode: ParseMode::Html,
            interval: 240,
            active: true,
            path_to_source_dir: "/srv/channels/News/source/".into(),
            path_to_done_dir: "/srv/channels/News/done/".into(),
            path_to_except_dir: "/srv/channels/News/except/".into(),
        }
    }

    fn filled_create() -> FormState {
        let mut form = FormState::create();
        form.set_name("Daily".into());
        form.set_chat_id("-1001".into());
        form.set_interval("60".into());
        form
    }

    #[test]
    fn create_defaults_match_the_blank_form() {
        let form = FormState::create();
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.parse_mode, ParseMode::Html);
        assert_eq!(form.interval, "240");
        assert_eq!(form.check, ChatCheck::Unchecked);
    }

    #[test]
    fn unverified_create_never_produces_a_payload() {
        let form = filled_create();
        assert_eq!(form.submit_payload(), Err(FormError::Unverified));
    }

    #[test]
    fn verified_create_coerces_numeric_fields() {
        let mut form = filled_create();
        form.record_check(true);
        let payload = form.submit_payload().unwrap();
        assert_eq!(
            payload,
            NewChannel {
                name: "Daily".into(),
                chat_id: -1001,
                parse_mode: ParseMode::Html,
                interval: 60,
            }
        );
    }

    #[test]
    fn editing_chat_id_closes_the_gate() {
        let mut form = filled_create();
        form.record_check(true);
        form.set_chat_id("-1002".into());
        assert_eq!(form.check, ChatCheck::Unchecked);
        assert_eq!(form.submit_payload(), Err(FormError::Unverified));
        // Re-setting the identical value is not an edit.
        form.record_check(true);
        form.set_chat_id("-1002".into());
        assert_eq!(form.check, ChatCheck::Verified);
    }

    #[test]
    fn failed_check_keeps_the_gate_closed() {
        let mut form = filled_create();
        form.record_check(false);
        assert_eq!(form.check, ChatCheck::Failed);
        assert_eq!(form.submit_payload(), Err(FormError::Unverified));
    }

    #[test]
    fn edit_prefills_and_submits_unaltered() {
        let form = FormState::edit(&loaded_channel());
        assert_eq!(form.mode, FormMode::Edit(5));
        assert_eq!(form.chat_id, "100");
        let payload = form.submit_payload().unwrap();
        assert_eq!(
            payload,
            NewChannel {
                name: "News".into(),
                chat_id: 100,
                parse_mode: ParseMode::Html,
                interval: 240,
            }
        );
    }

    #[test]
    fn edit_mode_keeps_the_name_fixed() {
        let mut form = FormState::edit(&loaded_channel());
        form.set_name("Renamed".into());
        assert_eq!(form.name, "News");
    }

    #[test]
    fn invalid_fields_block_before_any_network_call() {
        let mut nameless = FormState::create();
        nameless.set_chat_id("100".into());
        nameless.record_check(true);
        assert_eq!(nameless.submit_payload(), Err(FormError::MissingName));

        let mut long = filled_create();
        long.set_name("x".repeat(51));
        long.record_check(true);
        assert_eq!(long.submit_payload(), Err(FormError::NameTooLong));

        let mut bad_chat = filled_create();
        bad_chat.set_chat_id("abc".into());
        bad_chat.record_check(true);
        assert_eq!(bad_chat.submit_payload(), Err(FormError::BadChatId));
        assert_eq!(bad_chat.check_target(), None);

        let mut bad_interval = filled_create();
        bad_interval.set_interval("0".into());
        bad_interval.record_check(true);
        assert_eq!(bad_interval.submit_payload(), Err(FormError::BadInterval));
    }
}
