#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Telepost channels API.
//!
//! These types mirror the backend contract exactly and are the only place
//! the wire field names are spelled out. The UI converts them into its own
//! presentation rows, so a contract change stays local to this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content rendering mode applied by the backend when publishing posts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Telegram HTML formatting.
    #[default]
    #[serde(rename = "HTML")]
    Html,
    /// Telegram MarkdownV2 formatting.
    #[serde(rename = "MarkdownV2")]
    MarkdownV2,
}

impl ParseMode {
    /// Wire label for this mode, identical to its serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::MarkdownV2 => "MarkdownV2",
        }
    }

    /// All supported modes, in the order the form presents them.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Html, Self::MarkdownV2]
    }

    /// Parse a wire label back into a mode.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "HTML" => Some(Self::Html),
            "MarkdownV2" => Some(Self::MarkdownV2),
            _ => None,
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured auto-posting channel as returned by the backend.
///
/// The three directory paths are assigned server-side when the channel is
/// created and are opaque to the console; they are surfaced read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    /// Backend-assigned identifier, immutable after creation.
    pub id: i64,
    /// Display name, at most 50 characters, immutable after creation.
    pub name: String,
    /// Telegram destination identifier.
    pub chat_id: i64,
    /// Content rendering mode.
    pub parse_mode: ParseMode,
    /// Publishing interval in minutes.
    pub interval: u32,
    /// Whether the backend scheduler currently posts to this channel.
    pub active: bool,
    /// Directory the backend pulls pending posts from.
    pub path_to_source_dir: String,
    /// Directory published posts are moved into.
    pub path_to_done_dir: String,
    /// Directory rejected posts are moved into.
    pub path_to_except_dir: String,
}

/// Write-only projection of [`Channel`] used for create and update payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewChannel {
    /// Display name, at most 50 characters.
    pub name: String,
    /// Telegram destination identifier.
    pub chat_id: i64,
    /// Content rendering mode.
    pub parse_mode: ParseMode,
    /// Publishing interval in minutes.
    pub interval: u32,
}

impl From<&Channel> for NewChannel {
    fn from(channel: &Channel) -> Self {
        Self {
            name: channel.name.clone(),
            chat_id: channel.chat_id,
            parse_mode: channel.parse_mode,
            interval: channel.interval,
        }
    }
}

/// Envelope returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelList {
    /// The full channel collection; the backend does not paginate.
    pub channels: Vec<Channel>,
}

#[cfg(test)]
mod tests {
    use super::{Channel, ChannelList, NewChannel, ParseMode};

    fn backend_channel_json() -> serde_json::Value {
        serde_json::json!({
            "id": 5,
            "name": "News",
            "chat_id": -1_001_234_567_890_i64,
            "parse_mode": "HTML",
            "interval": 240,
            "active": true,
            "path_to_source_dir": "/srv/channels/News/source/",
            "path_to_done_dir": "/srv/channels/News/done/",
            "path_to_except_dir": "/srv/channels/News/except/",
        })
    }

    #[test]
    fn channel_round_trips_backend_shape() {
        let channel: Channel = serde_json::from_value(backend_channel_json()).unwrap();
        assert_eq!(channel.id, 5);
        assert_eq!(channel.parse_mode, ParseMode::Html);
        assert_eq!(channel.interval, 240);
        assert_eq!(serde_json::to_value(&channel).unwrap(), backend_channel_json());
    }

    #[test]
    fn new_channel_serializes_without_server_fields() {
        let payload = NewChannel {
            name: "News".into(),
            chat_id: 100,
            parse_mode: ParseMode::MarkdownV2,
            interval: 60,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "News",
                "chat_id": 100,
                "parse_mode": "MarkdownV2",
                "interval": 60,
            })
        );
    }

    #[test]
    fn write_projection_drops_id_and_paths() {
        let channel: Channel = serde_json::from_value(backend_channel_json()).unwrap();
        let payload = NewChannel::from(&channel);
        assert_eq!(payload.name, channel.name);
        assert_eq!(payload.chat_id, channel.chat_id);
        assert_eq!(payload.interval, channel.interval);
    }

    #[test]
    fn parse_mode_labels_round_trip() {
        for mode in ParseMode::all() {
            assert_eq!(ParseMode::from_label(mode.as_str()), Some(mode));
        }
        assert_eq!(ParseMode::from_label("Markdown"), None);
        assert_eq!(ParseMode::default(), ParseMode::Html);
    }

    #[test]
    fn list_envelope_uses_channels_key() {
        let list: ChannelList = serde_json::from_value(serde_json::json!({
            "channels": [backend_channel_json()],
        }))
        .unwrap();
        assert_eq!(list.channels.len(), 1);
        assert_eq!(list.channels[0].name, "News");
    }
}
