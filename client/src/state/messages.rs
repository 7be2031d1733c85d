//! Inbox and unread-badge state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `unread` is refreshed by the header poller on a fixed interval; the inbox
//! page loads `inbox` on demand and adjusts `unread` locally as messages are
//! marked read so the badge does not lag a full poll period.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::types::Message;

/// Seconds between unread-count polls.
pub const UNREAD_POLL_SECS: u64 = 30;

#[derive(Clone, Debug, Default)]
pub struct MessagesState {
    pub unread: u32,
    pub inbox: Vec<Message>,
    pub loading: bool,
    pub sending: bool,
    pub error: Option<String>,
}

impl MessagesState {
    pub fn set_unread(&mut self, count: u32) {
        self.unread = count;
    }

    /// Apply an inbox fetch for `user_id`, newest first when timestamps are
    /// present. Only messages addressed to the user count as unread.
    pub fn finish_load(&mut self, user_id: &str, result: Result<Vec<Message>, String>) {
        self.loading = false;
        match result {
            Ok(mut inbox) => {
                inbox.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.unread = u32::try_from(inbox.iter().filter(|m| !m.read && m.receiver_id == user_id).count()).unwrap_or(u32::MAX);
                self.inbox = inbox;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Flag `message_id` as read locally. Returns `false` if it was already
    /// read or is unknown, so callers can skip the request.
    pub fn mark_read(&mut self, message_id: &str) -> bool {
        let Some(message) = self.inbox.iter_mut().find(|m| m.id == message_id) else {
            return false;
        };
        if message.read {
            return false;
        }
        message.read = true;
        self.unread = self.unread.saturating_sub(1);
        true
    }

    /// Record a sent message; the backend echo is prepended when present.
    pub fn finish_send(&mut self, result: Result<Option<Message>, String>) {
        self.sending = false;
        match result {
            Ok(Some(message)) => {
                self.inbox.insert(0, message);
                self.error = None;
            }
            Ok(None) => self.error = None,
            Err(e) => self.error = Some(e),
        }
    }
}

/// Badge text for an unread count; hidden at zero, capped at `99+`.
#[must_use]
pub fn unread_badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_owned()),
    }
}
