//! Chat log and the send/receive cycle of the assistant widget.
//!
//! `ChatLog` is the source of truth; the page renders it as a list of bubbles.

use derive_more::{Display, From};
use strum_macros::{AsRefStr, Display as StrumDisplay};
use uuid::Uuid;

use crate::backend::{AudioPlayer, Backend};
use crate::error::ClientError;
use crate::{ChatRequest, ChatResponse};

pub const TYPING_TEXT: &str = "Assistant is typing...";
pub const CHAT_FAILURE_TEXT: &str =
    "Error communicating with the Assistant. Please check the network.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        MessageId(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn row_classes(&self) -> &'static str {
        match self {
            Sender::User => "message-row user-message-row flex justify-end",
            Sender::Assistant => "message-row bot-message-row flex justify-start",
        }
    }

    pub fn bubble_classes(&self) -> &'static str {
        match self {
            Sender::User => "bg-blue-600 text-white",
            Sender::Assistant => "bg-green-400 text-gray-900",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Message,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub kind: EntryKind,
}

impl ChatEntry {
    pub fn is_placeholder(&self) -> bool {
        self.kind == EntryKind::Placeholder
    }
}

/// Append-only message sequence. The typing placeholder is the one entry that
/// may be removed, and at most one exists at any time.
#[derive(Debug, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: impl Into<String>, sender: Sender) -> MessageId {
        self.push(text.into(), sender, EntryKind::Message)
    }

    /// Appends a fresh typing indicator, retiring any older one.
    pub fn push_placeholder(&mut self) -> MessageId {
        if let Some(pos) = self.entries.iter().position(ChatEntry::is_placeholder) {
            log::debug!("Retiring typing placeholder {}", self.entries[pos].id);
            self.entries.remove(pos);
        }
        self.push(TYPING_TEXT.to_string(), Sender::Assistant, EntryKind::Placeholder)
    }

    pub fn remove_placeholder(&mut self, id: MessageId) -> bool {
        match self.entries.iter().position(|e| e.id == id && e.is_placeholder()) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn placeholder(&self) -> Option<&ChatEntry> {
        self.entries.iter().find(|e| e.is_placeholder())
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, text: String, sender: Sender, kind: EntryKind) -> MessageId {
        let id = MessageId::new();
        self.entries.push(ChatEntry { id, sender, text, kind });
        id
    }
}

/// A chat request that has been logged and is waiting for the endpoint.
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub ticket: MessageId,
    pub request: ChatRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    Ignored,
    Replied,
    Failed(ClientError),
}

#[derive(Debug, Default)]
pub struct ChatSession {
    log: ChatLog,
    draft: String,
    in_flight: usize,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Moves the draft into the log. Whitespace-only drafts are ignored and
    /// left untouched.
    pub fn begin(&mut self) -> Option<PendingReply> {
        let message = self.draft.trim().to_string();
        if message.is_empty() {
            return None;
        }
        // Overlapping sends are allowed; replies land in arrival order.
        if self.in_flight > 0 {
            log::warn!("Chat message sent with {} request(s) still pending", self.in_flight);
        }
        self.draft.clear();
        self.log.append(message.clone(), Sender::User);
        let ticket = self.log.push_placeholder();
        self.in_flight += 1;
        Some(PendingReply { ticket, request: ChatRequest { message } })
    }

    /// Swaps the placeholder for the reply (or the fixed error text). Returns
    /// the audio source to play, if the reply carried one.
    pub fn finish(
        &mut self,
        ticket: MessageId,
        outcome: Result<ChatResponse, ClientError>,
    ) -> Option<String> {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.log.remove_placeholder(ticket);
        match outcome {
            Ok(reply) => {
                let audio = reply.audio_source().map(str::to_string);
                self.log.append(reply.response, Sender::Assistant);
                audio
            }
            Err(e) => {
                log::error!("Chat error: {}", e);
                self.log.append(CHAT_FAILURE_TEXT, Sender::Assistant);
                None
            }
        }
    }

    /// Runs one full exchange: log the draft, call the endpoint, render the
    /// reply and try to play its audio.
    pub async fn send<B, P>(&mut self, backend: &B, player: &P) -> SendOutcome
    where
        B: Backend,
        P: AudioPlayer + ?Sized,
    {
        let Some(pending) = self.begin() else {
            return SendOutcome::Ignored;
        };
        match backend.chat(&pending.request).await {
            Ok(reply) => {
                if let Some(audio) = self.finish(pending.ticket, Ok(reply)) {
                    play_reply_audio(player, &audio).await;
                }
                SendOutcome::Replied
            }
            Err(e) => {
                self.finish(pending.ticket, Err(e.clone()));
                SendOutcome::Failed(e)
            }
        }
    }
}

/// Plays a reply's audio. Failures (autoplay blocked, bad source) only reach
/// the console.
pub async fn play_reply_audio<P: AudioPlayer + ?Sized>(player: &P, source: &str) -> bool {
    match player.play(source).await {
        Ok(()) => true,
        Err(e) => {
            log::error!("Audio playback error (user interaction may be required): {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_placeholder_at_a_time() {
        let mut log = ChatLog::new();
        log.append("one", Sender::User);
        let first = log.push_placeholder();
        log.append("two", Sender::User);
        let second = log.push_placeholder();

        assert_eq!(log.entries().iter().filter(|e| e.is_placeholder()).count(), 1);
        assert_eq!(log.placeholder().map(|e| e.id), Some(second));
        assert!(!log.remove_placeholder(first));
        assert!(log.remove_placeholder(second));
        assert!(log.placeholder().is_none());
    }

    #[test]
    fn remove_placeholder_never_removes_messages() {
        let mut log = ChatLog::new();
        let id = log.append("hello", Sender::User);
        assert!(!log.remove_placeholder(id));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn whitespace_draft_is_ignored() {
        let mut session = ChatSession::new();
        session.set_draft("   \t\n");
        assert!(session.begin().is_none());
        assert!(session.log().is_empty());
        assert_eq!(session.draft(), "   \t\n");
    }

    #[test]
    fn begin_trims_clears_draft_and_adds_placeholder() {
        let mut session = ChatSession::new();
        session.set_draft("  hello ");
        let pending = session.begin().unwrap();

        assert_eq!(pending.request.message, "hello");
        assert_eq!(session.draft(), "");
        let entries = session.log().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].sender, entries[0].text.as_str()), (Sender::User, "hello"));
        assert!(entries[1].is_placeholder());
        assert_eq!(entries[1].text, TYPING_TEXT);
        assert_eq!(entries[1].id, pending.ticket);
    }

    #[test]
    fn sender_styles_differ() {
        assert!(Sender::User.row_classes().contains("justify-end"));
        assert!(Sender::Assistant.row_classes().contains("justify-start"));
        assert_ne!(Sender::User.bubble_classes(), Sender::Assistant.bubble_classes());
        assert_eq!(Sender::Assistant.to_string(), "assistant");
    }
}
