#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;

use std::collections::HashMap;

use anyhow::Result;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::DocumentMetadata;
use super::Message;
use super::Role;

pub const ENVELOPE_VERSION: u32 = 2;

/// The durable snapshot of a session. Transient loading/error flags are
/// deliberately absent so a crash mid-request never sticks across reloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub version: u32,
    pub histories: HashMap<String, Vec<Message>>,
    pub active_document_id: Option<String>,
    pub document: Option<DocumentMetadata>,
    pub messages: Vec<Message>,
}

impl Default for Envelope {
    fn default() -> Envelope {
        return Envelope {
            version: ENVELOPE_VERSION,
            histories: HashMap::new(),
            active_document_id: None,
            document: None,
            messages: vec![],
        };
    }
}

#[derive(Deserialize)]
struct LegacyMessage {
    sender: String,
    text: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    timestamp: Option<i64>,
}

impl LegacyMessage {
    fn migrate(self) -> Message {
        let role = match self.sender.as_str() {
            "ai" => Role::Assistant,
            _ => Role::User,
        };

        return Message {
            id: self.id.unwrap_or_else(Message::create_id),
            role,
            content: self.text,
            timestamp: self
                .timestamp
                .unwrap_or_else(|| return Utc::now().timestamp_millis()),
        };
    }
}

#[derive(Deserialize)]
struct EnvelopeV1 {
    version: u32,
    #[serde(default)]
    messages: Vec<LegacyMessage>,
}

impl EnvelopeV1 {
    fn migrate(self) -> Envelope {
        return Envelope {
            messages: self
                .messages
                .into_iter()
                .map(|msg| return msg.migrate())
                .collect(),
            ..Envelope::default()
        };
    }
}

impl Envelope {
    pub fn encode(&self) -> Result<String> {
        return Ok(serde_json::to_string(self)?);
    }

    /// Decodes a persisted payload, trying the current schema first and then
    /// each known legacy schema in descending version order. Unrecognized or
    /// corrupt payloads degrade to the empty envelope rather than erroring.
    pub fn decode(payload: &str) -> Envelope {
        if let Ok(envelope) = serde_json::from_str::<Envelope>(payload) {
            if envelope.version == ENVELOPE_VERSION {
                return envelope;
            }
        }

        if let Ok(legacy) = serde_json::from_str::<EnvelopeV1>(payload) {
            if legacy.version == 1 {
                tracing::debug!("migrating v1 session payload");
                return legacy.migrate();
            }
        }

        tracing::warn!("unrecognized session payload, starting from an empty session");
        return Envelope::default();
    }
}
