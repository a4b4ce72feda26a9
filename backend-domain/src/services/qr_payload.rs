// QR payload codec
// The payload names the ticket and its event; the owner is left out so a
// transferred ticket keeps its code. `sig` is an HMAC-SHA256 over
// `ticketId|eventId` keyed with the deployment's QR secret.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const PAYLOAD_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub v: u32,
    pub ticket_id: String,
    pub event_id: String,
    pub sig: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QrPayloadError {
    #[error("qr payload is not valid json")]
    Malformed,
    #[error("unsupported qr payload version {0}")]
    Version(u32),
    #[error("qr payload signature mismatch")]
    Signature,
    #[error("qr signing secret is not configured")]
    Secret,
}

impl QrPayload {
    pub fn new(secret: &str, ticket_id: &str, event_id: &str) -> Result<Self, QrPayloadError> {
        let mac = keyed_mac(secret, ticket_id, event_id)?;
        Ok(Self {
            v: PAYLOAD_VERSION,
            ticket_id: ticket_id.to_string(),
            event_id: event_id.to_string(),
            sig: to_hex(&mac.finalize().into_bytes()),
        })
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(raw: &str, secret: &str) -> Result<Self, QrPayloadError> {
        let payload: QrPayload =
            serde_json::from_str(raw.trim()).map_err(|_| QrPayloadError::Malformed)?;
        if payload.v != PAYLOAD_VERSION {
            return Err(QrPayloadError::Version(payload.v));
        }
        if payload.ticket_id.trim().is_empty() {
            return Err(QrPayloadError::Signature);
        }
        let sig = from_hex(&payload.sig).ok_or(QrPayloadError::Signature)?;
        keyed_mac(secret, &payload.ticket_id, &payload.event_id)?
            .verify_slice(&sig)
            .map_err(|_| QrPayloadError::Signature)?;
        Ok(payload)
    }
}

fn keyed_mac(secret: &str, ticket_id: &str, event_id: &str) -> Result<HmacSha256, QrPayloadError> {
    if secret.is_empty() {
        return Err(QrPayloadError::Secret);
    }
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| QrPayloadError::Secret)?;
    mac.update(format!("{}|{}", ticket_id, event_id).as_bytes());
    Ok(mac)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn from_hex(raw: &str) -> Option<Vec<u8>> {
    if raw.len() % 2 != 0 || !raw.is_ascii() {
        return None;
    }
    (0..raw.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&raw[i..i + 2], 16).ok())
        .collect()
}
