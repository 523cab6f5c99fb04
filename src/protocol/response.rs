//! Response definitions
//!
//! Represents responses to clients.

/// Payload of a successful PUT
pub const SAVED_MESSAGE: &str = "sequence saved successfully";

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0x00,
    Created = 0x01,
    BadRequest = 0x02,
    Error = 0x03,
}

impl Status {
    /// Whether the status reports success
    pub fn is_success(self) -> bool {
        matches!(self, Status::Ok | Status::Created)
    }
}

/// A response to send to client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Value for GET, confirmation for PUT, message for errors
    pub payload: Vec<u8>,
}

impl Response {
    /// Create an OK response carrying a value
    pub fn ok(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Status::Ok,
            payload: payload.into(),
        }
    }

    /// Create a CREATED response confirming a save
    pub fn created() -> Self {
        Self {
            status: Status::Created,
            payload: SAVED_MESSAGE.as_bytes().to_vec(),
        }
    }

    /// Create a BAD_REQUEST response
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: Status::BadRequest,
            payload: message.as_bytes().to_vec(),
        }
    }

    /// Create an ERROR response
    pub fn error(message: &str) -> Self {
        Self {
            status: Status::Error,
            payload: message.as_bytes().to_vec(),
        }
    }

    /// Payload as text (lossy for invalid UTF-8)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}
