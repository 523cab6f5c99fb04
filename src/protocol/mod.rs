//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (V1 - Simple Binary)
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Cmd (1)  │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Commands
//! - 0x01: GET   - Payload: bincode (key, timestamp)
//! - 0x02: PUT   - Payload: bincode Sequence
//! - 0x04: PING  - Payload: empty
//!
//! ### Response Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 0x00: OK           (GET value, PONG)
//! - 0x01: CREATED      (PUT accepted)
//! - 0x02: BAD_REQUEST  (undecodable command)
//! - 0x03: ERROR        (storage failure, message verbatim)

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::{Response, Status, SAVED_MESSAGE};
pub use codec::{
    decode_command, decode_response, encode_command, encode_response, read_command,
    read_frame, read_response, write_command, write_response, HEADER_SIZE, MAX_PAYLOAD_SIZE,
};
