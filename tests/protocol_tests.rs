//! Codec Tests
//!
//! Tests for command and response encoding/decoding.

use std::io::Cursor;

use tempokv::protocol::{
    decode_command, decode_response, encode_command, encode_response, read_command,
    read_response, write_command, write_response, Command, Response, Status, HEADER_SIZE,
    MAX_PAYLOAD_SIZE, SAVED_MESSAGE,
};
use tempokv::{Sequence, TempoError};

// =============================================================================
// Command Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_encode_decode_get() {
    let cmd = Command::Get {
        key: "my-key".to_string(),
        timestamp: 101,
    };
    let encoded = encode_command(&cmd).unwrap();
    assert_eq!(encoded[0], 0x01);

    assert_eq!(decode_command(&encoded).unwrap(), cmd);
}

#[test]
fn test_encode_decode_put() {
    let cmd = Command::Put {
        sequence: Sequence::new("my-key", -7, "value, with \"quotes\"\n"),
    };
    let encoded = encode_command(&cmd).unwrap();
    assert_eq!(encoded[0], 0x02);

    assert_eq!(decode_command(&encoded).unwrap(), cmd);
}

#[test]
fn test_encode_decode_ping() {
    let encoded = encode_command(&Command::Ping).unwrap();
    assert_eq!(encoded, vec![0x04, 0, 0, 0, 0]);

    assert_eq!(decode_command(&encoded).unwrap(), Command::Ping);
}

#[test]
fn test_decode_unknown_command_type() {
    let result = decode_command(&[0x03, 0, 0, 0, 0]);
    assert!(matches!(result, Err(TempoError::Protocol(ref m)) if m.contains("0x03")));
}

#[test]
fn test_decode_ping_with_payload_fails() {
    assert!(decode_command(&[0x04, 0, 0, 0, 1, 0xff]).is_err());
}

#[test]
fn test_decode_truncated_header() {
    assert!(matches!(
        decode_command(&[0x01, 0, 0]),
        Err(TempoError::Protocol(_))
    ));
}

#[test]
fn test_decode_truncated_payload() {
    let encoded = encode_command(&Command::Get {
        key: "key".to_string(),
        timestamp: 1,
    })
    .unwrap();

    assert!(decode_command(&encoded[..encoded.len() - 1]).is_err());
}

#[test]
fn test_decode_garbage_put_payload() {
    let mut message = vec![0x02, 0, 0, 0, 3];
    message.extend_from_slice(&[1, 2, 3]);

    assert!(matches!(
        decode_command(&message),
        Err(TempoError::Protocol(ref m)) if m.starts_with("PUT command")
    ));
}

#[test]
fn test_decode_oversized_payload_rejected() {
    let len = (MAX_PAYLOAD_SIZE + 1).to_be_bytes();
    let header = [0x01, len[0], len[1], len[2], len[3]];

    assert!(decode_command(&header).is_err());
    assert!(read_command(&mut Cursor::new(header.to_vec())).is_err());
}

// =============================================================================
// Response Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_encode_decode_responses() {
    let responses = [
        Response::ok("My Value"),
        Response::ok(""),
        Response::created(),
        Response::bad_request("bad frame"),
        Response::error("key not found: missing-key"),
    ];

    for response in responses {
        let encoded = encode_response(&response);
        assert_eq!(encoded.len(), HEADER_SIZE + response.payload.len());
        assert_eq!(decode_response(&encoded).unwrap(), response);
    }
}

#[test]
fn test_response_constructors() {
    assert_eq!(Response::created().status, Status::Created);
    assert_eq!(Response::created().text(), SAVED_MESSAGE);
    assert!(Response::ok("").status.is_success());
    assert!(!Response::bad_request("x").status.is_success());
    assert!(!Response::error("x").status.is_success());
}

#[test]
fn test_decode_unknown_status() {
    assert!(decode_response(&[0x09, 0, 0, 0, 0]).is_err());
}

// =============================================================================
// Stream I/O Tests
// =============================================================================

#[test]
fn test_stream_commands_back_to_back() {
    let commands = [
        Command::Put {
            sequence: Sequence::new("k", 1, "v"),
        },
        Command::Get {
            key: "k".to_string(),
            timestamp: 1,
        },
        Command::Ping,
    ];

    let mut buf = Vec::new();
    for cmd in &commands {
        write_command(&mut buf, cmd).unwrap();
    }

    let mut cursor = Cursor::new(buf);
    for cmd in &commands {
        assert_eq!(&read_command(&mut cursor).unwrap(), cmd);
    }

    match read_command(&mut cursor) {
        Err(TempoError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("Expected EOF, got {:?}", other),
    }
}

#[test]
fn test_stream_response_round_trip() {
    let mut buf = Vec::new();
    write_response(&mut buf, &Response::ok("value")).unwrap();
    write_response(&mut buf, &Response::error("boom")).unwrap();

    let mut cursor = Cursor::new(buf);
    assert_eq!(read_response(&mut cursor).unwrap(), Response::ok("value"));
    assert_eq!(read_response(&mut cursor).unwrap(), Response::error("boom"));
}
