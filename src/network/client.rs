//! TCP Client
//!
//! Blocking client speaking the TempoKV wire protocol.

use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

use crate::error::{Result, TempoError};
use crate::protocol::{read_response, write_command, Command, Response};
use crate::sequence::Sequence;

/// A single connection to a TempoKV server
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Client {
    /// Connect to a server
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .map_err(|e| TempoError::Network(format!("failed to connect: {}", e)))?;
        stream.set_nodelay(true)?;

        Ok(Self {
            reader: BufReader::new(stream.try_clone()?),
            writer: BufWriter::new(stream),
        })
    }

    /// Save a sequence
    pub fn put(&mut self, sequence: &Sequence) -> Result<()> {
        self.request(&Command::Put {
            sequence: sequence.clone(),
        })?;
        Ok(())
    }

    /// Get the value at an exact timestamp (empty if there is none)
    pub fn get(&mut self, key: &str, timestamp: i64) -> Result<String> {
        let response = self.request(&Command::Get {
            key: key.to_string(),
            timestamp,
        })?;
        String::from_utf8(response.payload)
            .map_err(|e| TempoError::Protocol(format!("value is not UTF-8: {}", e)))
    }

    /// Health check
    pub fn ping(&mut self) -> Result<()> {
        self.request(&Command::Ping)?;
        Ok(())
    }

    /// Send a raw command and return the raw response, whatever its status
    pub fn send(&mut self, command: &Command) -> Result<Response> {
        write_command(&mut self.writer, command)?;
        read_response(&mut self.reader)
    }

    /// Send a command, turning non-success statuses into errors
    fn request(&mut self, command: &Command) -> Result<Response> {
        let response = self.send(command)?;
        if !response.status.is_success() {
            return Err(TempoError::Remote(response.text()));
        }
        Ok(response)
    }
}
