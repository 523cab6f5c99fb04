//! Network Module
//!
//! TCP server, client, and the request layer between them and storage.
//!
//! ## Architecture
//! - Single acceptor thread
//! - Worker thread pool for connections
//! - Commands routed through a `Storer`

mod server;
mod connection;
mod client;

pub use server::{Server, ShutdownHandle};
pub use connection::{handle_command, Connection};
pub use client::Client;
