//! Transport abstraction over the editor connection
//!
//! The bridge never opens sockets itself; whoever owns the connection
//! implements [`EditorTransport`] and hands it to
//! [`EditorClient`](crate::client::EditorClient). Timeout, reconnect and
//! disconnect signaling stay with the implementation.

use async_trait::async_trait;
use scenelink_core::Result;
use serde::{Deserialize, Serialize};

/// Feature probes reported by the connected editor
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditorCapabilities {
    /// Whether the editor can reparent scene objects
    pub parenting: bool,
}

/// Request/response channel to the editor
///
/// One command string in, one response string out, in order. The bridge
/// issues at most one `send_message` per logical command; serializing
/// access to a shared connection is the implementation's concern.
#[async_trait]
pub trait EditorTransport: Send {
    /// Send one command and wait for the editor's response
    async fn send_message(&mut self, command: &str) -> Result<String>;

    /// Capabilities negotiated for this connection
    fn capabilities(&self) -> EditorCapabilities;
}
