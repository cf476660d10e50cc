//! Command/response bridge between DCC tools and the Unreal editor
//!
//! This crate provides:
//! - Wire protocol encoding for scene-editing commands
//! - Response decoding, including rename sentinel/echo disambiguation
//! - A transport abstraction over the editor connection
//! - A client that issues one transport round trip per logical command

pub mod client;
pub mod protocol;
pub mod transport;

pub use client::{ALL_VIEWPORTS, EditorClient};
pub use protocol::{
    CONTENT_ROOT, EditorCommand, NOT_FOUND_SENTINEL, RenameOutcome, object_info_to_string,
    resolved_asset_path,
};
pub use transport::{EditorCapabilities, EditorTransport};
