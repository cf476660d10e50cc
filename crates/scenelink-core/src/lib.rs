//! # scenelink-core
//!
//! Core types for the SceneLink DCC-to-editor protocol.
//!
//! This crate provides the foundational types used across the SceneLink
//! bridge crates:
//! - Scene object descriptors and transform triples
//! - Error types

pub mod error;
pub mod object;

pub use error::{Result, SceneLinkError};
pub use object::{ASSET_PATH_ATTR, ObjectInfo, Vector3, vector3_from_slice};
