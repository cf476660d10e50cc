//! Scene object descriptors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, SceneLinkError};

/// Ordered XYZ triple used for position, rotation and scale
pub type Vector3 = [f64; 3];

/// Attribute key carrying an object's engine asset reference
pub const ASSET_PATH_ATTR: &str = "asset_path";

/// Build a [`Vector3`] from an arbitrary-length slice
///
/// DCC plugins hand transform components over as plain lists; anything
/// other than exactly three components is rejected before it can reach
/// the encoder.
pub fn vector3_from_slice(components: &[f64]) -> Result<Vector3> {
    match components {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(SceneLinkError::InvalidArgument(format!(
            "expected 3 vector components, got {}",
            components.len()
        ))),
    }
}

/// Description of one scene object to be created or manipulated
///
/// Built by the scene-traversal side immediately before encoding and not
/// retained afterwards. Type fields are pass-through; the encoder only
/// consumes `name`, the transform triples, and the `asset_path` attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Object name inside the target scene's namespace
    pub name: String,

    /// Native type reported by the DCC tool
    pub type_internal: String,

    /// Normalized cross-tool type
    pub type_common: String,

    /// World position
    #[serde(default = "zero_vector")]
    pub position: Vector3,

    /// Euler rotation
    #[serde(default = "zero_vector")]
    pub rotation: Vector3,

    /// Per-axis scale, unity by default
    #[serde(default = "unit_vector")]
    pub scale: Vector3,

    /// Out-of-band metadata; unknown keys pass through untouched
    #[serde(default)]
    pub attrs: HashMap<String, serde_json::Value>,
}

fn zero_vector() -> Vector3 {
    [0.0, 0.0, 0.0]
}

fn unit_vector() -> Vector3 {
    [1.0, 1.0, 1.0]
}

impl ObjectInfo {
    /// Create a descriptor with a default transform and no attributes
    pub fn new(
        name: impl Into<String>,
        type_internal: impl Into<String>,
        type_common: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_internal: type_internal.into(),
            type_common: type_common.into(),
            position: zero_vector(),
            rotation: zero_vector(),
            scale: unit_vector(),
            attrs: HashMap::new(),
        }
    }

    /// Set position, rotation and scale in one call
    pub fn with_transform(mut self, position: Vector3, rotation: Vector3, scale: Vector3) -> Self {
        self.position = position;
        self.rotation = rotation;
        self.scale = scale;
        self
    }

    /// Attach a metadata attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Asset reference carried in `attrs`, if present
    ///
    /// Non-string values under the key are treated as absent.
    pub fn asset_path(&self) -> Option<&str> {
        self.attrs.get(ASSET_PATH_ATTR).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let info = ObjectInfo::new("test_name", "mesh", "mesh");
        assert_eq!(info.position, [0.0, 0.0, 0.0]);
        assert_eq!(info.rotation, [0.0, 0.0, 0.0]);
        assert_eq!(info.scale, [1.0, 1.0, 1.0]);
        assert!(info.attrs.is_empty());
    }

    #[test]
    fn test_asset_path_attr() {
        let info = ObjectInfo::new("obj", "mesh", "mesh").with_attr(ASSET_PATH_ATTR, "some_path");
        assert_eq!(info.asset_path(), Some("some_path"));
    }

    #[test]
    fn test_asset_path_ignores_non_string() {
        let info = ObjectInfo::new("obj", "mesh", "mesh").with_attr(ASSET_PATH_ATTR, 42);
        assert_eq!(info.asset_path(), None);
    }

    #[test]
    fn test_unknown_attrs_pass_through() {
        let info = ObjectInfo::new("obj", "mesh", "mesh").with_attr("custom_key", "custom_value");
        assert_eq!(info.asset_path(), None);
        assert_eq!(
            info.attrs.get("custom_key").and_then(|v| v.as_str()),
            Some("custom_value")
        );
    }

    #[test]
    fn test_vector3_from_slice() {
        assert_eq!(vector3_from_slice(&[1.0, 2.0, 3.0]).unwrap(), [1.0, 2.0, 3.0]);

        let err = vector3_from_slice(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, SceneLinkError::InvalidArgument(_)));

        let err = vector3_from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert!(matches!(err, SceneLinkError::InvalidArgument(_)));
    }
}
