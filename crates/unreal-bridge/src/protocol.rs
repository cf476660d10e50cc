//! Wire protocol for DCC <-> editor communication
//!
//! Commands are single-line text with a case-sensitive verb first and
//! space-separated fields. The one multi-line command is `AddActorBatch`,
//! which sends a header line plus one line per object as a single message.
//!
//! Scene-object transforms are rendered with fixed 6-decimal components;
//! camera transforms keep plain `Display` formatting. The editor answers
//! every command with one response line, but only `RenameObject` and
//! `GetFreeName` responses carry meaning.

use scenelink_core::{ObjectInfo, Result, SceneLinkError, Vector3};

/// Virtual content root under which all asset references are resolved
pub const CONTENT_ROOT: &str = "/Game";

/// Sentinel response for a rename whose source object does not exist
pub const NOT_FOUND_SENTINEL: &str = "NotFound";

/// Commands sent from the DCC side to the editor
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Move, rotate and scale one scene object
    TransformObject {
        name: String,
        translation: Vector3,
        rotation: Vector3,
        scale: Vector3,
    },

    /// Drive the viewport camera
    ///
    /// Camera state is not a scene object; its components are emitted with
    /// their natural formatting rather than fixed precision.
    TransformCamera {
        x: f64,
        y: f64,
        z: f64,
        pitch: f64,
        yaw: f64,
        roll: f64,
        viewport: String,
    },

    /// Delete whatever the editor currently has selected
    DeleteSelected,

    /// Delete one object by name
    DeleteObject { name: String },

    /// Rename an object; the editor echoes the name it actually assigned
    RenameObject { old_name: String, new_name: String },

    /// Ask the editor for an unused name derived from `base_name`
    GetFreeName { base_name: String },

    /// Attach one object under another in the scene hierarchy
    ParentChildTo {
        child_name: String,
        parent_name: String,
    },

    /// Spawn many actors in a single round trip
    AddActorBatch { objects: Vec<ObjectInfo> },
}

impl EditorCommand {
    /// Render the command into its wire string
    ///
    /// Rendering is deterministic: the same command always yields the same
    /// bytes. Only structural problems (an empty required name) fail;
    /// numeric ranges are never validated here.
    pub fn encode(&self) -> Result<String> {
        match self {
            EditorCommand::TransformObject {
                name,
                translation,
                rotation,
                scale,
            } => {
                require_name("name", name)?;
                Ok(format!(
                    "TransformObject {} {}",
                    name,
                    format_trs(*translation, *rotation, *scale)
                ))
            }

            EditorCommand::TransformCamera {
                x,
                y,
                z,
                pitch,
                yaw,
                roll,
                viewport,
            } => Ok(format!(
                "TransformCamera {} {} {} {} {} {} {}",
                x, y, z, pitch, yaw, roll, viewport
            )),

            EditorCommand::DeleteSelected => Ok("DeleteSelected".to_string()),

            EditorCommand::DeleteObject { name } => {
                require_name("name", name)?;
                Ok(format!("DeleteObject {}", name))
            }

            EditorCommand::RenameObject { old_name, new_name } => {
                require_name("old_name", old_name)?;
                require_name("new_name", new_name)?;
                Ok(format!("RenameObject {} {}", old_name, new_name))
            }

            EditorCommand::GetFreeName { base_name } => {
                require_name("base_name", base_name)?;
                Ok(format!("GetFreeName {}", base_name))
            }

            EditorCommand::ParentChildTo {
                child_name,
                parent_name,
            } => {
                require_name("child_name", child_name)?;
                require_name("parent_name", parent_name)?;
                Ok(format!("ParentChildTo {} {}", child_name, parent_name))
            }

            EditorCommand::AddActorBatch { objects } => {
                let mut lines = Vec::with_capacity(objects.len() + 1);
                lines.push("AddActorBatch".to_string());
                for info in objects {
                    lines.push(object_info_to_string(info)?);
                }
                Ok(lines.join("\n"))
            }
        }
    }
}

/// Render the `<asset_path> <name> T=... R=... S=...` fragment shared by
/// single and batch actor creation
pub fn object_info_to_string(info: &ObjectInfo) -> Result<String> {
    require_name("name", &info.name)?;
    Ok(format!(
        "{} {} {}",
        resolved_asset_path(info),
        info.name,
        format_trs(info.position, info.rotation, info.scale)
    ))
}

/// Resolve an object's asset reference against the content root
///
/// `attrs["asset_path"]` is appended verbatim; no separator or relative
/// component normalization is attempted. Objects without an asset
/// reference resolve to the bare content root.
pub fn resolved_asset_path(info: &ObjectInfo) -> String {
    match info.asset_path() {
        Some(path) => format!("{}/{}", CONTENT_ROOT, path),
        None => CONTENT_ROOT.to_string(),
    }
}

fn require_name(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SceneLinkError::InvalidArgument(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

fn format_trs(t: Vector3, r: Vector3, s: Vector3) -> String {
    format!(
        "{} {} {}",
        format_vector("T", t),
        format_vector("R", r),
        format_vector("S", s)
    )
}

/// Scene-object components always carry 6 fractional digits
fn format_vector(tag: &str, v: Vector3) -> String {
    format!("{}=({:.6} {:.6} {:.6})", tag, v[0], v[1], v[2])
}

/// Result of a rename request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Whether the editor assigned exactly the requested name
    pub honored: bool,

    /// Name the editor picked instead, when it differs from the request
    pub actual_name: Option<String>,
}

impl RenameOutcome {
    /// Interpret the editor's response to `RenameObject`
    ///
    /// Cases are checked in order: the `NotFound` sentinel, an exact echo
    /// of the requested name, anything else as the actually-assigned name.
    /// An editor could in theory hold an object literally named
    /// `NotFound`; the sentinel wins over the echo.
    pub fn from_response(requested: &str, response: &str) -> Self {
        if response == NOT_FOUND_SENTINEL {
            return Self {
                honored: false,
                actual_name: None,
            };
        }
        if response == requested {
            return Self {
                honored: true,
                actual_name: None,
            };
        }
        Self {
            honored: false,
            actual_name: Some(response.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenelink_core::ASSET_PATH_ATTR;

    #[test]
    fn test_transform_object() {
        let cmd = EditorCommand::TransformObject {
            name: "name".to_string(),
            translation: [1.0, 2.0, 3.0],
            rotation: [4.0, 5.0, 6.0],
            scale: [7.0, 8.0, 9.0],
        };

        assert_eq!(
            cmd.encode().unwrap(),
            "TransformObject name \
             T=(1.000000 2.000000 3.000000) \
             R=(4.000000 5.000000 6.000000) \
             S=(7.000000 8.000000 9.000000)"
        );
    }

    #[test]
    fn test_transform_object_fixed_precision() {
        // Whole numbers and long fractions both land on 6 digits
        let cmd = EditorCommand::TransformObject {
            name: "obj".to_string(),
            translation: [1.0, 0.5, 123.456789123],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        };

        let wire = cmd.encode().unwrap();
        assert!(wire.contains("T=(1.000000 0.500000 123.456789)"));
    }

    #[test]
    fn test_transform_camera_plain_formatting() {
        let cmd = EditorCommand::TransformCamera {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            pitch: 4.0,
            yaw: 5.0,
            roll: 6.0,
            viewport: "All".to_string(),
        };

        assert_eq!(cmd.encode().unwrap(), "TransformCamera 1 2 3 4 5 6 All");
    }

    #[test]
    fn test_delete_commands() {
        assert_eq!(EditorCommand::DeleteSelected.encode().unwrap(), "DeleteSelected");
        assert_eq!(
            EditorCommand::DeleteObject {
                name: "name".to_string()
            }
            .encode()
            .unwrap(),
            "DeleteObject name"
        );
    }

    #[test]
    fn test_rename_and_free_name() {
        assert_eq!(
            EditorCommand::RenameObject {
                old_name: "old".to_string(),
                new_name: "new".to_string()
            }
            .encode()
            .unwrap(),
            "RenameObject old new"
        );
        assert_eq!(
            EditorCommand::GetFreeName {
                base_name: "name".to_string()
            }
            .encode()
            .unwrap(),
            "GetFreeName name"
        );
    }

    #[test]
    fn test_parent_child_to() {
        let cmd = EditorCommand::ParentChildTo {
            child_name: "child".to_string(),
            parent_name: "parent".to_string(),
        };
        assert_eq!(cmd.encode().unwrap(), "ParentChildTo child parent");
    }

    #[test]
    fn test_empty_name_rejected() {
        let cmd = EditorCommand::DeleteObject {
            name: String::new(),
        };
        assert!(matches!(
            cmd.encode().unwrap_err(),
            SceneLinkError::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_object_info_to_string_defaults() {
        let info = ObjectInfo::new("test_name", "test_type_internal", "test_type_common")
            .with_attr("test_key", "test_value");

        assert_eq!(
            object_info_to_string(&info).unwrap(),
            "/Game test_name \
             T=(0.000000 0.000000 0.000000) \
             R=(0.000000 0.000000 0.000000) \
             S=(1.000000 1.000000 1.000000)"
        );
    }

    #[test]
    fn test_object_info_to_string_with_asset_path() {
        let info = ObjectInfo::new("obj_name", "mesh", "mesh")
            .with_attr(ASSET_PATH_ATTR, "some_path");

        let fragment = object_info_to_string(&info).unwrap();
        assert!(fragment.starts_with("/Game/some_path "));
    }

    #[test]
    fn test_add_actor_batch() {
        let info = ObjectInfo::new("obj_name", "mesh", "mesh")
            .with_transform([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0])
            .with_attr(ASSET_PATH_ATTR, "some_path");

        let cmd = EditorCommand::AddActorBatch {
            objects: vec![info],
        };

        assert_eq!(
            cmd.encode().unwrap(),
            "AddActorBatch\n\
             /Game/some_path obj_name \
             T=(1.000000 2.000000 3.000000) \
             R=(4.000000 5.000000 6.000000) \
             S=(7.000000 8.000000 9.000000)"
        );
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let info = ObjectInfo::new("obj", "mesh", "mesh").with_attr(ASSET_PATH_ATTR, "p");
        let cmd = EditorCommand::AddActorBatch {
            objects: vec![info],
        };

        assert_eq!(cmd.encode().unwrap(), cmd.encode().unwrap());
    }

    #[test]
    fn test_rename_outcome_honored() {
        let outcome = RenameOutcome::from_response("new", "new");
        assert_eq!(
            outcome,
            RenameOutcome {
                honored: true,
                actual_name: None
            }
        );
    }

    #[test]
    fn test_rename_outcome_not_found() {
        let outcome = RenameOutcome::from_response("new_name", "NotFound");
        assert_eq!(
            outcome,
            RenameOutcome {
                honored: false,
                actual_name: None
            }
        );
    }

    #[test]
    fn test_rename_outcome_changed() {
        let outcome = RenameOutcome::from_response("new_name", "new_name_2");
        assert_eq!(
            outcome,
            RenameOutcome {
                honored: false,
                actual_name: Some("new_name_2".to_string())
            }
        );
    }

    #[test]
    fn test_rename_sentinel_wins_over_echo() {
        // Requesting the sentinel itself still decodes as not-found
        let outcome = RenameOutcome::from_response("NotFound", "NotFound");
        assert!(!outcome.honored);
        assert_eq!(outcome.actual_name, None);
    }
}
