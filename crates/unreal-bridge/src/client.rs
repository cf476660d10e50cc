//! High-level command client for the editor connection

use scenelink_core::{ObjectInfo, Result, Vector3};
use tracing::debug;

use crate::protocol::{EditorCommand, RenameOutcome};
use crate::transport::EditorTransport;

/// Viewport selector targeting every editor viewport
pub const ALL_VIEWPORTS: &str = "All";

/// Issues scene-editing commands over an [`EditorTransport`]
///
/// Each method encodes one command, performs exactly one transport round
/// trip, and decodes the response where it carries meaning. The client
/// holds no state besides the transport, so a fresh one can be built per
/// connection.
pub struct EditorClient<T: EditorTransport> {
    transport: T,
}

impl<T: EditorTransport> EditorClient<T> {
    /// Create a client over an established transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn send(&mut self, command: &EditorCommand) -> Result<String> {
        let message = command.encode()?;
        debug!("[DCC→Editor] {}", message);
        let response = self.transport.send_message(&message).await?;
        debug!("[Editor→DCC] {}", response);
        Ok(response)
    }

    /// Apply a full transform to one scene object
    pub async fn transform_object(
        &mut self,
        name: &str,
        translation: Vector3,
        rotation: Vector3,
        scale: Vector3,
    ) -> Result<()> {
        self.send(&EditorCommand::TransformObject {
            name: name.to_string(),
            translation,
            rotation,
            scale,
        })
        .await?;
        Ok(())
    }

    /// Move the viewport camera
    ///
    /// `viewport` of `None` targets all viewports.
    pub async fn transform_camera(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        pitch: f64,
        yaw: f64,
        roll: f64,
        viewport: Option<&str>,
    ) -> Result<()> {
        self.send(&EditorCommand::TransformCamera {
            x,
            y,
            z,
            pitch,
            yaw,
            roll,
            viewport: viewport.unwrap_or(ALL_VIEWPORTS).to_string(),
        })
        .await?;
        Ok(())
    }

    /// Delete the editor's current selection
    pub async fn delete_selected(&mut self) -> Result<()> {
        self.send(&EditorCommand::DeleteSelected).await?;
        Ok(())
    }

    /// Delete one object by name
    pub async fn delete_object(&mut self, name: &str) -> Result<()> {
        self.send(&EditorCommand::DeleteObject {
            name: name.to_string(),
        })
        .await?;
        Ok(())
    }

    /// Rename an object and report what the editor actually did
    pub async fn rename_object(&mut self, old_name: &str, new_name: &str) -> Result<RenameOutcome> {
        let response = self
            .send(&EditorCommand::RenameObject {
                old_name: old_name.to_string(),
                new_name: new_name.to_string(),
            })
            .await?;
        Ok(RenameOutcome::from_response(new_name, &response))
    }

    /// Reserve an unused object name derived from `base_name`
    ///
    /// The editor's response is the free name verbatim.
    pub async fn get_free_name(&mut self, base_name: &str) -> Result<String> {
        self.send(&EditorCommand::GetFreeName {
            base_name: base_name.to_string(),
        })
        .await
    }

    /// Attach `child_name` under `parent_name` in the scene hierarchy
    ///
    /// Editors without parenting support get no command at all; the return
    /// value reports whether one was sent.
    pub async fn parent_child_to(&mut self, child_name: &str, parent_name: &str) -> Result<bool> {
        if !self.transport.capabilities().parenting {
            debug!(
                "editor does not support parenting, skipping {} -> {}",
                child_name, parent_name
            );
            return Ok(false);
        }

        self.send(&EditorCommand::ParentChildTo {
            child_name: child_name.to_string(),
            parent_name: parent_name.to_string(),
        })
        .await?;
        Ok(true)
    }

    /// Spawn a batch of actors in one round trip
    ///
    /// All objects collapse into a single message; the whole point of the
    /// batch command is amortizing connection latency over N creations.
    pub async fn add_actor_batch(&mut self, objects: &[ObjectInfo]) -> Result<()> {
        self.send(&EditorCommand::AddActorBatch {
            objects: objects.to_vec(),
        })
        .await?;
        Ok(())
    }
}
