//! Session implementation over the WebSocket transport.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::identifiers::ElementId;
use crate::protocol::{Action, Command, ElementCommand, Request, ScriptCommand};
use crate::transport::{Connection, ConnectionOptions};

use super::Session;

// ============================================================================
// RemoteSession
// ============================================================================

/// [`Session`] backed by a [`Connection`].
///
/// # Example
///
/// ```no_run
/// use ng_finder::{Browser, RemoteSession, transport::ConnectionOptions};
///
/// # async fn example() -> ng_finder::Result<()> {
/// let options = ConnectionOptions::builder()
///     .url("ws://127.0.0.1:4444/session")
///     .build()?;
/// let browser = Browser::new(RemoteSession::connect(&options).await?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RemoteSession {
    connection: Connection,
}

impl std::fmt::Debug for RemoteSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSession")
            .field("pending", &self.connection.pending_count())
            .finish()
    }
}

impl RemoteSession {
    /// Connects to the remote end described by `options`.
    pub async fn connect(options: &ConnectionOptions) -> Result<Self> {
        let connection = Connection::connect(options).await?;
        Ok(Self { connection })
    }

    /// Wraps an existing connection.
    #[inline]
    #[must_use]
    pub fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// Returns the underlying connection.
    #[inline]
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Sends a command and returns the unwrapped result.
    async fn send_command(&self, command: Command) -> Result<Value> {
        let request = Request::new(command);
        trace!(id = %request.id, "Sending command");
        self.connection.send(request).await?.into_result()
    }
}

#[async_trait]
impl Session for RemoteSession {
    async fn find_many(
        &self,
        using: &str,
        value: &str,
        context: Option<&ElementId>,
    ) -> Result<Vec<ElementId>> {
        debug!(using, value, parent = ?context, "Native find");

        let result = self
            .send_command(Command::Element(ElementCommand::FindAll {
                using: using.to_string(),
                value: value.to_string(),
                parent_id: context.cloned(),
            }))
            .await?;

        let ids = result
            .get("elementIds")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::protocol("No elementIds in findAll response"))?;

        Ok(ids
            .iter()
            .filter_map(Value::as_str)
            .map(ElementId::new)
            .collect())
    }

    async fn run_script(&self, source: &str, args: Vec<Value>) -> Result<Value> {
        debug!(script_len = source.len(), args = args.len(), "Executing script");

        let result = self
            .send_command(Command::Script(ScriptCommand::Execute {
                script: source.to_string(),
                args,
            }))
            .await?;

        Ok(result.get("value").cloned().unwrap_or(Value::Null))
    }

    async fn perform(
        &self,
        action: Action,
        element: &ElementId,
        args: Vec<Value>,
    ) -> Result<Value> {
        debug!(element_id = %element, action = action.as_str(), "Performing action");

        let result = self
            .send_command(Command::Element(ElementCommand::Perform {
                element_id: element.clone(),
                action,
                args,
            }))
            .await?;

        Ok(result.get("value").cloned().unwrap_or(Value::Null))
    }
}
