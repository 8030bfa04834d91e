//! Script execution methods.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;

use super::Browser;

// ============================================================================
// Browser - Script Execution
// ============================================================================

impl Browser {
    /// Executes a synchronous script body in the document.
    ///
    /// `arguments[i]` receives `args[i]`; pass elements with
    /// [`Element::to_argument`](super::Element::to_argument).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let title = browser.execute_script("return document.title", vec![]).await?;
    /// ```
    pub async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        debug!(script_len = script.len(), args = args.len(), "Executing script");
        let value = self.session().run_script(script, args).await?;
        debug!("Script executed");
        Ok(value)
    }
}
