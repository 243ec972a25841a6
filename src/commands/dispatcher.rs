//! Command Dispatcher
//!
//! Resolves command names against a registry and runs them.

use tracing::{debug, warn};

use super::handlers::Out;
use super::{Flow, Registry};
use crate::error::{PokedexError, Result};
use crate::session::Session;

/// Runs commands by name against a session.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // == Execute ==
    /// Runs the command called `name` with `args`.
    ///
    /// An unknown name fails with [`PokedexError::UnknownCommand`] before
    /// anything is touched. The arguments live only for this call.
    pub async fn execute(
        &self,
        name: &str,
        session: &mut Session,
        args: &[String],
        out: Out<'_>,
    ) -> Result<Flow> {
        let Some(descriptor) = self.registry.get(name) else {
            warn!(command = name, "unknown command");
            return Err(PokedexError::UnknownCommand(name.to_string()));
        };

        debug!(command = name, ?args, "dispatching");
        descriptor
            .command
            .execute(&self.registry, session, args, out)
            .await
    }

    // == Execute Line ==
    /// Splits `line` on whitespace and runs it. Blank lines do nothing.
    pub async fn execute_line(&self, line: &str, session: &mut Session, out: Out<'_>) -> Result<Flow> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        self.execute(name, session, &args, out).await
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Registry::standard())
    }
}
