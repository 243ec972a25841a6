//! Command Handlers
//!
//! Behavior of each command. Handlers write their output to the supplied
//! writer and return an error only for transport or decode failures, in
//! which case the session is left as it was.

use std::io::Write;

use tracing::debug;

use super::{Command, Flow, Registry};
use crate::catch::attempt_catch;
use crate::error::Result;
use crate::session::Session;

/// Output sink for command text.
pub type Out<'a> = &'a mut (dyn Write + Send);

impl Command {
    /// Runs the command to completion against `session`.
    ///
    /// # Arguments
    /// * `registry` - Command table, listed by `help`
    /// * `session` - State the command may read and change
    /// * `args` - Positional arguments following the command name
    /// * `out` - Where the command prints
    pub async fn execute(
        self,
        registry: &Registry,
        session: &mut Session,
        args: &[String],
        out: Out<'_>,
    ) -> Result<Flow> {
        match self {
            Command::Help => help(registry, out)?,
            Command::Exit => return Ok(Flow::Exit),
            Command::Map => map_forward(session, out).await?,
            Command::MapBack => map_back(session, out).await?,
            Command::Explore => explore(session, args, out).await?,
            Command::Catch => catch(session, args, out).await?,
            Command::Inspect => inspect(session, args, out)?,
            Command::Pokedex => pokedex(session, out)?,
        }
        Ok(Flow::Continue)
    }
}

/// Prints the welcome banner and every registered command.
pub fn help(registry: &Registry, out: Out<'_>) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    for descriptor in registry.iter() {
        writeln!(out, "  {}: {}", descriptor.name, descriptor.description)?;
    }
    Ok(())
}

// == Map ==
async fn map_forward(session: &mut Session, out: Out<'_>) -> Result<()> {
    if session.cursor.is_exhausted() {
        writeln!(out, "No next locations")?;
        return Ok(());
    }

    let page = session.client.location_page(&session.cursor.next).await?;
    session.cursor.advance_forward(page.next.as_deref());
    debug!(cursor = ?session.cursor, "paged forward");

    for name in page.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

async fn map_back(session: &mut Session, out: Out<'_>) -> Result<()> {
    // Same guard and fetch target as forward paging; only the cursor
    // transition differs
    if session.cursor.is_exhausted() {
        writeln!(out, "No next locations")?;
        return Ok(());
    }

    let page = session.client.location_page(&session.cursor.next).await?;
    session.cursor.advance_backward(page.previous.as_deref());
    debug!(cursor = ?session.cursor, "paged backward");

    for name in page.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

// == Explore ==
async fn explore(session: &mut Session, args: &[String], out: Out<'_>) -> Result<()> {
    let Some(area) = args.first() else {
        writeln!(out, "Please enter a location name")?;
        return Ok(());
    };

    writeln!(out, "Exploring {}...", area)?;
    let location = session.client.location_area(area).await?;

    writeln!(out, "Found Pokemon:")?;
    for name in location.creature_names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

// == Catch ==
async fn catch(session: &mut Session, args: &[String], out: Out<'_>) -> Result<()> {
    let Some(name) = args.first() else {
        writeln!(out, "Please enter a Pokemon name")?;
        return Ok(());
    };

    let creature = session.client.creature(name).await?;
    writeln!(out, "Throwing a Pokeball at {}...", creature.name)?;

    if attempt_catch(creature.base_experience(), &mut *session.roll) {
        writeln!(out, "{} was caught!", creature.name)?;
        session.pokedex.insert(creature.name.clone(), creature);
    } else {
        writeln!(out, "{} escaped!", creature.name)?;
    }
    Ok(())
}

// == Inspect ==
fn inspect(session: &Session, args: &[String], out: Out<'_>) -> Result<()> {
    let Some(name) = args.first() else {
        writeln!(out, "Please enter a Pokemon name")?;
        return Ok(());
    };

    let Some(creature) = session.pokedex.get(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(());
    };

    writeln!(out, "Name: {}", creature.name)?;
    writeln!(out, "Height: {}", creature.height)?;
    writeln!(out, "Weight: {}", creature.weight)?;
    writeln!(out, "Stats:")?;
    for (stat, value) in creature.stat_pairs() {
        writeln!(out, "  -{}: {}", stat, value)?;
    }
    writeln!(out, "Types:")?;
    for kind in creature.type_names() {
        writeln!(out, "  - {}", kind)?;
    }
    Ok(())
}

// == Pokedex ==
fn pokedex(session: &Session, out: Out<'_>) -> Result<()> {
    writeln!(out, "Your Pokedex:")?;
    for name in session.pokedex.keys() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}
