//! REPL (Read-Eval-Print Loop) for the Pokedex shell.

use std::io::{self, Write};

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config as EditorConfig, Editor};
use tracing::{info, warn};

use crate::commands::{handlers, Dispatcher, Flow};
use crate::session::Session;

/// Interactive front end: reads lines and hands them to the dispatcher.
pub struct Repl {
    dispatcher: Dispatcher,
    session: Session,
    editor: Editor<(), DefaultHistory>,
    prompt: String,
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new(dispatcher: Dispatcher, session: Session, prompt: impl Into<String>) -> Result<Self> {
        let config = EditorConfig::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        let editor = Editor::with_config(config)?;

        Ok(Self {
            dispatcher,
            session,
            editor,
            prompt: prompt.into(),
        })
    }

    /// Run the REPL loop until `exit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        handlers::help(self.dispatcher.registry(), &mut stdout)?;

        loop {
            // readline blocks this worker thread; the multi-threaded runtime
            // keeps the sweep task running on the others meanwhile
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    let result = self
                        .dispatcher
                        .execute_line(&line, &mut self.session, &mut stdout)
                        .await;

                    match result {
                        Ok(Flow::Continue) => {}
                        Ok(Flow::Exit) => break,
                        Err(e) => {
                            warn!(line = %line.trim(), error = %e, "command failed");
                            writeln!(stdout, "{}", e)?;
                        }
                    }
                    stdout.flush()?;
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - drop the current line but keep going
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let stats = self.session.client.cache().stats().await;
        info!(
            caught = self.session.pokedex.len(),
            cache_hits = stats.hits,
            cache_misses = stats.misses,
            hit_rate = stats.hit_rate(),
            "leaving the Pokedex"
        );
        Ok(())
    }
}
