//! Command Registry
//!
//! Immutable table mapping command names to commands.

use std::collections::HashMap;

use super::Command;

/// Name, help text and behavior of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub command: Command,
}

/// Lookup table of the available commands.
///
/// Built once and never modified; iteration follows registration order.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Vec<CommandDescriptor>,
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    /// Builds a registry from descriptors. A later descriptor with the same
    /// name replaces an earlier one.
    pub fn new(descriptors: impl IntoIterator<Item = CommandDescriptor>) -> Self {
        let mut ordered: Vec<CommandDescriptor> = Vec::new();
        let mut by_name = HashMap::new();

        for descriptor in descriptors {
            match by_name.get(descriptor.name) {
                Some(&index) => ordered[index] = descriptor,
                None => {
                    by_name.insert(descriptor.name, ordered.len());
                    ordered.push(descriptor);
                }
            }
        }

        Self {
            descriptors: ordered,
            by_name,
        }
    }

    /// The shell's command set.
    pub fn standard() -> Self {
        Self::new([
            CommandDescriptor {
                name: "help",
                description: "Displays a help message",
                command: Command::Help,
            },
            CommandDescriptor {
                name: "exit",
                description: "Exit the Pokedex",
                command: Command::Exit,
            },
            CommandDescriptor {
                name: "map",
                description: "Get the next 20 map locations",
                command: Command::Map,
            },
            CommandDescriptor {
                name: "mapb",
                description: "Get the previous 20 map locations",
                command: Command::MapBack,
            },
            CommandDescriptor {
                name: "explore",
                description: "Get all the pokemon in one location",
                command: Command::Explore,
            },
            CommandDescriptor {
                name: "catch",
                description: "Catch a pokemon",
                command: Command::Catch,
            },
            CommandDescriptor {
                name: "inspect",
                description: "Inspect a pokemon",
                command: Command::Inspect,
            },
            CommandDescriptor {
                name: "pokedex",
                description: "View your pokedex",
                command: Command::Pokedex,
            },
        ])
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.by_name.get(name).map(|&index| &self.descriptors[index])
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
