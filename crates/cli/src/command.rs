//! Argument parsing and the validated command descriptor
//!
//! `Cli` is the raw clap surface. `Cli::into_invocation` turns it into an
//! immutable `Invocation`, rejecting bad input before the queue is touched.

use crate::config;
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use deq_core::application::PushRequest;
use deq_core::domain::{document, DomainError, End, ItemId};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "deq")]
#[command(about = "File-backed double-ended queue of text items", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Queue file location
    #[arg(long, global = true, env = config::STORE_PATH_ENV)]
    path: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create (or reset) the queue file
    Setup {
        #[command(flatten)]
        silent: SilentArg,
    },

    /// Add an item to the queue
    Push {
        /// Item text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,

        #[command(flatten)]
        end: EndArgs,

        #[command(flatten)]
        silent: SilentArg,
    },

    /// Print items without removing them
    Show {
        #[command(flatten)]
        select: SelectArgs,

        /// Print items as JSON
        #[arg(short, long)]
        dump: bool,
    },

    /// Remove items
    Drop {
        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        silent: SilentArg,
    },
}

#[derive(Args, Debug)]
struct EndArgs {
    /// Use the head of the queue
    #[arg(long, conflicts_with = "tail")]
    head: bool,

    /// Use the tail of the queue (default)
    #[arg(long)]
    tail: bool,
}

impl EndArgs {
    fn end(&self) -> End {
        if self.head {
            End::Head
        } else {
            End::Tail
        }
    }
}

#[derive(Args, Debug)]
struct SilentArg {
    /// Suppress confirmation output (errors and notices still print)
    #[arg(short, long)]
    silent: bool,
}

#[derive(Args, Debug)]
struct SelectArgs {
    /// Select a single item by id (overrides position options)
    #[arg(short, long)]
    id: Option<u64>,

    /// Number of items counted from the chosen end
    #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
    count: i64,

    /// Select every item
    #[arg(short, long)]
    all: bool,

    #[command(flatten)]
    end: EndArgs,
}

impl SelectArgs {
    fn into_target(self) -> Result<Target> {
        // An explicit id wins over position/count/all
        if let Some(id) = self.id {
            return Ok(Target::Id(ItemId::new(id)));
        }

        let count = usize::try_from(self.count)
            .ok()
            .filter(|&count| count > 0)
            .ok_or_else(|| {
                DomainError::InvalidSelection(format!(
                    "count must be a positive integer, got {}",
                    self.count
                ))
            })?;

        Ok(Target::Position {
            end: self.end.end(),
            count,
            all: self.all,
        })
    }
}

/// What a show/drop command operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Id(ItemId),
    Position { end: End, count: usize, all: bool },
}

/// Validated command descriptor
#[derive(Debug, Clone)]
pub enum Command {
    Setup { silent: bool },
    Push { request: PushRequest, silent: bool },
    Show { target: Target, dump: bool },
    Drop { target: Target, silent: bool },
}

/// A parsed invocation: resolved store location plus command
#[derive(Debug, Clone)]
pub struct Invocation {
    pub path: PathBuf,
    pub command: Command,
}

impl Cli {
    /// Validate arguments and resolve the store path against `cwd`
    pub fn into_invocation(self, cwd: &Path) -> Result<Invocation> {
        let command = match self.command.ok_or_else(|| anyhow!("command not specified"))? {
            Commands::Setup { silent } => Command::Setup {
                silent: silent.silent,
            },
            Commands::Push {
                content,
                end,
                silent,
            } => {
                let content = content.join(" ");
                if !document::is_valid_content(&content) {
                    return Err(DomainError::InvalidContent.into());
                }
                Command::Push {
                    request: PushRequest::new(content, end.end()),
                    silent: silent.silent,
                }
            }
            Commands::Show { select, dump } => Command::Show {
                target: select.into_target()?,
                dump,
            },
            Commands::Drop { select, silent } => Command::Drop {
                target: select.into_target()?,
                silent: silent.silent,
            },
        };

        let path = config::resolve_store_path(self.path.as_deref(), cwd)?;
        Ok(Invocation { path, command })
    }
}
