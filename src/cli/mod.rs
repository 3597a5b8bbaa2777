//! Command-line interface for `helpdesk`.
//!
//! This module provides the CLI parsing and command routing using clap.
//! One `TicketStore` is opened per invocation and handed to the command.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use helpdesk_lib::{JsonFileSnapshot, Persistence, Priority, Status, StatusFilter, TicketStore};

use crate::config::{self, CliOverrides};
use crate::format::OutputContext;
use crate::logging;

/// `helpdesk` (hd) - Single-operator helpdesk ticket tracker.
#[derive(Parser, Debug)]
#[command(name = "hd")]
#[command(
    author,
    version,
    about = "Single-operator helpdesk ticket tracker",
    long_about = None,
    after_help = "Tickets are kept in one JSON snapshot (default: .helpdesk/tickets.json)."
)]
pub struct Cli {
    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Snapshot file to use
    #[arg(long, global = true, env = "HELPDESK_DATA", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            data_file: self.data.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a new ticket
    Create(CreateArgs),

    /// List tickets, optionally filtered by status
    List(ListArgs),

    /// Search tickets by ID, user, description, issue type or department
    Search(SearchArgs),

    /// Show ticket details and comments
    Show(ShowArgs),

    /// Change a ticket's status
    Status(StatusArgs),

    /// Delete a ticket permanently
    Delete(DeleteArgs),

    /// Add a comment to a ticket
    Comment(CommentArgs),

    /// Show status counters
    Stats,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Reporter's name
    #[arg(long = "name")]
    pub user_name: String,

    /// Reporter's email
    #[arg(long = "email")]
    pub user_email: String,

    /// Reporter's department
    #[arg(long)]
    pub department: String,

    /// Issue category (Hardware, Software, Network, ...)
    #[arg(long = "issue-type")]
    pub issue_type: String,

    /// Low, Medium, High or Critical
    #[arg(long, short)]
    pub priority: Priority,

    /// What is wrong
    #[arg(long, short)]
    pub description: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// "all", Open, "In Progress", Resolved or Closed
    #[arg(long, short, default_value = "all")]
    pub status: StatusFilter,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    pub query: String,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Ticket ID
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Ticket ID
    pub id: String,

    /// New status: Open, "In Progress", Resolved or Closed
    pub status: Status,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Ticket ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CommentArgs {
    /// Ticket ID
    pub id: String,

    /// Comment text (words are joined with spaces)
    #[arg(num_args = 0..)]
    pub text: Vec<String>,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration, the snapshot, or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir()?;
    let config = config::load(&root, &cli.overrides())?;
    logging::init_logging(cli.verbose, cli.quiet, config.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let ctx = OutputContext::new(cli.json, cli.quiet, config.preview_width);

    match cli.command {
        Some(Commands::Version) => commands::version::execute(&ctx)?,
        Some(command) => {
            tracing::debug!(command = command.name(), data = %config.data_file.display(), "opening store");
            let mut store = TicketStore::open(JsonFileSnapshot::new(&config.data_file))?;
            dispatch(command, &mut store, &ctx)?;
        }
        None => println!("hd - helpdesk ticket tracker. Use --help for usage."),
    }

    Ok(())
}

/// Route a parsed command to its handler.
///
/// # Errors
///
/// Returns whatever the handler returns.
pub fn dispatch<P: Persistence>(
    command: Commands,
    store: &mut TicketStore<P>,
    ctx: &OutputContext,
) -> helpdesk_lib::Result<()> {
    match command {
        Commands::Create(args) => commands::create::execute(args, store, ctx),
        Commands::List(args) => commands::list::execute(&args, store, ctx),
        Commands::Search(args) => commands::search::execute(&args, store, ctx),
        Commands::Show(args) => commands::show::execute(&args, store, ctx),
        Commands::Status(args) => commands::status::execute(&args, store, ctx),
        Commands::Delete(args) => commands::delete::execute(&args, store, ctx),
        Commands::Comment(args) => commands::comment::execute(&args, store, ctx),
        Commands::Stats => commands::stats::execute(store, ctx),
        Commands::Version => commands::version::execute(ctx),
    }
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::List(_) => "list",
            Self::Search(_) => "search",
            Self::Show(_) => "show",
            Self::Status(_) => "status",
            Self::Delete(_) => "delete",
            Self::Comment(_) => "comment",
            Self::Stats => "stats",
            Self::Version => "version",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_defaults_to_all() {
        let cli = Cli::try_parse_from(["hd", "list"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => assert_eq!(args.status, StatusFilter::All),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_status_with_spaces() {
        let cli = Cli::try_parse_from(["hd", "status", "TKT-100001", "In Progress"]).unwrap();
        match cli.command {
            Some(Commands::Status(args)) => {
                assert_eq!(args.id, "TKT-100001");
                assert_eq!(args.status, Status::InProgress);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_priority() {
        let result = Cli::try_parse_from([
            "hd",
            "create",
            "--name",
            "A",
            "--email",
            "a@b.co",
            "--department",
            "IT",
            "--issue-type",
            "Other",
            "--priority",
            "Urgent",
            "--description",
            "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["hd", "stats", "--json", "--data", "t.json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.overrides().data_file, Some(PathBuf::from("t.json")));
    }
}
