use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use backend_application::commands::session_commands;
use backend_application::queries::{event_queries, session_queries, ticket_queries};
use backend_domain::{EventListQuery, TicketListQuery};

use crate::context::AppContext;
use crate::lifecycle;

#[derive(Parser, Debug)]
#[command(name = "mintpass")]
#[command(about = "Mintpass ticketing backend", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Print the merged event list
    Events(EventsArgs),
    /// Print the tickets owned by an address
    Tickets(TicketsArgs),
    /// Print the current session identity
    Identity,
    /// Persist a mock wallet address
    ConnectMock(ConnectMockArgs),
    /// Clear the mock wallet address
    DisconnectMock,
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct EventsArgs {
    /// Only events in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only events with tickets left
    #[arg(long, default_value_t = false)]
    pub available: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TicketsArgs {
    /// Owner address; defaults to the current identity
    #[arg(long)]
    pub owner: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ConnectMockArgs {
    /// Wallet address to impersonate
    pub address: String,
}

pub async fn run(context: AppContext, command: Command) -> Result<()> {
    let state = context.state.clone();
    let state = &state;
    match command {
        Command::Serve => return lifecycle::serve(context).await,
        Command::Events(args) => {
            let query = EventListQuery {
                category: args.category,
                available_only: Some(args.available),
                ..EventListQuery::default()
            };
            print_json(&event_queries::list_events(state, query).await)?;
        }
        Command::Tickets(args) => {
            let query = TicketListQuery { owner: args.owner };
            print_json(&ticket_queries::list_tickets(state, query).await)?;
        }
        Command::Identity => print_json(&session_queries::get_identity(state).await)?,
        Command::ConnectMock(args) => {
            print_json(&session_commands::connect_mock(state, &args.address).await?)?
        }
        Command::DisconnectMock => print_json(&session_commands::disconnect_mock(state).await?)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default() {
        let cli = Cli::try_parse_from(["mintpass"]).expect("parse");
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from([
            "mintpass",
            "--config",
            "/etc/mintpass.toml",
            "tickets",
            "--owner",
            "0xabc",
        ])
        .expect("parse");
        assert_eq!(cli.config.as_deref(), Some("/etc/mintpass.toml"));
        assert_eq!(
            cli.command,
            Some(Command::Tickets(TicketsArgs {
                owner: Some("0xabc".to_string())
            }))
        );

        let cli = Cli::try_parse_from(["mintpass", "connect-mock", "0xdef"]).expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::ConnectMock(ConnectMockArgs {
                address: "0xdef".to_string()
            }))
        );
    }

    #[test]
    fn connect_mock_requires_an_address() {
        assert!(Cli::try_parse_from(["mintpass", "connect-mock"]).is_err());
    }
}
