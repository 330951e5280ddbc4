mod catalog;
mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::export::ExportFormat;
use commands::new::NewEvent;
use evently_core::Availability;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "evently")]
#[command(about = "Browse events, hand them off as JSON payloads and export them to calendars")]
struct Cli {
    /// Config file (defaults to ~/.config/evently/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events
    List,
    /// Show the details of an event
    Show {
        /// Event name
        name: String,
    },
    /// Print the JSON payload of an event
    Payload {
        /// Event name
        name: String,
    },
    /// Show an event received as a JSON payload
    Details {
        payload: String,
    },
    /// Export an event to a calendar
    Export {
        /// Event name
        #[arg(required_unless_present = "payload")]
        name: Option<String>,

        /// Export this JSON payload instead of a named event
        #[arg(long, conflicts_with = "name")]
        payload: Option<String>,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Insert)]
        format: ExportFormat,

        /// Mark the inserted event as free instead of busy
        #[arg(long)]
        free: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the host calendar URI that opens at an event's begin
    View {
        /// Event name
        name: String,
    },
    /// Create a new event and print its JSON payload
    New {
        title: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Begin time (HH:MM)
        #[arg(short, long)]
        begin: Option<String>,

        /// End time (HH:MM), defaults to one hour after begin
        #[arg(short, long)]
        end: Option<String>,

        /// End date for events spanning several days (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        #[arg(long, conflicts_with_all = ["begin", "end"])]
        all_day: bool,

        #[arg(short, long)]
        place: Option<String>,

        /// Owning group (defaults to default_group from config)
        #[arg(short, long)]
        group: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::List => commands::list::run(&catalog::load_events(&cfg)?),
        Commands::Show { name } => commands::show::run(&catalog::load_events(&cfg)?, &name),
        Commands::Payload { name } => {
            commands::payload::run(&catalog::load_events(&cfg)?, &name)
        }
        Commands::Details { payload } => commands::details::run(&payload),
        Commands::Export {
            name,
            payload,
            format,
            free,
            output,
        } => {
            let event = match (name, payload) {
                (_, Some(payload)) => commands::export::event_from_payload(&payload)?,
                (Some(name), None) => {
                    let events = catalog::load_events(&cfg)?;
                    catalog::find_event(&events, &name)?.clone()
                }
                (None, None) => anyhow::bail!("Give an event name or --payload"),
            };
            let availability = if free {
                Availability::Free
            } else {
                Availability::Busy
            };
            commands::export::run(&event, format, availability, output)
        }
        Commands::View { name } => {
            let events = catalog::load_events(&cfg)?;
            commands::view::run(catalog::find_event(&events, &name)?)
        }
        Commands::New {
            title,
            date,
            begin,
            end,
            end_date,
            all_day,
            place,
            group,
        } => commands::new::run(
            NewEvent {
                title,
                date,
                begin,
                end,
                end_date,
                all_day,
                place,
                group,
            },
            cfg.default_group.clone(),
        ),
    }
}
