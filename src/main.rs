use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use audit_ledger::config::{AuditPaths, Settings};
use audit_ledger::display::{format_entry_detail, format_entry_table};
use audit_ledger::export::{export_entries, ExportFormat};
use audit_ledger::models::EntryContext;
use audit_ledger::persist::LogReader;
use audit_ledger::query::{LogQuery, QueryParams};
use audit_ledger::AuditService;

#[derive(Parser)]
#[command(
    name = "auditctl",
    version,
    about = "Inspect and record entries in the audit ledger",
    long_about = "auditctl records single audit entries and inspects the \
                  append-only audit log: tail the most recent entries, \
                  search by action, actor, origin, or time range, and \
                  export the persisted history as JSON or CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a single audit entry
    Record {
        /// Action name (e.g. LOGIN, USER_DELETE, API_REQUEST)
        action: String,
        /// Acting user identity
        #[arg(short, long)]
        actor: Option<String>,
        /// Network origin (e.g. client IP)
        #[arg(short, long)]
        origin: Option<String>,
        /// Outcome code (e.g. HTTP status)
        #[arg(long)]
        outcome: Option<String>,
        /// Operation duration in milliseconds
        #[arg(long)]
        duration: Option<u64>,
        /// Client identifier (e.g. user agent)
        #[arg(long)]
        client: Option<String>,
        /// Extra metadata as KEY=VALUE (repeatable)
        #[arg(short = 'f', long = "field", value_parser = parse_key_val)]
        fields: Vec<(String, String)>,
    },

    /// Show the most recent persisted entries
    Tail {
        /// Number of entries to show
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Search persisted entries by filter
    Search {
        /// Exact action name
        #[arg(long)]
        action: Option<String>,
        /// Exact actor identity
        #[arg(long)]
        actor: Option<String>,
        /// Exact network origin
        #[arg(long)]
        origin: Option<String>,
        /// Inclusive start timestamp (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,
        /// Inclusive end timestamp (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,
    },

    /// Export persisted entries
    Export {
        /// Output format: structured (JSON) or tabular (CSV)
        #[arg(short, long, default_value = "structured")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize the data directory and write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = AuditPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Record {
            action,
            actor,
            origin,
            outcome,
            duration,
            client,
            fields,
        } => {
            let mut context = EntryContext::new();
            if let Some(actor) = actor {
                context = context.actor(actor);
            }
            if let Some(origin) = origin {
                context = context.origin(origin);
            }
            if let Some(outcome) = outcome {
                context = context.outcome(outcome);
            }
            if let Some(duration) = duration {
                context = context.duration_ms(duration);
            }
            if let Some(client) = client {
                context = context.client(client);
            }
            for (key, value) in fields {
                context = context.field(key, value);
            }

            let mut service = AuditService::open(&paths, settings)?;
            let entry = service.capture(&action, context);
            // Closing flushes the entry to the file even when non-critical
            service.close()?;

            print!("{}", format_entry_detail(&entry));
        }

        Commands::Tail { count } => {
            let reader = LogReader::new(paths.audit_log());
            let entries = reader.read_recent(count.unwrap_or(settings.default_query_count))?;
            print!("{}", format_entry_table(&entries));
        }

        Commands::Search {
            action,
            actor,
            origin,
            since,
            until,
        } => {
            let query = LogQuery::parse(&QueryParams {
                action,
                actor_id: actor,
                origin,
                start_date: since,
                end_date: until,
                count: None,
            })?;

            let reader = LogReader::new(paths.audit_log());
            let entries: Vec<_> = reader
                .read_all()?
                .into_iter()
                .filter(|entry| query.matches(entry))
                .collect();

            print!("{}", format_entry_table(&entries));
        }

        Commands::Export { format, output } => {
            let format: ExportFormat = format.parse()?;
            let reader = LogReader::new(paths.audit_log());
            let entries = reader.read_all()?;
            let payload = export_entries(&entries, format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &payload.body)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!(
                        "Exported {} entries to {} ({})",
                        entries.len(),
                        path.display(),
                        payload.content_type
                    );
                }
                None => print!("{}", payload.body),
            }
        }

        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Audit ledger already initialized at {}",
                    paths.base_dir().display()
                );
            } else {
                settings.save(&paths)?;
                println!(
                    "Initialized audit ledger at {}",
                    paths.base_dir().display()
                );
            }
        }

        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}

/// Parse a KEY=VALUE argument
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}
