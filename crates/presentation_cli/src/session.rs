//! Interactive route session
//!
//! Reads one command per line. A line of the form
//! `origin | destination [| mode]` plans a route; a few words manage the
//! session history.

use std::io::Write;
use std::path::PathBuf;

use domain::{RouteHistory, TravelMode};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::{App, describe_save};

/// Number of entries `history` shows
pub const HISTORY_LIMIT: usize = 5;

const HELP: &str = "\
Commands:
  <origin> | <destination> [| car|walk|bike]   plan a route
  history                                      show the last 5 routes
  clear                                        forget all routes
  export <file.csv>                            write all routes as CSV
  stats                                        geocode cache statistics
  help                                         show this text
  quit                                         leave the session";

/// Session-wide settings
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Mode used when a line names none
    pub mode: TravelMode,
    /// Upload every successful route
    pub save: bool,
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Route {
        origin: String,
        destination: String,
        mode: Option<TravelMode>,
    },
    History,
    Clear,
    Export(PathBuf),
    Stats,
    Help,
    Quit,
    Blank,
}

/// Parse an input line
///
/// Returns a message for the user when the line is not understood.
pub fn parse_line(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(SessionCommand::Blank);
    }

    if line.contains('|') {
        let mut parts = line.split('|').map(str::trim);
        let origin = parts.next().unwrap_or_default();
        let destination = parts.next().unwrap_or_default();
        let mode = parts
            .next()
            .filter(|mode| !mode.is_empty())
            .map(str::parse::<TravelMode>)
            .transpose()
            .map_err(|e| e.to_string())?;
        if parts.next().is_some() {
            return Err("Expected: origin | destination | mode".to_string());
        }
        if origin.is_empty() || destination.is_empty() {
            return Err("Both origin and destination are required".to_string());
        }
        return Ok(SessionCommand::Route {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode,
        });
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));
    match word.to_lowercase().as_str() {
        "history" => Ok(SessionCommand::History),
        "clear" => Ok(SessionCommand::Clear),
        "stats" => Ok(SessionCommand::Stats),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        "export" if rest.is_empty() => Err("Usage: export <file.csv>".to_string()),
        "export" => Ok(SessionCommand::Export(PathBuf::from(rest))),
        _ => Err(format!("Unknown command '{word}', type 'help'")),
    }
}

/// Run a session until `quit` or end of input
///
/// Returns the history collected during the session.
pub async fn run_session<R, W>(
    app: &mut App,
    options: SessionOptions,
    input: R,
    out: &mut W,
) -> anyhow::Result<RouteHistory>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut history = RouteHistory::new();
    let mut lines = input.lines();

    writeln!(
        out,
        "🗺️  Njira session ({}). Type 'help' for commands.",
        options.mode
    )?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match parse_line(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => execute(app, options, &mut history, command, out).await?,
            Err(message) => writeln!(out, "❌ {message}")?,
        }
    }

    Ok(history)
}

async fn execute<W: Write>(
    app: &mut App,
    options: SessionOptions,
    history: &mut RouteHistory,
    command: SessionCommand,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        SessionCommand::Route {
            origin,
            destination,
            mode,
        } => {
            let mode = mode.unwrap_or(options.mode);
            let planned = match app.planner().plan(&origin, &destination, mode).await {
                Ok(planned) => planned,
                Err(e) => {
                    writeln!(out, "❌ {e}")?;
                    return Ok(());
                },
            };

            if let Some(failure) = &planned.outcome.failure {
                writeln!(out, "❌ No route: {failure}")?;
                return Ok(());
            }
            writeln!(out, "🛣️  {}", planned.outcome.route.label())?;
            if let Some(entry) = planned.history_entry.clone() {
                history.push(entry);
            }
            if !options.save {
                return Ok(());
            }
            if let Some(message) = describe_save(&app.save(&planned).await) {
                writeln!(out, "{message}")?;
            }
        },
        SessionCommand::History => {
            if history.is_empty() {
                writeln!(out, "No routes yet")?;
            }
            for (i, entry) in history.recent(HISTORY_LIMIT).enumerate() {
                writeln!(out, "{}. {}", i + 1, entry.summary_line())?;
            }
        },
        SessionCommand::Clear => {
            history.clear();
            writeln!(out, "🧹 History cleared")?;
        },
        SessionCommand::Export(path) => {
            let written = history
                .to_csv()
                .map_err(anyhow::Error::from)
                .and_then(|csv| std::fs::write(&path, csv).map_err(anyhow::Error::from));
            match written {
                Ok(()) => writeln!(
                    out,
                    "✅ Exported {} routes to {}",
                    history.len(),
                    path.display()
                )?,
                Err(e) => writeln!(out, "❌ Export failed: {e}")?,
            }
        },
        SessionCommand::Stats => {
            let stats = app.cache_stats();
            writeln!(
                out,
                "Geocode cache: {} hits, {} misses ({:.0}% hit rate), {}/{} entries",
                stats.hits,
                stats.misses,
                stats.hit_rate() * 100.0,
                stats.entries,
                stats.capacity
            )?;
        },
        SessionCommand::Help => writeln!(out, "{HELP}")?,
        SessionCommand::Quit | SessionCommand::Blank => {},
    }
    Ok(())
}
