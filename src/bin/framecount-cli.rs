use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use framecount_core::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Screen Counter - count and group the selected frames of a design document
///
/// Examples:
///   # Count every selected frame
///   framecount-cli count flows.json
///
///   # Group by prefix (first matching prefix wins, case-insensitive)
///   framecount-cli count flows.json --prefixes "Dashboard,Login"
///
///   # Machine-readable result
///   framecount-cli count flows.json -p Dashboard --json
///
///   # Draw a summary frame into a copy of the document
///   framecount-cli render flows.json -p Dashboard -o flows-summary.json
///
///   # Drive the plugin with JSON requests on stdin
///   echo '{"action":"count","prefixInput":"Dashboard"}' | framecount-cli session flows.json
#[derive(Parser, Debug)]
#[command(name = "framecount-cli")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Grouping Rules:\n  \
    - Prefixes are separated by commas; blank entries are ignored\n  \
    - Each frame joins the FIRST prefix its name starts with (case-insensitive)\n  \
    - Frames matching no prefix are counted as one screen each\n  \
    - Without prefixes every selected frame is listed as-is")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count and group the selected frames
    Count {
        /// Path to the design document JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Comma-separated grouping prefixes
        #[arg(short, long = "prefixes", value_name = "LIST", env = "FRAMECOUNT_PREFIXES")]
        prefixes: Option<String>,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select a node by id
    Select {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Node id to select
        #[arg(value_name = "ID")]
        id: String,

        /// Write the new selection back to the document
        #[arg(long)]
        save: bool,
    },

    /// Count, then draw a summary frame into the document
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(short, long = "prefixes", value_name = "LIST", env = "FRAMECOUNT_PREFIXES")]
        prefixes: Option<String>,

        /// Where to write the updated document (defaults to FILE)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Answer JSON requests read line by line from stdin
    Session {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the document back on close if it changed
        #[arg(long)]
        save: bool,
    },

    /// Check a document against the schema and structural rules
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Count {
            file,
            prefixes,
            json,
        } => run_count(&file, prefixes.as_deref(), json),
        Command::Select { file, id, save } => run_select(&file, &id, save),
        Command::Render {
            file,
            prefixes,
            output,
        } => run_render(&file, prefixes.as_deref(), output.as_deref()),
        Command::Session { file, save } => run_session(&file, save),
        Command::Validate { file } => run_validate(&file),
    };

    if let Err(err) = outcome {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        process::exit(1);
    }
}

fn open_session(path: &Path) -> Result<PluginSession<DesignDocument>> {
    let document = load_validated_document(path)
        .with_context(|| format!("loading design document '{}'", path.display()))?;
    Ok(PluginSession::new(document))
}

fn run_count(path: &Path, prefixes: Option<&str>, json: bool) -> Result<()> {
    let session = open_session(path)?;
    let result = session.count(prefixes);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn run_select(path: &Path, id: &str, save: bool) -> Result<()> {
    let mut session = open_session(path)?;

    if session.select(id) {
        println!("Selected {}", id.bold());
        if save {
            save_document(session.canvas_mut(), path)
                .with_context(|| format!("saving '{}'", path.display()))?;
        }
    } else {
        println!("{} no node with id '{}'", "Note:".yellow(), id);
    }
    Ok(())
}

fn run_render(path: &Path, prefixes: Option<&str>, output: Option<&Path>) -> Result<()> {
    let mut session = open_session(path)?;
    let result = session.count(prefixes);

    match session.render_summary(&result) {
        Response::RenderSummaryResult {
            success: true,
            artifact_id,
            ..
        } => {
            let target = output.unwrap_or(path);
            save_document(session.canvas_mut(), target)
                .with_context(|| format!("saving '{}'", target.display()))?;
            println!(
                "Summary {} written to {}",
                artifact_id.map(|a| a.to_string()).unwrap_or_default().bold(),
                target.display()
            );
            Ok(())
        }
        Response::RenderSummaryResult { error, .. } => Err(anyhow::anyhow!(
            "summary rendering failed: {}",
            error.unwrap_or_default()
        )),
        other => Err(anyhow::anyhow!("unexpected reply {:?}", other)),
    }
}

fn run_session(path: &Path, save: bool) -> Result<()> {
    let mut session = open_session(path)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading request")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match parse_request(&line) {
            Ok(request) => session.handle(request),
            Err(e) => Some(Response::Error {
                message: e.to_string(),
            }),
        };

        if let Some(reply) = reply {
            writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
            stdout.flush()?;
        }

        if session.is_closed() {
            break;
        }
    }

    if save && session.canvas().is_modified() {
        save_document(session.canvas_mut(), path)
            .with_context(|| format!("saving '{}'", path.display()))?;
        log::info!("saved {}", path.display());
    }
    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    match load_validated_document(path) {
        Ok(document) => {
            println!(
                "{} {} nodes, {} selected",
                "Valid:".green().bold(),
                document.all_ids().len(),
                document.selection.len()
            );
            Ok(())
        }
        Err(DocumentError::Invalid(errors)) => {
            eprintln!("{}\n", "Validation failed:".red().bold());
            for (i, error) in errors.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, error);
            }
            eprintln!("\nPlease fix these errors and try again.");
            process::exit(1);
        }
        Err(e) => Err(e).with_context(|| format!("loading '{}'", path.display())),
    }
}

fn print_result(result: &GroupingResult) {
    println!("{}\n", "# Screen Count".bold());

    if result.is_grouped() {
        println!(
            "**Unique Screens:** {}",
            result.headline_count().to_string().cyan().bold()
        );
        println!("**Total Frames:** {}", result.total);
        println!("**Grouping prefixes:** \"{}\"\n", result.prefix_input);
    } else {
        println!(
            "**Selected Screens:** {}\n",
            result.total.to_string().cyan().bold()
        );
    }

    if result.total == 0 {
        println!("_No frames selected._\n");
        return;
    }

    if result.is_grouped() {
        println!("## Screen Groups\n");
        for group in display_groups(result) {
            println!("### {} {}\n", group.header(), group.count_label().dimmed());
            for item in &group.items {
                print_item(item);
            }
            println!();
        }
    } else {
        println!("## Selected Frames\n");
        for item in &result.matches {
            print_item(item);
        }
        println!();
    }
}

fn print_item(item: &Item) {
    println!(
        "- {} {}",
        item.name,
        format!("({}, {})", item.kind.as_str().to_lowercase(), item.id).dimmed()
    );
}
