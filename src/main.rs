//! Treejump CLI - Structural navigation over source files

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use treejump::adapter::{LanguageAdapter, LanguageRegistry};
use treejump::config::{self, OutputFormat};
use treejump::position::{node_at_offset, path_to_root};
use treejump::syntax::{SyntaxNode, TextRange, TsNode};
use treejump::{
    ui, Classification, ClassifierTable, Motion, NavigationRequest, NavigationResult, Navigator,
};

#[derive(Parser)]
#[command(name = "treejump")]
#[command(version)]
#[command(
    about = "Structural syntax-tree navigation - jump between statements, expressions and blocks"
)]
#[command(long_about = r#"
Treejump moves a caret between meaningful elements of a parsed source file:
next/previous sibling, enclosing parent, first/last child, expand/shrink
selection and jumps to the nearest function, class, statement, loop, comment,
argument, variable, type, operator, expression or macro.

Example usage:
  treejump move --file src/main.rs --offset 120 --motion next
  treejump move --file app.py --offset 0 --motion next-function
  treejump move --file lib.rs --offset 40 --motion prev-operator
  treejump tree --file config.json --offset 14
  treejump languages
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one motion from a caret (or selection) in a file
    Move {
        /// Source file to navigate
        #[arg(short, long)]
        file: PathBuf,

        /// Caret byte offset
        #[arg(short, long)]
        offset: usize,

        /// Motion, e.g. next, prev, parent, first-child, expand, next-function
        #[arg(short, long)]
        motion: String,

        /// End of the current selection (starts at --offset)
        #[arg(long)]
        to: Option<usize>,

        /// Language id; detected from the file extension when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Report the target range as a selection
        #[arg(short, long)]
        select: bool,
    },

    /// Print the parse tree with node classifications
    Tree {
        /// Source file to parse
        #[arg(short, long)]
        file: PathBuf,

        /// Only print the path from the root to the node at this offset
        #[arg(short, long)]
        offset: Option<usize>,

        /// Language id; detected from the file extension when omitted
        #[arg(short, long)]
        language: Option<String>,
    },

    /// List supported languages
    Languages,

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Serialize)]
struct TreeEntry {
    depth: usize,
    kind: String,
    range: TextRange,
    named: bool,
    classification: Classification,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let settings = config::load_config(Some(&config_path))?.unwrap_or_default();
    let format = cli.format.or(settings.format).unwrap_or_default();

    match cli.command {
        Commands::Move { file, offset, motion, to, language, select } => {
            let registry = LanguageRegistry::with_overrides(&settings.languages)?;
            let source = std::fs::read_to_string(&file)?;
            let adapter = pick_adapter(&registry, language.as_deref(), &file)?;
            let motion: Motion = motion.parse()?;

            let mut request = NavigationRequest::new(adapter.language_id(), offset, motion)
                .select(select || settings.select.unwrap_or(false));
            if let Some(to) = to {
                request = request.with_selection(offset, to);
            }

            let result = Navigator::new(&registry).navigate_source(&source, &request)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => match &result {
                    NavigationResult::Moved { caret, selection, kind } => {
                        ui::moved(kind, *caret, *selection)
                    }
                    NavigationResult::NoMovement => ui::no_movement(&motion.name()),
                },
            }
        }

        Commands::Tree { file, offset, language } => {
            let registry = LanguageRegistry::with_overrides(&settings.languages)?;
            let source = std::fs::read_to_string(&file)?;
            let adapter = pick_adapter(&registry, language.as_deref(), &file)?;
            let parsed = adapter.parse(&source)?;
            if parsed.has_errors() {
                ui::warn(&format!(
                    "{} has syntax errors; the tree contains recovery nodes",
                    file.display()
                ));
            }

            let root = parsed.root();
            let current = offset.map(|o| node_at_offset(&root, o));
            let entries = match current {
                Some(node) => ancestry(&node, adapter.classifier()),
                None => {
                    let mut entries = Vec::new();
                    walk(&root, 0, adapter.classifier(), &mut entries);
                    entries
                }
            };

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
                OutputFormat::Text => {
                    ui::header(&format!("{} ({})", file.display(), adapter.language_name()));
                    let last = entries.len().saturating_sub(1);
                    for (i, entry) in entries.iter().enumerate() {
                        let is_current = current.is_some() && i == last;
                        ui::tree_line(
                            entry.depth,
                            &entry.kind,
                            entry.range,
                            entry.classification,
                            is_current,
                        );
                    }
                }
            }
        }

        Commands::Languages => {
            let registry = LanguageRegistry::with_overrides(&settings.languages)?;
            match format {
                OutputFormat::Json => {
                    let languages: Vec<_> = registry
                        .adapters()
                        .iter()
                        .map(|a| {
                            serde_json::json!({
                                "id": a.language_id(),
                                "name": a.language_name(),
                                "extensions": a.file_extensions(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&languages)?);
                }
                OutputFormat::Text => println!("{}", ui::languages_table(&registry)),
            }
        }

        Commands::Init { force } => {
            config::write_config(&config_path, &config::default_config(), force)?;
            ui::success(&format!("Wrote {}", config_path.display()));
        }
    }

    Ok(())
}

fn pick_adapter<'r>(
    registry: &'r LanguageRegistry,
    language: Option<&str>,
    file: &Path,
) -> anyhow::Result<&'r dyn LanguageAdapter> {
    match language {
        Some(language) => Ok(registry.resolve(language)?),
        None => match registry.find_by_path(file) {
            Some(adapter) => Ok(adapter),
            None => anyhow::bail!(
                "no language registered for {} (use --language; supported: {})",
                file.display(),
                registry.languages().join(", ")
            ),
        },
    }
}

fn entry(node: &TsNode<'_>, depth: usize, table: &ClassifierTable) -> TreeEntry {
    TreeEntry {
        depth,
        kind: node.kind().to_string(),
        range: node.range(),
        named: node.is_named(),
        classification: table.classify(node),
    }
}

fn walk(node: &TsNode<'_>, depth: usize, table: &ClassifierTable, out: &mut Vec<TreeEntry>) {
    out.push(entry(node, depth, table));
    for child in node.children() {
        walk(&child, depth + 1, table, out);
    }
}

fn ancestry(node: &TsNode<'_>, table: &ClassifierTable) -> Vec<TreeEntry> {
    path_to_root(node)
        .iter()
        .rev()
        .enumerate()
        .map(|(depth, n)| entry(n, depth, table))
        .collect()
}
