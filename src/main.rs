//! libtrie - auto-completion and graph visualization for word lists.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use libtrie::trie::builder::build_trie_from_reader;
use libtrie::trie::{Dot, Graphviz, Renderer, Subtree, Trie, TrieConfig};

/// Auto-completion and graph visualization for word lists.
///
/// Reads one entry per line from FILE, or from standard input if no file is given.
#[derive(Parser, Debug)]
#[command(name = "libtrie")]
#[command(version, about, long_about = None)]
#[command(group = clap::ArgGroup::new("action").required(true).multiple(true).args(["complete", "svg"]))]
struct Cli {
    /// Suggest autocompletions for PREFIX
    #[arg(short, long, value_name = "PREFIX")]
    complete: Option<String>,

    /// Generate a .SVG file (with optional prefix)
    #[arg(short, long)]
    svg: bool,

    /// Prefix for the .DOT file
    #[arg(short, long, value_name = "PREFIX", requires = "svg")]
    prefix: Option<String>,

    /// Keep the transient .DOT file
    #[arg(short, long, requires = "svg")]
    keep: bool,

    /// Path of the .DOT file
    #[arg(short, long, value_name = "FILE", default_value = "graph.dot")]
    output: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Word list, one entry per line
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut out = BufWriter::new(io::stdout().lock());
    match run(&cli, &Graphviz::new(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli, renderer: &impl Renderer, out: &mut impl Write) -> Result<()> {
    let trie = load(cli.file.as_deref())?;
    execute(cli, &trie, renderer, out)
}

fn execute(
    cli: &Cli,
    trie: &Trie,
    renderer: &impl Renderer,
    out: &mut impl Write,
) -> Result<()> {
    let completion = cli
        .complete
        .as_deref()
        .map(|prefix| trie.resolve(prefix))
        .transpose()?;
    if let Some(subtree) = &completion {
        print_suggestions(subtree, out)?;
    }

    if cli.svg {
        let graph_root = graph_root(trie, cli.prefix.as_deref(), completion)?;
        let dot = match &graph_root {
            Some(subtree) => subtree.to_dot(),
            None => trie.to_dot(),
        };
        let rendered = export(&dot, &cli.output, renderer);
        if !cli.keep {
            discard(&cli.output);
        }
        rendered?;
    }
    Ok(())
}

/// Picks the subtree to draw, reusing the completion lookup when both name
/// the same prefix.
fn graph_root<'t>(
    trie: &'t Trie,
    prefix: Option<&str>,
    completion: Option<Subtree<'t>>,
) -> Result<Option<Subtree<'t>>> {
    Ok(match (prefix, completion) {
        (Some(prefix), Some(subtree)) if subtree.prefix() == prefix => Some(subtree),
        (Some(prefix), _) => Some(trie.resolve(prefix)?),
        (None, _) => None,
    })
}

fn load(file: Option<&Path>) -> Result<Trie> {
    let config = TrieConfig::default();
    match file {
        Some(path) => {
            let reader = File::open(path)
                .map(BufReader::new)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read(reader, &config).with_context(|| format!("failed to load {}", path.display()))
        }
        None => read(io::stdin().lock(), &config).context("failed to load standard input"),
    }
}

fn read(reader: impl BufRead, config: &TrieConfig) -> Result<Trie> {
    Ok(build_trie_from_reader(reader, config)?)
}

fn print_suggestions(subtree: &Subtree<'_>, out: &mut impl Write) -> Result<()> {
    let mut result = Ok(());
    subtree.for_each_suggestion(|entry| {
        if result.is_ok() {
            result = writeln!(out, "{entry}");
        }
    });
    result
        .and_then(|()| out.flush())
        .context("failed to write suggestions")
}

fn export(dot: &Dot<'_>, path: &Path, renderer: &impl Renderer) -> Result<()> {
    let mut file = File::create(path)
        .map(BufWriter::new)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write!(file, "{dot}")
        .and_then(|()| file.flush())
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), "wrote graph description");

    renderer
        .render(path)
        .context("failed to generate the .SVG file")
}

fn discard(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        debug!(path = %path.display(), %err, "could not remove graph description");
    }
}
