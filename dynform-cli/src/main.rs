use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Report, Result, eyre};
use tracing_subscriber::EnvFilter;

use dynform::{
    DocumentFormat, FileStore, FormEditor, Messages, OutputDestination, OutputOptions,
    STORAGE_KEY, UiOptions, emit,
};

const DEFAULT_STORE_FILE: &str = "/tmp/dynform.json";

#[derive(Debug, Parser)]
#[command(
    name = "dynform",
    version,
    about = "Edit a dynamic name/type/value form in the terminal"
)]
struct Cli {
    /// Store file the form persists into (a JSON map of keys to documents)
    #[arg(short = 's', long = "store", value_name = "PATH", default_value = DEFAULT_STORE_FILE)]
    store: PathBuf,

    /// Keep the form in memory only; nothing survives the session
    #[arg(long = "memory", conflicts_with = "store")]
    memory: bool,

    /// Store key the document is saved under
    #[arg(short = 'k', long = "key", value_name = "KEY", default_value = STORAGE_KEY)]
    key: String,

    /// Message locale for labels, errors and the submit notification
    #[arg(long = "locale", value_enum, default_value = "en")]
    locale: Locale,

    /// Title shown at the top of the form (defaults to the locale's)
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations for the last submitted document ("-" is stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Serialization format for outputs
    #[arg(long = "format", value_name = "FORMAT", default_value = "json")]
    format: String,

    /// Emit compact rather than pretty output
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Quit without asking about unsubmitted changes
    #[arg(long = "no-confirm")]
    no_confirm: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Locale {
    /// English labels and messages
    En,
    /// The original Kazakh labels and messages
    Kk,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format: DocumentFormat = cli.format.parse().map_err(|msg: String| eyre!(msg))?;
    let mut messages = match cli.locale {
        Locale::En => Messages::default(),
        Locale::Kk => Messages::kazakh(),
    };
    if let Some(title) = cli.title {
        messages.form_title = title;
    }
    let options = UiOptions::default()
        .with_messages(messages)
        .with_confirm_exit(!cli.no_confirm);

    let editor = FormEditor::new()
        .with_key(cli.key.as_str())
        .with_options(options);
    let submitted = if cli.memory {
        editor.run()
    } else {
        editor.with_store(FileStore::open(&cli.store)).run()
    }
    .map_err(Report::msg)?;

    let Some(doc) = submitted else {
        return Ok(());
    };
    let output = OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_destinations(parse_destinations(&cli.outputs));
    emit(&doc, &output).map_err(Report::msg)
}

fn parse_destinations(raw: &[String]) -> Vec<OutputDestination> {
    if raw.is_empty() {
        return vec![OutputDestination::Stdout];
    }
    raw.iter()
        .map(|spec| {
            if spec == "-" {
                OutputDestination::Stdout
            } else {
                OutputDestination::file(spec)
            }
        })
        .collect()
}
