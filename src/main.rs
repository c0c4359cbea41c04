//! sessionfiddle command-line entry point.
//!
//! Works on a copy: `prettify-grid` refuses to write over the input file or
//! any existing file, so the original session must be replaced by hand.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sessionfiddle::app::{check_paths, Action, App};
use sessionfiddle::services::session_document::load_document;
use sessionfiddle::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use sessionfiddle::types::settings::{GridSettings, SortKey};

#[derive(Parser)]
#[command(name = "sessionfiddle", version)]
#[command(
    about = "Firefox session store handling utility",
    long_about = None,
    after_help = "This program works by modifying a copy of the input file. \
                  Currently, you must manually substitute the original session \
                  file with the one this program creates."
)]
struct Cli {
    /// What to do with the Firefox session file
    #[arg(value_enum)]
    action: Action,

    /// Path to the original sessionstore.js file
    input_file: PathBuf,

    /// Path to the modified sessionstore.js file, or the output directory for
    /// export-uzbl (must not be the input file)
    #[arg(short = 'o', long = "output-file")]
    output_file: Option<PathBuf>,

    /// Index of the window
    #[arg(long, default_value_t = 0)]
    window: usize,

    /// Width (pixels) of each tab group
    #[arg(long)]
    min_width: Option<u32>,

    /// Height (pixels) of each tab group
    #[arg(long)]
    min_height: Option<u32>,

    /// Vertical spacing (pixels) between tab groups
    #[arg(long)]
    vert_space: Option<u32>,

    /// Horizontal spacing (pixels) between tab groups
    #[arg(long)]
    horiz_space: Option<u32>,

    /// Sort groups by name
    #[arg(long, conflicts_with = "sort_by_id")]
    sort_by_name: bool,

    /// Sort groups by id
    #[arg(long)]
    sort_by_id: bool,

    /// Settings file with grid defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Store the effective grid settings (file plus flags) as the new defaults
    #[arg(long)]
    save_settings: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded settings.
    fn grid_settings(&self, mut settings: GridSettings) -> GridSettings {
        if let Some(w) = self.min_width {
            settings.box_width = w;
        }
        if let Some(h) = self.min_height {
            settings.box_height = h;
        }
        if let Some(v) = self.vert_space {
            settings.v_spacing = v;
        }
        if let Some(s) = self.horiz_space {
            settings.h_spacing = s;
        }
        if self.sort_by_name {
            settings.sort_key = SortKey::ByName;
        } else if self.sort_by_id {
            settings.sort_key = SortKey::ById;
        }
        settings
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    check_paths(cli.action, &cli.input_file, cli.output_file.as_deref())?;

    let mut engine = SettingsEngine::new(
        cli.config
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
    );
    let settings = cli.grid_settings(engine.load()?);
    if cli.save_settings {
        engine.store(settings.clone())?;
        println!("Saved grid settings to {}", engine.get_config_path());
    }
    let app = App::new(settings);

    let mut doc = load_document(&cli.input_file)?;

    match cli.action {
        Action::ListGroups => {
            let groups = app.list_groups(&doc, cli.window, app.settings.sort_key)?;
            println!("Found {} groups:", groups.len());
            for group in &groups {
                println!("{}\t{}", group.id, group.title);
            }
        }
        Action::PrettifyGrid => {
            let output = cli
                .output_file
                .as_deref()
                .ok_or(sessionfiddle::types::errors::ConvertError::MissingOutput)?;
            let report = app.prettify_grid(&mut doc, cli.window, output)?;
            println!(
                "Successfully wrote {} tab groups to file {} with the following sizes:",
                report.groups,
                report.output.display()
            );
            println!("Group width {} px", report.settings.box_width);
            println!("Group height {} px", report.settings.box_height);
            println!("Vertical spacing {} px", report.settings.v_spacing);
            println!("Horizontal spacing {} px", report.settings.h_spacing);
        }
        Action::ExportUzbl => {
            let dir = cli
                .output_file
                .clone()
                .unwrap_or_else(|| PathBuf::from("uzbl_converted"));
            let written = app.export_uzbl(&doc, cli.window, &dir)?;
            println!(
                "... done creating {} files! They were written in {}",
                written.len(),
                dir.display()
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
