use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Plan a sound effect and print its control schedule")]
pub struct Args {
    /// Effect settings (JSON)
    #[arg(value_name = "SETTINGS_PATH", conflicts_with = "preset")]
    pub settings_path: Option<PathBuf>,

    /// Use a built-in preset instead of a settings file
    #[arg(long)]
    pub preset: Option<String>,

    /// List built-in presets and exit
    #[arg(long, default_value_t = false)]
    pub list_presets: bool,

    /// Time the sound starts at, in seconds
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// Print JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
