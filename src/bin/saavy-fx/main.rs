//! saavy-fx - plan a sound effect and print what it schedules
//!
//! Run with: cargo run -- --preset coin

mod cli;
mod report;

use clap::Parser;
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use simple_logger::SimpleLogger;

use cli::Args;
use report::Report;
use saavy_fx::{presets, EffectSettings, FxConfig, FxPlayer};

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    let args = Args::parse();
    SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .wrap_err("failed to install logger")?;

    if args.list_presets {
        for name in presets::NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let settings = load_settings(&args)?;

    let config = FxConfig::default();
    let mut player = FxPlayer::new(config.clone());
    let mut instructions = Vec::new();
    let played = player.play_recorded(&settings, args.start, &mut instructions);
    let report = Report::new(&settings, &config, &player, played, instructions, args.start);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_table();
    }

    Ok(())
}

fn load_settings(args: &Args) -> EyreResult<EffectSettings> {
    if let Some(name) = &args.preset {
        return presets::by_name(name).ok_or_else(|| {
            eyre!(
                "unknown preset {name:?} (available: {})",
                presets::NAMES.join(", ")
            )
        });
    }

    let path = args
        .settings_path
        .as_ref()
        .ok_or_else(|| eyre!("pass a settings file or --preset NAME"))?;

    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    EffectSettings::from_json(&json)
        .wrap_err_with(|| format!("invalid settings in {}", path.display()))
}
