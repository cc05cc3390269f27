//! Character birth for a MAngband-style client
//!
//! Main entry point: runs the birth screens in the terminal, or headless
//! against a key script.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;

use mb_core::birth::{BirthMachine, BirthOutcome, ScriptedUi};
use mb_core::player::CharacterDraft;
use mb_core::{BirthCatalog, BirthRng};
use mb_data::{Catalog, load_prior};
use mb_tui::{Config, CrosstermEvents, TerminalGuard, TerminalUi, Theme, logging};

/// Character birth screens
#[derive(Parser, Debug)]
#[command(name = "mbbirth")]
#[command(author, version, about = "Create a character for a MAngband-style server", long_about = None)]
struct Args {
    /// Character name
    #[arg(short = 'u', long = "name", default_value = "Adventurer")]
    name: String,

    /// Race and class catalog (JSON); the built-in tables are used otherwise
    #[arg(short = 'c', long = "catalog")]
    catalog: Option<PathBuf>,

    /// Previous character record (JSON) offered for quick start
    #[arg(short = 'p', long = "prior")]
    prior: Option<PathBuf>,

    /// Seed for the random menu picks
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Use the light background theme
    #[arg(long = "light")]
    light: bool,

    /// Directory for mbbirth.log
    #[arg(long = "log-dir")]
    log_dir: Option<PathBuf>,

    /// Run headless against a key script, e.g. "a<enter>*<enter>"
    #[arg(long = "script")]
    script: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(dir) = &args.log_dir {
        config.log_dir = dir.clone();
    }
    let _log_guard = logging::init(&config.log_dir).with_context(|| {
        format!("failed to set up logging in {}", config.log_dir.display())
    })?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    let prior = match &args.prior {
        Some(path) => Some(
            load_prior(path)
                .with_context(|| format!("failed to load prior character {}", path.display()))?,
        ),
        None => None,
    };

    let rng = args.seed.map(BirthRng::new).unwrap_or_else(BirthRng::from_entropy);
    info!(seed = rng.seed(), name = %args.name, "starting birth");

    let machine =
        BirthMachine::new(&catalog, rng, CharacterDraft::new(args.name.clone())).with_prior(prior);

    if let Some(script) = &args.script {
        let mut ui = ScriptedUi::from_script(script).context("invalid key script")?;
        let outcome = machine.run(&mut ui).context("scripted birth failed")?;
        let report = match &outcome {
            BirthOutcome::Completed(draft) => json!({ "outcome": "completed", "draft": draft }),
            BirthOutcome::Abandoned => json!({ "outcome": "abandoned" }),
            BirthOutcome::Quit => json!({ "outcome": "quit" }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let theme = if args.light { Theme::light() } else { Theme::detect() };

    // Restore the terminal before reporting
    let outcome = {
        let mut guard = TerminalGuard::enter().context("failed to set up terminal")?;
        let terminal = guard.take().context("terminal unavailable")?;
        let mut ui = TerminalUi::new(terminal, CrosstermEvents, theme);
        machine.run(&mut ui)
    }
    .context("birth failed")?;

    match outcome {
        BirthOutcome::Completed(draft) => print_character(&catalog, &draft),
        BirthOutcome::Abandoned => println!("Character creation abandoned."),
        BirthOutcome::Quit => info!("quit during birth"),
    }

    Ok(())
}

fn print_character(catalog: &Catalog, draft: &CharacterDraft) {
    let race = draft
        .race
        .and_then(|id| catalog.race(id))
        .map_or("?", |race| race.name.as_str());
    let class = draft
        .class
        .and_then(|id| catalog.class(id))
        .map_or("?", |class| class.name.as_str());
    let sex = draft.sex.map_or("?", |sex| sex.title());

    println!("{} the {} {} {}", draft.name, sex, race, class);
    if let Some(stats) = &draft.stats {
        println!("Stats: {:?} ({})", stats.to_packet(), stats.method);
    }
}
