use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use markov_says::caption::CaptionPlan;
use markov_says::config::{Preset, Presets};
use markov_says::{build_model, corpus, generate_text, Picker, RandomPicker};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::{Cli, Commands, GenerateArgs};

fn main() -> Result<()> {
    // Logs go to stderr, output to stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let presets = match &cli.presets {
        Some(path) => Presets::load(path)
            .with_context(|| format!("could not load presets from {}", path.display()))?,
        None => Presets::builtin(),
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut picker = RandomPicker::new(rng);

    match cli.command {
        Commands::Text(args) => {
            let (_, text) = generate(&presets, &cli.corpus_root, &args, &mut picker)?;
            println!("{text}");
        }
        Commands::Caption {
            generate: args,
            output_dir,
        } => {
            let (preset, text) = generate(&presets, &cli.corpus_root, &args, &mut picker)?;
            let plan = CaptionPlan::new(&preset, text, &output_dir, &mut picker)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Commands::Presets => {
            for p in presets.iter() {
                println!("{}\t{}\t{}", p.key, p.title, p.template.display());
            }
        }
    }

    Ok(())
}

/// Resolves the preset with any command line overrides, then builds a chain from its source text
/// and generates one sentence.
fn generate(
    presets: &Presets,
    corpus_root: &Path,
    args: &GenerateArgs,
    picker: &mut impl Picker,
) -> Result<(Preset, String)> {
    let mut preset = presets.get(&args.preset)?.clone();
    if let Some(state_size) = args.state_size {
        preset.state_size = state_size;
    }
    if let Some(min) = args.min {
        preset.min_length = min;
    }
    if let Some(max) = args.max {
        preset.max_length = max;
    }
    preset
        .validate()
        .with_context(|| format!("bad settings for preset {}", preset.key))?;

    let text = match (&args.file, &args.source) {
        (Some(file), _) => corpus::read_file(file)?,
        (None, Some(dir)) => corpus::read_dir(dir)?,
        (None, None) => corpus::read_category(corpus_root, &preset.source)?,
    };

    let chain = build_model(&text, preset.state_size)?;
    info!(
        preset = %preset.key,
        keys = chain.len(),
        starters = chain.starters().len(),
        "built chain"
    );

    let sentence = generate_text(
        &chain,
        preset.state_size,
        preset.min_length,
        preset.max_length,
        picker,
    )
    .context("could not generate a sentence")?;

    Ok((preset, sentence))
}
