use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markov-says")]
#[command(author, version, about = "Caption meme templates with markov chain sentences")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON file with presets to use instead of the built-in ones
    #[arg(long, global = true, env = "MARKOV_SAYS_PRESETS")]
    pub presets: Option<PathBuf>,

    /// Directory holding one source text directory per preset
    #[arg(long, global = true, default_value = "corpus", env = "MARKOV_SAYS_CORPUS")]
    pub corpus_root: PathBuf,

    /// Seed the random generator, for repeatable output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one generated sentence
    Text(GenerateArgs),

    /// Print where and what to draw on a template, as JSON
    Caption {
        #[command(flatten)]
        generate: GenerateArgs,

        /// Directory saved images go in
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
    },

    /// List available presets
    #[command(alias = "ls")]
    Presets,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Preset name (e.g. jerma)
    pub preset: String,

    /// Read source text from this directory instead of the preset's
    #[arg(long, conflicts_with = "file")]
    pub source: Option<PathBuf>,

    /// Read source text from a single file instead of the preset's directory
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Number of words in a chain key
    #[arg(long)]
    pub state_size: Option<usize>,

    /// Keep going until at least this many steps, unless max is hit
    #[arg(long)]
    pub min: Option<usize>,

    /// Stop after this many steps
    #[arg(long)]
    pub max: Option<usize>,
}
