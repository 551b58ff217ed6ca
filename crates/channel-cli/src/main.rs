use anyhow::Result;
use channel_cli::{
    init_logging, load_config, render_check, render_generate, render_layout, write_output,
    OutputFormat,
};
use channel_datagen::Quarter;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "channel-dash")]
#[command(about = "Deterministic mock data for the channel partner dashboard", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every dataset and print it
    Generate(GenerateArgs),
    /// Bind the widget catalog to generated data and print it as JSON
    Layout(LayoutArgs),
    /// Generate, validate and summarise
    Check(SourceArgs),
}

#[derive(Args)]
struct SourceArgs {
    /// Random seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u32>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct LayoutArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Quarter shown by the treemap widget
    #[arg(short, long, default_value = "Q3")]
    quarter: Quarter,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => {
            let config = load_config(args.source.config.as_deref(), args.source.seed)?;
            let content = render_generate(config, args.format, args.compact)?;
            write_output(&content, args.output.as_deref())
        }
        Commands::Layout(args) => {
            let config = load_config(args.source.config.as_deref(), args.source.seed)?;
            let content = render_layout(config, args.quarter)?;
            write_output(&content, args.output.as_deref())
        }
        Commands::Check(args) => {
            let config = load_config(args.config.as_deref(), args.seed)?;
            let report = render_check(config)?;
            write_output(&report, None)
        }
    }
}
