use clap::{Args, Subcommand, Parser};
use std::path::PathBuf;

/// Bundle the entry module with esbuild and copy the static assets next to it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
  /// Command (`build` by default)
  #[command(subcommand)]
  pub(crate) r#type: Option<PipelineExecType>,
  /// Verbose
  #[arg(short, global = true)]
  pub(crate) verbose: bool,
  /// Specify project folder (current folder by default)
  #[arg(short = 'C', long, global = true)]
  pub(crate) project_dir: Option<PathBuf>,
  /// Read options from the JSON file instead of built-in ones
  #[arg(long, global = true)]
  pub(crate) config: Option<PathBuf>,
  /// Specify `esbuild` executable
  #[arg(long, global = true)]
  pub(crate) esbuild: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum PipelineExecType {
  /// Build the bundle and copy the assets
  Build(BuildArgs),
  /// Print the effective options
  Cat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BuildArgs {
  /// Disable progress output
  #[arg(short, long)]
  pub(crate) silent: bool,
  /// Don't capture bundler output, pass it straight to the terminal
  #[arg(short = 't', long)]
  pub(crate) no_pipe: bool,
}
