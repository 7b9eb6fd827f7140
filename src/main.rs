#![warn(clippy::todo, clippy::unimplemented)]
#![deny(warnings)]

mod cmd;
mod configs;
mod errors;
mod i18n;
mod rw;
mod utils;

mod build;

mod actions;
mod pipelines;
mod entities;

use crate::build::build;
use crate::cmd::{BuildArgs, Cli, PipelineExecType};
use crate::configs::PipelineOptions;
use crate::rw::{init_logger, read_checked};
use crate::utils::{absolute, get_current_working_dir};

use clap::Parser;
use colored::Colorize;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[cfg(not(unix))]
compile_error!("`asset-pipeline` can't work with non-Unix systems.");

fn main() {
  std::panic::set_hook(Box::new(|e| {
    eprintln!();
    eprintln!("{}: {}", i18n::ERROR_OCCURED, e);
    std::process::exit(1);
  }));

  let args = Cli::parse();
  init_logger(args.verbose);

  if let Err(e) = run(args) {
    log::debug!("{:?}", e);
    eprintln!("{}: {:#}", i18n::ERROR_OCCURED.red().bold(), e);
    std::process::exit(1);
  }
}

fn run(args: Cli) -> anyhow::Result<()> {
  let project_dir = match &args.project_dir {
    Some(dir) => absolute(dir)?,
    None => get_current_working_dir()?,
  };

  // Настройки собираются заново при каждом запуске и дальше не меняются
  let options = match &args.config {
    Some(path) => read_checked::<PipelineOptions>(path)?,
    None => PipelineOptions::default(),
  };

  match args.r#type.unwrap_or(PipelineExecType::Build(BuildArgs::default())) {
    PipelineExecType::Build(build_args) => build(&options, &project_dir, args.esbuild.as_deref(), &build_args),
    PipelineExecType::Cat => {
      println!("{}", serde_json::to_string_pretty(&options)?);
      Ok(())
    },
  }
}
