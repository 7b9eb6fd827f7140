use std::path::Path;

use crate::cmd::BuildArgs;
use crate::configs::PipelineOptions;
use crate::entities::{environment::BuildEnvironment, esbuild::EsbuildCommand};
use crate::pipelines::execute_pipeline;
use crate::utils::absolute;

pub(crate) fn build(
  options: &PipelineOptions,
  project_dir: &Path,
  esbuild: Option<&Path>,
  args: &BuildArgs,
) -> anyhow::Result<()> {
  // Путь из командной строки считается от текущей папки, путь из файла настроек - от папки проекта.
  // Голое имя ищется в `PATH`.
  let explicit = match esbuild {
    Some(path) if path.components().count() > 1 => Some(absolute(path)?),
    Some(path) => Some(path.to_path_buf()),
    None => options.esbuild.clone(),
  };
  let bundler = EsbuildCommand::locate(explicit.as_deref(), project_dir);
  log::debug!("bundler: {}", bundler.program.display());

  let env = BuildEnvironment {
    project_dir,
    silent_build: args.silent,
    no_pipe: args.no_pipe,
  };

  execute_pipeline(options, env, &bundler)
}
