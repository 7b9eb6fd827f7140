use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::configs::BuildConfiguration;
use crate::entities::environment::BuildEnvironment;
use crate::entities::traits::Bundle;
use crate::errors::PipelineError;
use crate::i18n;

/// Запуск `esbuild` как внешней команды.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EsbuildCommand {
  pub(crate) program: PathBuf,
}

impl EsbuildCommand {
  /// Выбирает исполняемый файл `esbuild`.
  ///
  /// Порядок: явно указанный путь, затем `node_modules/.bin/esbuild` проекта, затем `esbuild` из `PATH`.
  pub(crate) fn locate(explicit: Option<&Path>, project_dir: &Path) -> Self {
    let program = match explicit {
      Some(path) if path.components().count() > 1 && path.is_relative() => project_dir.join(path),
      Some(path) => path.to_path_buf(),
      None => {
        let local = project_dir.join("node_modules").join(".bin").join("esbuild");
        if local.is_file() { local } else { PathBuf::from("esbuild") }
      },
    };

    Self { program }
  }

  pub(crate) fn args(config: &BuildConfiguration, log_level: &str) -> Vec<String> {
    let mut args = vec![config.entry.display().to_string()];

    if config.bundle { args.push("--bundle".into()); }
    args.push(format!("--outfile={}", config.outfile.display()));
    args.push(format!("--format={}", config.format.as_str()));

    let targets = config.target.iter().map(|t| t.trim()).filter(|t| !t.is_empty()).collect::<Vec<_>>();
    args.push(format!("--target={}", targets.join(",")));

    for (symbol, value) in &config.define {
      args.push(format!("--define:{}={}", symbol, value));
    }

    if config.minify { args.push("--minify".into()); }
    args.push(format!("--log-level={}", log_level));

    args
  }
}

impl Bundle for EsbuildCommand {
  fn bundle(&self, config: &BuildConfiguration, env: BuildEnvironment) -> anyhow::Result<Vec<String>> {
    let log_level = if log::log_enabled!(log::Level::Debug) { "info" } else { "warning" };
    let args = Self::args(config, log_level);

    let cmd_info = format!("{} {}", self.program.display(), args.join(" "));
    log::debug!("running `{}` in {}", cmd_info, env.project_dir.display());

    let mut cmd = Command::new(&self.program);
    cmd.current_dir(env.project_dir).args(&args);

    if !env.no_pipe { cmd.stdout(Stdio::piped()).stderr(Stdio::piped()); }

    let child = cmd.spawn().map_err(|source| PipelineError::BundlerSpawn { program: self.program.clone(), source })?;

    // Единственная точка ожидания: дальше пайплайн идёт только после завершения бандлера
    let (status, output) = if env.no_pipe {
      let mut child = child;
      (child.wait()?, vec![])
    } else {
      let command_output = child.wait_with_output()?;
      let output = compose_output(
        &cmd_info,
        &command_output.stdout,
        &command_output.stderr,
        command_output.status.success(),
      );
      (command_output.status, output)
    };

    if !status.success() {
      return Err(PipelineError::BundleFailed {
        entry: config.entry.clone(),
        status: status.to_string(),
        output,
      }.into())
    }

    Ok(output)
  }
}

fn compose_output(
  cmd_info: &str,
  stdout: &[u8],
  stderr: &[u8],
  success: bool,
) -> Vec<String> {
  let stdout = String::from_utf8_lossy(&strip_ansi_escapes::strip(stdout)).into_owned();
  let stderr = String::from_utf8_lossy(&strip_ansi_escapes::strip(stderr)).into_owned();

  let mut output = vec![];

  if stdout.trim().is_empty() && stderr.trim().is_empty() { return output }

  output.push(format!("{} `{}`:", i18n::EXECUTING, cmd_info.green()));
  for line in stdout.lines() {
    output.push(format!(">>> {}", line));
  }
  if !stderr.trim().is_empty() && !success {
    output.push(i18n::ERRORS.red().bold().to_string());
  }
  for line in stderr.lines() {
    output.push(format!(">>> {}", line));
  }

  while output.last().is_some_and(|l| l.trim() == ">>>") { output.pop(); }

  output
}
