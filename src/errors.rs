use std::path::PathBuf;
use thiserror::Error;

/// Ошибки пайплайна сборки.
#[derive(Error, Debug)]
pub(crate) enum PipelineError {
  /// Конфигурация не прошла проверку.
  #[error("configuration is invalid: {reason}")]
  InvalidConfig { reason: String },

  /// Бандлер не удалось запустить (нет исполняемого файла, нет прав и т.д.).
  #[error("can't start the bundler `{}` due to: {source}", .program.display())]
  BundlerSpawn {
    program: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// Бандлер завершился с ошибкой.
  #[error("bundling `{}` failed ({status})", .entry.display())]
  BundleFailed {
    entry: PathBuf,
    status: String,
    output: Vec<String>,
  },

  /// Не удалось скопировать вспомогательный файл.
  #[error("can't copy `{}` to `{}` due to: {source}", .from.display(), .to.display())]
  AssetCopy {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
