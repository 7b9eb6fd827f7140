use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::i18n;

pub(crate) fn init_logger(verbose: bool) {
  let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };

  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .format_timestamp(None)
    .init();
}

pub(crate) fn read_checked<T: DeserializeOwned>(filepath: impl AsRef<Path>) -> anyhow::Result<T> {
  let filepath = filepath.as_ref();
  let context = || i18n::CONFIG_READ_FAILED.replace("{}", &filepath.display().to_string());

  let file = File::open(filepath).with_context(context)?;
  let reader = BufReader::new(file);

  serde_json::from_reader(reader).with_context(context)
}

/// Побайтовое копирование файла целиком.
///
/// Папка назначения не создаётся: её отсутствие считается ошибкой.
/// Копирование файла в самого себя запрещено: `std::fs::copy` обнулил бы его.
pub(crate) fn copy_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> std::io::Result<u64> {
  let (from, to) = (from.as_ref(), to.as_ref());

  if to.exists() && std::fs::canonicalize(from)? == std::fs::canonicalize(to)? {
    return Err(std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      "source and destination are the same file",
    ))
  }

  std::fs::copy(from, to)
}
