use std::path::{Path, PathBuf};

pub(crate) fn get_current_working_dir() -> std::io::Result<PathBuf> {
  std::env::current_dir()
}

/// Делает путь абсолютным относительно текущей папки, не обращаясь к файловой системе.
pub(crate) fn absolute(path: impl AsRef<Path>) -> std::io::Result<PathBuf> {
  std::path::absolute(path.as_ref())
}
