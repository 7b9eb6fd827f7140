use std::path::Path;

#[derive(Clone, Copy)]
pub(crate) struct BuildEnvironment<'a> {
  /// Папка проекта; все относительные пути считаются от неё.
  pub(crate) project_dir: &'a Path,
  pub(crate) silent_build: bool,
  pub(crate) no_pipe: bool,
}
