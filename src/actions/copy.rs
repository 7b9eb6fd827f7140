use crate::configs::AssetCopy;
use crate::entities::{environment::BuildEnvironment, traits::Execute};
use crate::errors::PipelineError;
use crate::rw::copy_file;

pub(crate) struct CopyAssetsAction<'a> {
  pub(crate) assets: &'a [AssetCopy],
}

impl Execute for CopyAssetsAction<'_> {
  /// Копирует файлы по одному; уже скопированные при ошибке не откатываются.
  fn execute(&self, env: BuildEnvironment) -> anyhow::Result<Vec<String>> {
    for asset in self.assets {
      let from = env.project_dir.join(&asset.from);
      let to = env.project_dir.join(&asset.to);

      let bytes = copy_file(&from, &to).map_err(|source| PipelineError::AssetCopy {
        from: asset.from.clone(),
        to: asset.to.clone(),
        source,
      })?;

      log::debug!("copied {} -> {} ({} bytes)", asset.from.display(), asset.to.display(), bytes);
    }

    Ok(vec![])
  }
}
