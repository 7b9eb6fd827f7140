use crate::configs::BuildConfiguration;
use crate::entities::environment::BuildEnvironment;

pub(crate) trait Execute {
  fn execute(&self, env: BuildEnvironment) -> anyhow::Result<Vec<String>>;
}

/// Внешний бандлер.
pub(crate) trait Bundle {
  fn bundle(&self, config: &BuildConfiguration, env: BuildEnvironment) -> anyhow::Result<Vec<String>>;
}
