use crate::configs::BuildConfiguration;
use crate::entities::{
  environment::BuildEnvironment,
  traits::{Bundle, Execute},
};

pub(crate) struct BundleAction<'a> {
  pub(crate) config: &'a BuildConfiguration,
  pub(crate) bundler: &'a dyn Bundle,
}

impl Execute for BundleAction<'_> {
  fn execute(&self, env: BuildEnvironment) -> anyhow::Result<Vec<String>> {
    self.bundler.bundle(self.config, env)
  }
}
