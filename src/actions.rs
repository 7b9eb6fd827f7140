pub(crate) mod bundle;
pub(crate) mod copy;

use crate::actions::{bundle::BundleAction, copy::CopyAssetsAction};
use crate::entities::{environment::BuildEnvironment, traits::Execute};

pub(crate) struct DescribedAction<'a> {
  pub(crate) title: &'static str,
  pub(crate) action: Action<'a>,
}

pub(crate) enum Action<'a> {
  /// Сборка бандла внешним бандлером
  Bundle(BundleAction<'a>),
  /// Копирование файлов, не требующих обработки
  CopyAssets(CopyAssetsAction<'a>),
}

impl Execute for Action<'_> {
  fn execute(&self, env: BuildEnvironment) -> anyhow::Result<Vec<String>> {
    match self {
      Action::Bundle(a) => a.execute(env),
      Action::CopyAssets(a) => a.execute(env),
    }
  }
}
