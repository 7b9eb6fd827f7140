use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use crate::errors::PipelineError;
use crate::i18n;

static DEFINE_KEY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").expect("define key regex is valid")
});

/// Формат выходного модуля.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
  #[default]
  Esm,
  Cjs,
  Iife,
}

impl OutputFormat {
  pub(crate) fn as_str(&self) -> &'static str {
    match self {
      OutputFormat::Esm => "esm",
      OutputFormat::Cjs => "cjs",
      OutputFormat::Iife => "iife",
    }
  }
}

/// Конфигурация сборки бандла.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct BuildConfiguration {
  /// Точка входа.
  pub(crate) entry: PathBuf,
  /// Выходной файл.
  pub(crate) outfile: PathBuf,
  /// Собирать ли все зависимости в один файл.
  pub(crate) bundle: bool,
  pub(crate) format: OutputFormat,
  /// Целевые окружения (`es2020`, `chrome58` и т.д.).
  pub(crate) target: Vec<String>,
  pub(crate) minify: bool,
  /// Подстановки времени компиляции: символ -> литерал.
  pub(crate) define: BTreeMap<String, String>,
}

impl Default for BuildConfiguration {
  fn default() -> Self {
    let mut define = BTreeMap::new();
    define.insert("process.env.NODE_ENV".to_string(), r#""production""#.to_string());

    Self {
      entry: PathBuf::from("./src/index.jpeg.js"),
      outfile: PathBuf::from("./dist/index.jpeg.js"),
      bundle: true,
      format: OutputFormat::Esm,
      target: vec!["es2020".into()],
      minify: false,
      define,
    }
  }
}

impl BuildConfiguration {
  pub(crate) fn validate(&self) -> anyhow::Result<()> {
    let invalid = |reason: String| PipelineError::InvalidConfig { reason };

    if self.entry.as_os_str().is_empty() { return Err(invalid(i18n::CONFIG_EMPTY_ENTRY.into()).into()) }
    if self.outfile.as_os_str().is_empty() { return Err(invalid(i18n::CONFIG_EMPTY_OUTFILE.into()).into()) }
    if self.target.iter().all(|t| t.trim().is_empty()) { return Err(invalid(i18n::CONFIG_EMPTY_TARGET.into()).into()) }

    for (key, value) in &self.define {
      if !DEFINE_KEY.is_match(key) {
        return Err(invalid(i18n::CONFIG_BAD_DEFINE_KEY.replace("{}", key)).into())
      }
      if serde_json::from_str::<serde_json::Value>(value).is_err() && !DEFINE_KEY.is_match(value) {
        return Err(invalid(i18n::CONFIG_BAD_DEFINE_VALUE.replace("{1}", value).replace("{2}", key)).into())
      }
    }

    Ok(())
  }
}

/// Копирование вспомогательного файла без обработки.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub(crate) struct AssetCopy {
  pub(crate) from: PathBuf,
  pub(crate) to: PathBuf,
}

impl AssetCopy {
  pub(crate) fn new(from: &str, to: &str) -> Self {
    Self { from: PathBuf::from(from), to: PathBuf::from(to) }
  }
}

/// Настройки пайплайна.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct PipelineOptions {
  pub(crate) build: BuildConfiguration,
  /// Файлы, копируемые в выходную папку после сборки.
  pub(crate) assets: Vec<AssetCopy>,
  /// Путь к исполняемому файлу `esbuild`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) esbuild: Option<PathBuf>,
}

impl Default for PipelineOptions {
  fn default() -> Self {
    Self {
      build: BuildConfiguration::default(),
      // worker.js, dcm2niix.wasm и dcm2niix.js не требуют обработки бандлером
      assets: vec![
        AssetCopy::new("./src/worker.jpeg.js", "./dist/worker.jpeg.js"),
        AssetCopy::new("./src/dcm2niix.jpeg.wasm", "./dist/dcm2niix.jpeg.wasm"),
        AssetCopy::new("./src/dcm2niix.jpeg.js", "./dist/dcm2niix.jpeg.js"),
      ],
      esbuild: None,
    }
  }
}

/// Путь без `.`-компонентов: `./dist/a.js` и `dist/a.js` указывают на один файл.
fn normalized(path: &Path) -> PathBuf {
  path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

impl PipelineOptions {
  pub(crate) fn validate(&self) -> anyhow::Result<()> {
    self.build.validate()?;

    let invalid = |reason: String| PipelineError::InvalidConfig { reason };
    let outfile = normalized(&self.build.outfile);

    for asset in &self.assets {
      if asset.from.as_os_str().is_empty() || asset.to.as_os_str().is_empty() {
        return Err(invalid(i18n::CONFIG_EMPTY_ASSET_PATH.into()).into())
      }

      let to = normalized(&asset.to);
      if normalized(&asset.from) == to {
        return Err(invalid(i18n::CONFIG_ASSET_ONTO_ITSELF.replace("{}", &asset.from.display().to_string())).into())
      }
      if to == outfile {
        return Err(invalid(i18n::CONFIG_ASSET_OVER_BUNDLE.replace("{}", &asset.to.display().to_string())).into())
      }
    }

    Ok(())
  }
}
