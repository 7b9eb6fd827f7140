use colored::Colorize;
use std::io::{stdout, Write};
use std::time::Instant;

use crate::actions::{Action, DescribedAction, bundle::BundleAction, copy::CopyAssetsAction};
use crate::configs::PipelineOptions;
use crate::entities::{
  environment::BuildEnvironment,
  traits::{Bundle, Execute},
};
use crate::errors::PipelineError;
use crate::i18n;

pub(crate) static PIPELINE_TITLE: &str = "build";

/// Сборка: сначала бандл, затем копирование файлов.
///
/// Копирование запускается только после успешной сборки бандла. Любая ошибка прерывает пайплайн.
pub(crate) fn execute_pipeline(
  options: &PipelineOptions,
  env: BuildEnvironment,
  bundler: &dyn Bundle,
) -> anyhow::Result<()> {
  options.validate()?;

  let actions = [
    DescribedAction {
      title: i18n::ACTION_BUNDLE,
      action: Action::Bundle(BundleAction { config: &options.build, bundler }),
    },
    DescribedAction {
      title: i18n::ACTION_COPY_ASSETS,
      action: Action::CopyAssets(CopyAssetsAction { assets: &options.assets }),
    },
  ];

  if !env.silent_build { println!("{}", i18n::STARTING_PIPELINE.replace("{}", PIPELINE_TITLE)); }
  let pipeline_started = Instant::now();

  let total = actions.len();
  for (i, action) in actions.iter().enumerate() {
    let cntr = i + 1;
    if !env.silent_build {
      if !env.no_pipe {
        print!("[{}/{}] {} `{}`...", cntr, total, i18n::STARTING_ACTION, action.title.blue().italic());
      } else {
        println!("[{}/{}] {} `{}`...", cntr, total, i18n::STARTING_ACTION, action.title.blue().italic());
      }
      stdout().flush()?;
    }
    let now = Instant::now();

    let result = action.action.execute(env);
    let elapsed = now.elapsed();
    log::debug!("action `{}` finished in {:.2?}", action.title, elapsed);

    match result {
      Ok(output) => {
        if !env.silent_build { println!("{} ({}).", i18n::DONE, format!("{:.2?}", elapsed).green()); }
        // Предупреждения бандлера показываются и при успешной сборке
        for line in output { eprintln!("{}", line); }
      },
      Err(e) => {
        if !env.silent_build { println!("{}", i18n::GOT_ERROR.red().bold()); }
        if let Some(PipelineError::BundleFailed { output, .. }) = e.downcast_ref::<PipelineError>() {
          for line in output { eprintln!("{}", line); }
        }
        return Err(e)
      },
    }
  }

  log::debug!("pipeline `{}` finished in {:.2?}", PIPELINE_TITLE, pipeline_started.elapsed());
  if !env.silent_build { println!("{}", i18n::BUILD_COMPLETED); }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::configs::{AssetCopy, BuildConfiguration};
  use pretty_assertions::assert_eq;
  use std::cell::Cell;
  use std::fs;
  use std::path::{Path, PathBuf};

  /// Бандлер-заглушка: переносит точку входа в выходной файл с подстановкой `define`.
  /// Ошибка, если точка входа импортирует несуществующий модуль.
  struct FakeBundler {
    calls: Cell<usize>,
  }

  impl FakeBundler {
    fn new() -> Self { Self { calls: Cell::new(0) } }
  }

  impl Bundle for FakeBundler {
    fn bundle(&self, config: &BuildConfiguration, env: BuildEnvironment) -> anyhow::Result<Vec<String>> {
      self.calls.set(self.calls.get() + 1);

      let source = fs::read_to_string(env.project_dir.join(&config.entry))?;
      if source.contains("./missing") {
        return Err(PipelineError::BundleFailed {
          entry: config.entry.clone(),
          status: "exit status: 1".into(),
          output: vec![r#">>> X [ERROR] Could not resolve "./missing""#.into()],
        }.into())
      }

      let mut bundled = source;
      for (symbol, value) in &config.define { bundled = bundled.replace(symbol, value); }

      let outfile = env.project_dir.join(&config.outfile);
      fs::create_dir_all(outfile.parent().unwrap())?;
      fs::write(outfile, bundled)?;
      Ok(vec![])
    }
  }

  fn project(entry: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("index.jpeg.js"), entry).unwrap();
    fs::write(src.join("worker.jpeg.js"), "importScripts('./dcm2niix.jpeg.js');\n").unwrap();
    fs::write(src.join("dcm2niix.jpeg.wasm"), [0x00u8, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00]).unwrap();
    fs::write(src.join("dcm2niix.jpeg.js"), "export default function Module() {}\n").unwrap();
    dir
  }

  fn env(dir: &Path) -> BuildEnvironment<'_> {
    BuildEnvironment { project_dir: dir, silent_build: true, no_pipe: false }
  }

  fn dist_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir.join("dist")) else { return vec![] };
    let mut files = entries.map(|e| e.unwrap().path()).collect::<Vec<_>>();
    files.sort();
    files
  }

  const ENTRY: &str = "if (process.env.NODE_ENV !== \"production\") console.log('dev');\nexport const ready = true;\n";

  #[test]
  fn writes_bundle_and_three_assets() {
    let dir = project(ENTRY);
    let bundler = FakeBundler::new();

    execute_pipeline(&PipelineOptions::default(), env(dir.path()), &bundler).unwrap();

    assert_eq!(bundler.calls.get(), 1);
    let names = dist_files(dir.path())
      .iter()
      .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
      .collect::<Vec<_>>();
    assert_eq!(names, vec!["dcm2niix.jpeg.js", "dcm2niix.jpeg.wasm", "index.jpeg.js", "worker.jpeg.js"]);

    for name in ["worker.jpeg.js", "dcm2niix.jpeg.wasm", "dcm2niix.jpeg.js"] {
      assert_eq!(
        fs::read(dir.path().join("dist").join(name)).unwrap(),
        fs::read(dir.path().join("src").join(name)).unwrap(),
      );
    }

    let bundle = fs::read_to_string(dir.path().join("dist/index.jpeg.js")).unwrap();
    assert!(!bundle.contains("process.env.NODE_ENV"));
    assert!(bundle.contains("\"production\""));
  }

  #[test]
  fn bundle_failure_skips_copies() {
    let dir = project("import { x } from './missing';\n");

    let err = execute_pipeline(&PipelineOptions::default(), env(dir.path()), &FakeBundler::new()).unwrap_err();

    assert!(matches!(err.downcast_ref::<PipelineError>(), Some(PipelineError::BundleFailed { .. })));
    assert!(dist_files(dir.path()).is_empty());
  }

  #[test]
  fn missing_asset_fails_the_pipeline() {
    let dir = project(ENTRY);
    fs::remove_file(dir.path().join("src/worker.jpeg.js")).unwrap();

    let err = execute_pipeline(&PipelineOptions::default(), env(dir.path()), &FakeBundler::new()).unwrap_err();

    match err.downcast_ref::<PipelineError>() {
      Some(PipelineError::AssetCopy { from, .. }) => assert_eq!(from, &PathBuf::from("./src/worker.jpeg.js")),
      other => panic!("unexpected error: {:?}", other),
    }
    assert!(dir.path().join("dist/index.jpeg.js").exists());
  }

  #[test]
  fn invalid_options_never_reach_the_bundler() {
    let dir = project(ENTRY);
    let bundler = FakeBundler::new();
    let mut options = PipelineOptions::default();
    options.build.define.insert("process..env".into(), "1".into());

    let err = execute_pipeline(&options, env(dir.path()), &bundler).unwrap_err();

    assert!(matches!(err.downcast_ref::<PipelineError>(), Some(PipelineError::InvalidConfig { .. })));
    assert_eq!(bundler.calls.get(), 0);
  }

  #[test]
  fn repeated_runs_are_identical() {
    let dir = project(ENTRY);

    execute_pipeline(&PipelineOptions::default(), env(dir.path()), &FakeBundler::new()).unwrap();
    let first = dist_files(dir.path()).iter().map(|p| fs::read(p).unwrap()).collect::<Vec<_>>();

    execute_pipeline(&PipelineOptions::default(), env(dir.path()), &FakeBundler::new()).unwrap();
    let second = dist_files(dir.path()).iter().map(|p| fs::read(p).unwrap()).collect::<Vec<_>>();

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
  }

  #[test]
  fn custom_asset_list() {
    let dir = project(ENTRY);
    let mut options = PipelineOptions::default();
    options.assets = vec![AssetCopy::new("src/dcm2niix.jpeg.wasm", "dist/converter.wasm")];

    execute_pipeline(&options, env(dir.path()), &FakeBundler::new()).unwrap();

    assert_eq!(dist_files(dir.path()).len(), 2);
    assert!(dir.path().join("dist/converter.wasm").exists());
  }
}
