//! Catalog builder entry point.
//!
//! # Responsibility
//! - Build the icon and category catalogs from descriptor directories.
//! - Write the generated artifacts, replacing the previous output.
//!
//! Takes no flags; locations come from fixed defaults and `ICONPICK_*` env.

use iconpick_core::{build_catalog, init_cli_logging, write_artifacts, BuildConfig};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    match bootstrap().and_then(|config| run(&config)) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("iconpick build failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn bootstrap() -> Result<BuildConfig, String> {
    let root = std::env::current_dir().map_err(|err| format!("resolve current dir: {err}"))?;
    let config = BuildConfig::resolve(&root);
    let log_dir = config
        .log_dir
        .to_str()
        .ok_or_else(|| format!("log dir is not UTF-8: {}", config.log_dir.display()))?;
    init_cli_logging(&config.log_level, log_dir)?;
    Ok(config)
}

/// Builds and writes the catalog described by `config`; returns the summary
/// line printed on success.
fn run(config: &BuildConfig) -> Result<String, String> {
    config.check().map_err(|err| err.to_string())?;
    info!(
        "event=cli_start module=cli status=ok icons_dir={} categories_dir={} out_dir={}",
        config.icons_dir.display(),
        config.categories_dir.display(),
        config.out_dir.display()
    );

    let build =
        build_catalog(&config.icons_dir, &config.categories_dir).map_err(|err| err.to_string())?;
    write_artifacts(&build.catalog, &config.out_dir).map_err(|err| err.to_string())?;

    Ok(format!(
        "Generated data for {} icons and {} categories",
        build.catalog.icons().len(),
        build.catalog.categories().len()
    ))
}

#[cfg(test)]
mod tests {
    use super::run;
    use iconpick_core::BuildConfig;
    use std::fs;
    use std::path::Path;

    const ICON: &str = r#"{"$schema":"../icon.schema.json","contributors":[],"tags":["house"],"categories":["buildings"]}"#;
    const CATEGORY: &str = r#"{"$schema":"../category.schema.json","title":"Buildings","icon":"home"}"#;

    fn seed(root: &Path) {
        let icons = root.join("data/icons");
        let categories = root.join("data/categories");
        fs::create_dir_all(&icons).unwrap();
        fs::create_dir_all(&categories).unwrap();
        fs::write(icons.join("home.json"), ICON).unwrap();
        fs::write(icons.join("castle.json"), ICON).unwrap();
        fs::write(categories.join("buildings.json"), CATEGORY).unwrap();
    }

    fn config(root: &Path, out_dir: Option<&str>) -> BuildConfig {
        let out_dir = out_dir.map(str::to_string);
        BuildConfig::resolve_with(root, move |key| match key {
            "ICONPICK_OUT_DIR" => out_dir.clone(),
            _ => None,
        })
    }

    #[test]
    fn run_reports_summary_and_is_repeatable() {
        let root = tempfile::tempdir().unwrap();
        seed(root.path());
        let config = config(root.path(), None);

        let summary = run(&config).unwrap();
        assert_eq!(summary, "Generated data for 2 icons and 1 categories");
        let first = fs::read_to_string(config.out_dir.join("icons.json")).unwrap();

        assert_eq!(run(&config).unwrap(), summary);
        let second = fs::read_to_string(config.out_dir.join("icons.json")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_descriptor_fails_and_keeps_previous_output() {
        let root = tempfile::tempdir().unwrap();
        seed(root.path());
        let config = config(root.path(), None);
        run(&config).unwrap();
        let previous = fs::read_to_string(config.out_dir.join("icons.json")).unwrap();

        fs::write(config.icons_dir.join("broken.json"), "{not json").unwrap();
        let err = run(&config).unwrap_err();

        assert!(err.contains("broken.json"), "{err}");
        assert_eq!(
            fs::read_to_string(config.out_dir.join("icons.json")).unwrap(),
            previous
        );
    }

    #[test]
    fn out_dir_over_descriptors_is_refused() {
        let root = tempfile::tempdir().unwrap();
        seed(root.path());

        for out_dir in [".", "data"] {
            let err = run(&config(root.path(), Some(out_dir))).unwrap_err();
            assert!(err.contains("overlaps descriptor directory"), "{err}");
        }
        assert!(root.path().join("data/icons/home.json").exists());
        assert!(root.path().join("data/categories/buildings.json").exists());
    }
}
