//! Settings loader for ng-cleaner.
//!
//! Loads and merges:
//! - Project settings: `<PRJ_ROOT>/.ng-cleaner.yaml`
//! - User overrides:   `<PRJ_CONFIG_HOME>/ng-cleaner/settings.yaml`
//!
//! Merge precedence is user over project. Every key is optional.

use std::path::{Path, PathBuf};

use cleaner_edit::{ConstructorStyle, ImportStyle, QuoteStyle};
use serde::Deserialize;

const PROJECT_SETTINGS_FILE: &str = ".ng-cleaner.yaml";
const USER_SETTINGS_RELATIVE_PATH: &str = "ng-cleaner/settings.yaml";
const DEFAULT_CONFIG_HOME_RELATIVE_PATH: &str = ".config";

/// Largest source file read when `io.max_file_size` is unset.
pub(crate) const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub(crate) imports: ImportSettings,
    #[serde(default)]
    pub(crate) constructor: ConstructorSettings,
    #[serde(default)]
    pub(crate) io: IoSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ImportSettings {
    pub(crate) quote: Option<QuoteStyle>,
    pub(crate) semicolons: Option<bool>,
    pub(crate) align_from: Option<bool>,
    pub(crate) separate_groups: Option<bool>,
    pub(crate) framework_prefixes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ConstructorSettings {
    pub(crate) indent_unit: Option<String>,
    pub(crate) brace_on_new_line: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct IoSettings {
    pub(crate) max_file_size: Option<u64>,
}

impl Settings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            imports: self.imports.merge(overlay.imports),
            constructor: self.constructor.merge(overlay.constructor),
            io: self.io.merge(overlay.io),
        }
    }

    pub(crate) fn import_style(&self) -> ImportStyle {
        let defaults = ImportStyle::default();
        let imports = &self.imports;
        ImportStyle {
            quote: imports.quote.unwrap_or(defaults.quote),
            semicolons: imports.semicolons.unwrap_or(defaults.semicolons),
            align_from: imports.align_from.unwrap_or(defaults.align_from),
            separate_groups: imports.separate_groups.unwrap_or(defaults.separate_groups),
            framework_prefixes: imports
                .framework_prefixes
                .clone()
                .unwrap_or(defaults.framework_prefixes),
        }
    }

    pub(crate) fn constructor_style(&self) -> ConstructorStyle {
        let defaults = ConstructorStyle::default();
        ConstructorStyle {
            indent_unit: self
                .constructor
                .indent_unit
                .clone()
                .unwrap_or(defaults.indent_unit),
            brace_on_new_line: self
                .constructor
                .brace_on_new_line
                .unwrap_or(defaults.brace_on_new_line),
        }
    }

    pub(crate) fn max_file_size(&self) -> u64 {
        self.io.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }
}

impl ImportSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            quote: overlay.quote.or(self.quote),
            semicolons: overlay.semicolons.or(self.semicolons),
            align_from: overlay.align_from.or(self.align_from),
            separate_groups: overlay.separate_groups.or(self.separate_groups),
            framework_prefixes: overlay.framework_prefixes.or(self.framework_prefixes),
        }
    }
}

impl ConstructorSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            indent_unit: overlay.indent_unit.or(self.indent_unit),
            brace_on_new_line: overlay.brace_on_new_line.or(self.brace_on_new_line),
        }
    }
}

impl IoSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            max_file_size: overlay.max_file_size.or(self.max_file_size),
        }
    }
}

/// Load merged settings. `conf_home` is the `--conf` directory, if any.
pub(crate) fn load_settings(conf_home: Option<&Path>) -> Settings {
    let (project_path, user_path) = settings_paths(conf_home);
    load_settings_from_paths(&project_path, &user_path)
}

fn settings_paths(conf_home: Option<&Path>) -> (PathBuf, PathBuf) {
    let root = project_root();
    let project_path = root.join(PROJECT_SETTINGS_FILE);
    let user_path = resolve_config_home(&root, conf_home).join(USER_SETTINGS_RELATIVE_PATH);
    (project_path, user_path)
}

fn load_settings_from_paths(project: &Path, user: &Path) -> Settings {
    load_one(project).merge(load_one(user))
}

fn load_one(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return Settings::default();
        }
    };
    if raw.trim().is_empty() {
        return Settings::default();
    }
    match serde_yaml::from_str::<Settings>(&raw) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), "loaded settings file");
            value
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            Settings::default()
        }
    }
}

fn project_root() -> PathBuf {
    env_path("PRJ_ROOT")
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_config_home(project_root: &Path, conf_home: Option<&Path>) -> PathBuf {
    let configured = conf_home
        .filter(|path| !path.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| env_path("PRJ_CONFIG_HOME"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_HOME_RELATIVE_PATH));
    absolutize(project_root, configured)
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn absolutize(project_root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    }
}
