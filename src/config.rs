use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::transform::TranslationBinding;

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.ts",
    "**/*.test.tsx",
    "**/*.test.js",
    "**/*.test.jsx",
    "**/*.spec.ts",
    "**/*.spec.tsx",
    "**/*.spec.js",
    "**/*.spec.jsx",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default = "default_messages_root", alias = "localesDir")]
    pub messages_root: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default)]
    pub translation: TranslationBinding,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**"]
        .map(String::from)
        .to_vec()
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_messages_root() -> String {
    "./src/locales".to_string()
}

fn default_primary_locale() -> String {
    "zh-CN".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: default_includes(),
            messages_root: default_messages_root(),
            primary_locale: default_primary_locale(),
            ignore_test_files: default_ignore_test_files(),
            translation: TranslationBinding::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or a translation name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Only patterns with wildcards are globs; `[id]` style directories stay literal.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        let binding = &self.translation;
        for (field, value) in [
            ("module", &binding.module),
            ("hook", &binding.hook),
            ("function", &binding.function),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("'translation.{}' must not be empty", field);
            }
        }

        Ok(())
    }

    /// Path of the primary locale catalog, resolved against `root_dir`.
    pub fn catalog_path(&self, root_dir: &Path) -> PathBuf {
        let messages_root = Path::new(&self.messages_root);
        let dir = if messages_root.is_absolute() {
            messages_root.to_path_buf()
        } else {
            root_dir.join(messages_root.strip_prefix(".").unwrap_or(messages_root))
        };
        dir.join(format!("{}.json", self.primary_locale))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
