use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::{env, fs};

/// Runtime settings for the parser tooling. Every field has a default so a
/// bare invocation works without any environment setup.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub output_path: String,
    pub term_label: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "lfx-parser".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/lfx_parser.log".into());
            let output_path =
                env::var("OUTPUT_PATH").unwrap_or_else(|_| "mentorship_table.md".into());
            let term_label = env::var("TERM_LABEL").unwrap_or_else(|_| "2025 Term 3".into());

            if let Some(parent) = std::path::Path::new(&log_file).parent() {
                fs::create_dir_all(parent).expect("Failed to create log directory");
            }

            Config {
                project_name,
                log_level,
                log_file,
                output_path,
                term_label,
            }
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }
}
