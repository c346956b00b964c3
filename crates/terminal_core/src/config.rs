use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "portfolio.toml";
const ENV_PREFIX: &str = "PORTFOLIO__";
/// Slowest accepted animation, as a multiple of the default pacing.
pub const MAX_PACE_SCALE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub prompt: String,
    pub pace_scale: f64,
    pub rng_seed: Option<u64>,
    pub content_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: "tobias@portfolio:~$".into(),
            pace_scale: 1.0,
            rng_seed: None,
            content_path: None,
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then `portfolio.toml`, then `PORTFOLIO__*` environment variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = match settings_path() {
        Some(path) => read_settings_file(&path)?,
        None => Settings::default(),
    };
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn settings_path() -> Option<PathBuf> {
    let local = PathBuf::from(SETTINGS_FILE);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("portfolio").join(SETTINGS_FILE))
        .filter(|path| path.is_file())
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let settings: Settings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    anyhow::ensure!(
        pace_scale_in_range(settings.pace_scale),
        "pace scale {} must be between 0 and {MAX_PACE_SCALE} in settings file '{}'",
        settings.pace_scale,
        path.display()
    );
    Ok(settings)
}

/// Accepts a finite scale between 0 and [`MAX_PACE_SCALE`]; used for the
/// settings file, the environment and command-line flags alike.
pub fn parse_pace_scale(raw: &str) -> Result<f64, String> {
    let scale: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("pace scale '{raw}' is not a number"))?;
    if pace_scale_in_range(scale) {
        Ok(scale)
    } else {
        Err(format!(
            "pace scale '{raw}' must be between 0 and {MAX_PACE_SCALE}"
        ))
    }
}

fn pace_scale_in_range(scale: f64) -> bool {
    scale.is_finite() && (0.0..=MAX_PACE_SCALE).contains(&scale)
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

    if let Some(v) = var("PROMPT") {
        settings.prompt = v;
    }
    if let Some(v) = var("PACE_SCALE") {
        match parse_pace_scale(&v) {
            Ok(parsed) => settings.pace_scale = parsed,
            Err(err) => warn!(value = %v, "ignoring PORTFOLIO__PACE_SCALE: {err}"),
        }
    }
    if let Some(v) = var("RNG_SEED") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.rng_seed = Some(parsed),
            Err(_) => warn!(value = %v, "ignoring invalid PORTFOLIO__RNG_SEED"),
        }
    }
    if let Some(v) = var("CONTENT_PATH") {
        settings.content_path = Some(PathBuf::from(v));
    }
    if let Some(v) = var("LOG_FILTER") {
        settings.log_filter = v;
    }
}
