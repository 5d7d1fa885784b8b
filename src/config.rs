use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional knobs for diagnostic output. The layout policy itself (subdir
/// count, bulk count, filler cap) is fixed and deliberately not configurable.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit a progress line every N files (default 100).
    pub progress_interval: Option<u64>,
    /// Suppress the summary and progress output entirely.
    pub quiet: bool,
}

impl Config {
    /// Load config from treefill_options.yaml, checking CWD first then exe dir.
    pub fn load() -> Result<Self> {
        let candidates = config_candidates();
        for path in &candidates {
            if path.exists() {
                let text = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&text)?;
                return Ok(config);
            }
        }
        Ok(Config::default())
    }
}

fn config_candidates() -> Vec<PathBuf> {
    let filename = "treefill_options.yaml";
    let mut candidates = vec![PathBuf::from(filename)];
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join(filename));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_yaml::from_str("quiet: true").unwrap();
        assert!(config.quiet);
        assert_eq!(config.progress_interval, None);

        let config: Config = serde_yaml::from_str("progress_interval: 10").unwrap();
        assert!(!config.quiet);
        assert_eq!(config.progress_interval, Some(10));
    }
}
