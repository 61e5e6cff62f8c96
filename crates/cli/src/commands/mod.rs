pub mod check;
pub mod classify;
pub mod report;
pub mod search;
pub mod summary;

use anyhow::Context;
use colored::*;
use core_permissions::{color_for, AnalysisConfig, Dataset, PermissionGroup};
use std::path::Path;
use tracing::debug;

/// Output format of the report commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Read a session export from disk
pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    app_utils::load_session(path)
        .with_context(|| format!("Failed to load session file {}", path.display()))
}

/// Read the analysis limits, falling back to the defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    match path {
        Some(path) => app_utils::load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            debug!("using default analysis config");
            Ok(AnalysisConfig::default())
        }
    }
}

/// Group name in its palette color
pub fn paint(group: PermissionGroup) -> ColoredString {
    let (r, g, b) = rgb(color_for(group.as_str()));
    group.as_str().truecolor(r, g, b)
}

fn rgb(hex: &str) -> (u8, u8, u8) {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0x77)
    };
    (channel(1..3), channel(3..5), channel(5..7))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_parses_palette_colors() {
        assert_eq!(rgb("#4ade80"), (0x4a, 0xde, 0x80));
        assert_eq!(rgb("#777777"), (0x77, 0x77, 0x77));
        assert_eq!(rgb("bogus"), (0x77, 0x77, 0x77));
    }
}
