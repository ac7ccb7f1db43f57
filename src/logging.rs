use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "loandash=info",
        1 => "loandash=debug",
        _ => "loandash=trace",
    }
}

/// Routes tracing output to `path`; `RUST_LOG` takes precedence over `-v`.
pub fn init(path: &Path, verbose: u8) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_level(0), "loandash=info");
        assert_eq!(default_level(1), "loandash=debug");
        assert_eq!(default_level(5), "loandash=trace");
    }
}
