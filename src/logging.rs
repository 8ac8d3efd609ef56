use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "classic_snake=info";

/// Installs a `tracing` subscriber that appends to `path`.
///
/// The terminal is in raw mode while the game runs, so log lines never go to
/// stdout or stderr. `RUST_LOG` overrides the default filter.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::open_log_file;

    #[test]
    fn log_file_and_parent_are_created() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("classic-snake-log-{nanos}"));
        let path = dir.join("game.log");

        open_log_file(&path).expect("log file should open");
        assert!(path.exists());

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }
}
