use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "skypie.log";

/// Log file size that triggers trimming (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Tail kept after trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Trim `path` down to its last [`KEEP_SIZE`] bytes once it grows past
/// [`MAX_LOG_SIZE`], dropping the partial first line
pub(crate) fn trim_log(path: &Path, max_size: u64, keep_size: u64) -> io::Result<bool> {
    let len = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max_size {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep_size)))?;
        file.read_to_end(&mut tail)?;
    }
    let start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(path)?;
    file.write_all(b"--- older entries trimmed ---\n")?;
    file.write_all(&tail[start..])?;
    Ok(true)
}

/// Shared append handle handed out to every fmt layer event
#[derive(Clone)]
struct SharedLog(Arc<Mutex<File>>);

struct SharedLogGuard(Arc<Mutex<File>>);

impl SharedLogGuard {
    fn with_file<T>(&self, f: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        f(&mut *file)
    }
}

impl Write for SharedLogGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(Write::flush)
    }
}

impl<'a> MakeWriter<'a> for SharedLog {
    type Writer = SharedLogGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogGuard(Arc::clone(&self.0))
    }
}

/// Route `tracing` output to `{data_dir}/skypie.log`
///
/// `RUST_LOG` wins over `level` when set. The file is trimmed before it is
/// opened if it has grown past 5 MB.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE);

    if let Err(e) = trim_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: could not trim {}: {e}", log_path.display());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("skypie={level},skypie_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedLog(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "Logging initialized");
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_log_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);
        fs::write(&path, "one\ntwo\n").unwrap();

        assert!(!trim_log(&path, 1024, 4).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_missing_log_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!trim_log(&dir.path().join(LOG_FILE), 10, 5).unwrap());
    }

    #[test]
    fn test_oversized_log_keeps_whole_trailing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);
        fs::write(&path, "first line\nsecond line\nthird\n").unwrap();

        // Last 10 bytes are "ine\nthird\n"; the partial line is dropped
        assert!(trim_log(&path, 16, 10).unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "--- older entries trimmed ---\nthird\n"
        );
    }
}
