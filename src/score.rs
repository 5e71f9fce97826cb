use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

const APP_DIR_NAME: &str = "gridsnake";
const HIGH_SCORE_FILE_NAME: &str = "highscore.txt";

/// Two-method persistence contract for the high score.
///
/// `load` is consulted once at construction and defaults to 0 on any
/// failure; `save` is best-effort and never retried. Neither surfaces
/// an error to the game.
pub trait ScoreStore: fmt::Debug {
    fn load(&self) -> u32;
    fn save(&mut self, value: u32);
}

/// Returns the platform-correct high-score file path.
#[must_use]
pub fn default_high_score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(HIGH_SCORE_FILE_NAME);
    base
}

/// High score persisted as a single line of ASCII decimal text.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match read_high_score(&self.path) {
            Ok(value) => value,
            Err(error) => {
                eprintln!("Could not load high score: {error}");
                0
            }
        }
    }

    fn save(&mut self, value: u32) {
        if let Err(error) = write_high_score(&self.path, value) {
            eprintln!("Could not save high score: {error}");
        }
    }
}

/// Reads the stored high score.
///
/// A missing file is a normal first run and reads as 0; unreadable or
/// non-decimal content is an error for the caller to log.
fn read_high_score(path: &Path) -> io::Result<u32> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(error) => return Err(error),
    };

    raw.trim()
        .parse::<u32>()
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}

/// Overwrites the stored high score, creating parent directories when needed.
fn write_high_score(path: &Path, value: u32) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{value}\n"))
}

/// In-memory store for tests and headless simulations.
///
/// Clones share the same value, so a test can keep a handle while the
/// game owns another. Every `save` call is recorded.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    inner: Rc<RefCell<MemoryScoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryScoreInner {
    value: u32,
    saves: Vec<u32>,
}

impl MemoryScoreStore {
    /// Creates a store preloaded with `value`.
    #[must_use]
    pub fn with_value(value: u32) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().value = value;
        store
    }

    /// Returns the currently stored value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.inner.borrow().value
    }

    /// Returns every value passed to `save`, in order.
    #[must_use]
    pub fn saves(&self) -> Vec<u32> {
        self.inner.borrow().saves.clone()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.inner.borrow().value
    }

    fn save(&mut self, value: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.value = value;
        inner.saves.push(value);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileScoreStore, ScoreStore, read_high_score, write_high_score};

    #[test]
    fn decimal_file_round_trip() {
        let path = unique_test_path("round_trip");

        write_high_score(&path, 42).expect("score save should succeed");
        let loaded = read_high_score(&path).expect("load should succeed");

        assert_eq!(loaded, 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn stored_seventeen_loads_as_seventeen() {
        let path = unique_test_path("seventeen");
        write_test_file(&path, "17");

        let store = FileScoreStore::new(path.clone());
        assert_eq!(store.load(), 17);

        cleanup_test_path(&path);
    }

    #[test]
    fn trailing_newline_is_tolerated() {
        let path = unique_test_path("newline");
        write_test_file(&path, "23\n");

        assert_eq!(read_high_score(&path).expect("load should succeed"), 23);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        assert_eq!(read_high_score(&path).expect("missing file is not an error"), 0);
    }

    #[test]
    fn malformed_file_defaults_to_zero_through_the_store() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-a-number");

        assert!(read_high_score(&path).is_err(), "raw read should fail");
        let store = FileScoreStore::new(path.clone());
        assert_eq!(store.load(), 0);

        cleanup_test_path(&path);
    }

    #[test]
    fn save_overwrites_previous_record() {
        let path = unique_test_path("overwrite");
        let mut store = FileScoreStore::new(path.clone());

        store.save(5);
        store.save(9);

        assert_eq!(read_high_score(&path).expect("load should succeed"), 9);
        cleanup_test_path(&path);
    }

    fn write_test_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("gridsnake-score-tests")
            .join(format!("{label}-{nanos}.txt"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
