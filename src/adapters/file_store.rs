//! INI file-backed configuration store.
//!
//! The file is read once on [`IniFileStore::open`] and written back only if
//! something was [`set`](ConfigPort::set) since the last load or save. Pending
//! changes are flushed when the store is dropped.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::domain::document::Document;
use crate::domain::error::StoreError;
use crate::domain::value::Value;
use crate::ports::config_port::ConfigPort;

#[derive(Debug)]
pub struct IniFileStore {
    path: PathBuf,
    modified: bool,
    document: Document,
}

impl IniFileStore {
    /// Opens and loads `path`. A missing or unreadable file yields an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            modified: false,
            document: Document::new(),
        };
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Replaces the in-memory tables with the file contents and clears the
    /// modification flag. Unsaved changes are discarded.
    pub fn load(&mut self) {
        self.modified = false;
        self.document = match File::open(&self.path) {
            Ok(file) => Document::read_from(BufReader::new(file)),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "config file not opened, starting empty");
                Document::new()
            }
        };
        debug!(
            path = %self.path.display(),
            sections = self.document.sections().count(),
            "loaded config"
        );
    }

    /// Writes the tables to disk if modified. On failure the flag stays set.
    pub fn save(&mut self) -> Result<(), StoreError> {
        if !self.modified {
            return Ok(());
        }
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        let file = File::create(&self.path).map_err(io_err)?;
        self.document
            .write_to(BufWriter::new(file))
            .map_err(io_err)?;
        self.modified = false;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.document.contains(section, key)
    }

    pub fn sections(&self) -> Vec<&str> {
        self.document.sections().collect()
    }

    pub fn keys(&self, section: &str) -> Vec<&str> {
        self.document.keys(section)
    }
}

impl ConfigPort for IniFileStore {
    fn get(&self, section: &str, key: &str, default: Value) -> Value {
        self.lookup(section, key).unwrap_or(default)
    }

    fn set(&mut self, section: &str, key: &str, value: Value) {
        self.modified = true;
        self.document.set(section, key, value);
    }

    fn lookup(&self, section: &str, key: &str) -> Option<Value> {
        self.document.get(section, key).cloned()
    }
}

impl Drop for IniFileStore {
    fn drop(&mut self) {
        if let Err(e) = self.save() {
            error!(error = %e, "failed to flush config on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn open_loads_file() {
        let file = create_temp_config("[General]\ndebug\nlevel=1,2,3\n");
        let store = IniFileStore::open(file.path());
        assert!(!store.is_modified());
        assert_eq!(
            store.get("General", "debug", Value::from("x")),
            Value::Presence
        );
        assert_eq!(
            store.get_list("General", "level", vec![]),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = IniFileStore::open(dir.path().join("absent.ini"));
        assert!(store.sections().is_empty());
        assert!(!store.is_modified());
    }

    #[test]
    fn missing_file_is_not_created_without_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.ini");
        drop(IniFileStore::open(&path));
        assert!(!path.exists());
    }

    #[test]
    fn get_returns_default_for_misses() {
        let file = create_temp_config("[A]\nk=v\n");
        let store = IniFileStore::open(file.path());
        let default = Value::from(&["d1", "d2"][..]);
        assert_eq!(store.get("B", "k", default.clone()), default);
        assert_eq!(store.get("A", "missing", default.clone()), default);
        assert!(!store.contains("B", "k"));
        assert!(!store.is_modified());
    }

    #[test]
    fn set_marks_modified_and_creates_entries() {
        let file = create_temp_config("");
        let mut store = IniFileStore::open(file.path());
        store.set("New", "key", Value::from(7i64));
        assert!(store.is_modified());
        assert_eq!(store.get_int("New", "key", 0), 7);
        assert_eq!(store.sections(), vec!["New"]);
    }

    #[test]
    fn save_without_changes_leaves_file_untouched() {
        let content = "; hand written\n[A]\n  k = v \n";
        let file = create_temp_config(content);
        let mut store = IniFileStore::open(file.path());
        store.save().unwrap();
        drop(store);
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), content);
    }

    #[test]
    fn save_clears_flag_and_second_save_is_noop() {
        let file = create_temp_config("[A]\nk=v\n");
        let mut store = IniFileStore::open(file.path());
        store.set("A", "k", Value::from("w"));
        store.save().unwrap();
        assert!(!store.is_modified());

        std::fs::write(file.path(), "sentinel").unwrap();
        store.save().unwrap();
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "sentinel");
    }

    #[test]
    fn drop_flushes_pending_changes() {
        let file = create_temp_config("[A]\nk=v\n");
        {
            let mut store = IniFileStore::open(file.path());
            store.set("A", "extra", Value::Presence);
        }
        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "[A]\nk=v\nextra\n\n"
        );
    }

    #[test]
    fn load_discards_unsaved_changes() {
        let file = create_temp_config("[A]\nk=v\n");
        let mut store = IniFileStore::open(file.path());
        store.set("A", "k", Value::from("changed"));
        store.load();
        assert!(!store.is_modified());
        assert_eq!(store.get_string("A", "k"), Some("v".to_string()));
    }

    #[test]
    fn save_to_unwritable_path_returns_error_and_keeps_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing_dir").join("config.ini");
        let mut store = IniFileStore::open(&path);
        store.set("A", "k", Value::from("v"));
        let err = store.save().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(store.is_modified());
    }

    #[test]
    fn typed_getters_fall_back_on_bad_data() {
        let file = create_temp_config("[A]\nn=abc\nf=x\nb=maybe\n");
        let store = IniFileStore::open(file.path());
        assert_eq!(store.get_int("A", "n", 42), 42);
        assert_eq!(store.get_double("A", "f", 1.5), 1.5);
        assert!(store.get_bool("A", "b", true));
    }

    #[test]
    fn path_accessor_returns_opened_path() {
        let file = create_temp_config("");
        let store = IniFileStore::open(file.path());
        assert_eq!(store.path(), file.path());
    }
}
