use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::storage::TokenStore;
use crate::utils::constants::STORE_FILE;

/// JSON object on disk: `{"token": "abc123", ...}`.
///
/// A missing or empty file is an empty store. Writes go to a sibling
/// `<name>.tmp` file (mode 0600 on unix) which is then renamed over the target.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `storage.json` -> `storage.json.tmp`, next to the target.
    fn tmp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("file store '{}' is not a JSON object of strings", self.path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("file store '{}' does not exist yet", self.path.display());
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e).with_context(|| format!("cannot read file store '{}'", self.path.display())),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory '{}'", parent.display()))?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)
            .with_context(|| format!("cannot write '{}'", tmp.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("cannot replace '{}'", self.path.display()))?;

        info!("file store '{}' updated", self.path.display());
        Ok(())
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut entries = self.load()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.persist(&entries)?;
        Ok(true)
    }

    fn kind(&self) -> &'static str {
        STORE_FILE
    }
}
