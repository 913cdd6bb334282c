//! JSON document storage
//!
//! Small named documents (settings, score history) serialized with serde_json.
//! Native builds keep one `<name>.json` file per document under a data
//! directory; web builds keep one LocalStorage key per document.
//!
//! Loading never fails hard: a missing or malformed document reads as `None`
//! and the caller falls back to its default. Writes go to a temp file first
//! and are renamed into place.

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Environment variable overriding the native data directory
pub const DATA_DIR_ENV: &str = "OCEAN_CLEANUP_DATA_DIR";

/// Handle to wherever documents live on this platform
#[derive(Debug, Clone)]
pub struct Store {
    #[cfg(not(target_arch = "wasm32"))]
    root: std::path::PathBuf,
    #[cfg(target_arch = "wasm32")]
    prefix: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl Store {
    /// `$OCEAN_CLEANUP_DATA_DIR`, or the working directory
    pub fn default_location() -> Self {
        let root = std::env::var_os(DATA_DIR_ENV)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        Self::at(root)
    }

    pub fn at(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> std::path::PathBuf {
        self.root.join(format!("{name}.json"))
    }

    fn read_raw(&self, name: &str) -> Option<String> {
        let path = self.path_for(name);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write_raw(&self, name: &str, text: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.path_for(name);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, text)?;
        std::fs::rename(&tmp, &path)
    }

    pub fn remove(&self, name: &str) -> io::Result<()> {
        match std::fs::remove_file(self.path_for(name)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Store {
    pub fn default_location() -> Self {
        Self {
            prefix: "ocean_cleanup_".to_string(),
        }
    }

    fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    fn read_raw(&self, name: &str) -> Option<String> {
        Self::storage()?.get_item(&self.key(name)).ok().flatten()
    }

    fn write_raw(&self, name: &str, text: &str) -> io::Result<()> {
        let storage =
            Self::storage().ok_or_else(|| io::Error::other("LocalStorage unavailable"))?;
        storage
            .set_item(&self.key(name), text)
            .map_err(|_| io::Error::other("LocalStorage write rejected"))
    }

    pub fn remove(&self, name: &str) -> io::Result<()> {
        if let Some(storage) = Self::storage() {
            storage
                .remove_item(&self.key(name))
                .map_err(|_| io::Error::other("LocalStorage remove rejected"))?;
        }
        Ok(())
    }
}

impl Store {
    /// Load and parse a document; malformed data is logged and ignored
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let text = self.read_raw(name)?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring malformed {} document: {}", name, e);
                None
            }
        }
    }

    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.write_raw(name, &text)
    }
}
