//! Storage collaborators: enumerate a flat root and open files for reading.

use std::fs::{self, File};
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, StorageError};

/// One entry in the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
}

/// Flat, read-only file storage.
pub trait Storage {
    /// Entries directly under the root, in discovery order.
    fn list_root(&self) -> Result<Vec<StorageEntry>>;

    /// Open an entry for sequential reading.
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>>;
}

/// Read an entry fully as text, refusing anything larger than `limit` bytes.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn read_text<S: Storage + ?Sized>(
    storage: &S,
    entry: &StorageEntry,
    limit: u64,
) -> Result<String> {
    let too_large = |size| StorageError::TooLarge {
        name: entry.name.clone(),
        size,
        limit,
    };

    if entry.size > limit {
        return Err(too_large(entry.size));
    }

    let reader = storage.open(&entry.name)?;
    let mut bytes = Vec::with_capacity(entry.size as usize);
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| StorageError::io(&entry.name, e))?;

    if bytes.len() as u64 > limit {
        return Err(too_large(bytes.len() as u64));
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// A directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Mount `root`, failing if it is missing or not a directory.
    pub fn mount(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let display = root.to_string_lossy().to_string();

        let metadata = fs::metadata(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(display.clone()),
            _ => StorageError::io(display.clone(), e),
        })?;
        if !metadata.is_dir() {
            return Err(StorageError::NotADirectory(display));
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Storage for FsStorage {
    /// Entries sorted by name so discovery order is reproducible.
    fn list_root(&self) -> Result<Vec<StorageEntry>> {
        let display = self.root.to_string_lossy().to_string();
        let dir = fs::read_dir(&self.root).map_err(|e| StorageError::io(display, e))?;

        let mut entries = Vec::new();
        for entry in dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().to_string();
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Skipping {}: {}", name, e);
                    continue;
                }
            };
            entries.push(StorageEntry {
                name,
                is_dir: metadata.is_dir(),
                size: metadata.len(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        let file = File::open(self.root.join(name)).map_err(|e| StorageError::io(name, e))?;
        Ok(Box::new(file))
    }
}

#[derive(Debug, Clone)]
enum MemoryEntry {
    File(Vec<u8>),
    Dir,
    Unreadable(u64),
}

/// In-memory storage that lists entries in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Vec<(String, MemoryEntry)>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.entries
            .push((name.into(), MemoryEntry::File(contents.into())));
        self
    }

    /// Add a directory entry.
    pub fn with_dir(mut self, name: impl Into<String>) -> Self {
        self.entries.push((name.into(), MemoryEntry::Dir));
        self
    }

    /// Add an entry that is listed with `size` but fails to open.
    pub fn with_unreadable(mut self, name: impl Into<String>, size: u64) -> Self {
        self.entries
            .push((name.into(), MemoryEntry::Unreadable(size)));
        self
    }
}

impl Storage for MemoryStorage {
    fn list_root(&self) -> Result<Vec<StorageEntry>> {
        Ok(self
            .entries
            .iter()
            .map(|(name, entry)| {
                let (is_dir, size) = match entry {
                    MemoryEntry::File(bytes) => (false, bytes.len() as u64),
                    MemoryEntry::Dir => (true, 0),
                    MemoryEntry::Unreadable(size) => (false, *size),
                };
                StorageEntry {
                    name: name.clone(),
                    is_dir,
                    size,
                }
            })
            .collect())
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        let entry = self
            .entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, entry)| entry);

        match entry {
            Some(MemoryEntry::File(bytes)) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            Some(MemoryEntry::Dir) => Err(StorageError::io(
                name,
                io::Error::new(io::ErrorKind::Other, "is a directory"),
            )),
            Some(MemoryEntry::Unreadable(_)) => Err(StorageError::io(
                name,
                io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"),
            )),
            None => Err(StorageError::io(
                name,
                io::Error::new(io::ErrorKind::NotFound, "no such entry"),
            )),
        }
    }
}
