//! File-backed identity slot.
//!
//! The slot is a single JSON file, [`IDENTITY_FILE_NAME`], inside a
//! capability-scoped directory. Writes are atomic; a missing file reads as
//! an empty slot.

mod atomic_io;

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;

use crate::domain::ports::{IdentitySlot, IdentitySlotError};

/// Fixed name of the identity slot file.
pub const IDENTITY_FILE_NAME: &str = "currentUser.json";

/// Identity slot persisted to `<directory>/currentUser.json`.
#[derive(Debug)]
pub struct FileIdentitySlot {
    dir: Dir,
    location: Utf8PathBuf,
}

impl FileIdentitySlot {
    /// Open (creating if needed) `directory` and use it for the slot.
    pub fn open(directory: &Utf8Path) -> Result<Self, IdentitySlotError> {
        Dir::create_ambient_dir_all(directory, ambient_authority())
            .map_err(|err| io_error(directory, &err))?;
        let dir = Dir::open_ambient_dir(directory, ambient_authority())
            .map_err(|err| io_error(directory, &err))?;
        Ok(Self {
            dir,
            location: directory.join(IDENTITY_FILE_NAME),
        })
    }

    /// Full path of the slot file, for diagnostics.
    pub fn location(&self) -> &Utf8Path {
        &self.location
    }
}

impl IdentitySlot for FileIdentitySlot {
    fn load(&self) -> Result<Option<String>, IdentitySlotError> {
        // Bytes that are not UTF-8 come back lossily decoded so the caller
        // sees unparseable content and clears the slot.
        match self.dir.read(IDENTITY_FILE_NAME) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&self.location, &err)),
        }
    }

    fn store(&self, value: &str) -> Result<(), IdentitySlotError> {
        atomic_io::write_atomic(&self.dir, Utf8Path::new(IDENTITY_FILE_NAME), value)
    }

    fn clear(&self) -> Result<(), IdentitySlotError> {
        match self.dir.remove_file(IDENTITY_FILE_NAME) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&self.location, &err)),
        }
    }
}

fn io_error(path: &Utf8Path, err: &io::Error) -> IdentitySlotError {
    IdentitySlotError::io(format!("{path}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path")
    }

    #[rstest]
    fn empty_directory_reads_as_empty_slot(temp_dir: TempDir) {
        let slot = FileIdentitySlot::open(&utf8(&temp_dir)).expect("open slot");
        assert_eq!(slot.load(), Ok(None));
    }

    #[rstest]
    fn store_then_load_round_trips(temp_dir: TempDir) {
        let slot = FileIdentitySlot::open(&utf8(&temp_dir)).expect("open slot");
        slot.store(r#"{"id":"1"}"#).expect("store");
        slot.store(r#"{"id":"2"}"#).expect("overwrite");

        assert_eq!(slot.load(), Ok(Some(r#"{"id":"2"}"#.to_owned())));
        let on_disk = std::fs::read_to_string(temp_dir.path().join(IDENTITY_FILE_NAME))
            .expect("read slot file");
        assert_eq!(on_disk, r#"{"id":"2"}"#);
    }

    #[rstest]
    fn store_leaves_no_temporary_files(temp_dir: TempDir) {
        let slot = FileIdentitySlot::open(&utf8(&temp_dir)).expect("open slot");
        slot.store("{}").expect("store");

        let names: Vec<String> = std::fs::read_dir(temp_dir.path())
            .expect("list dir")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec![IDENTITY_FILE_NAME.to_owned()]);
    }

    #[rstest]
    fn non_utf8_contents_load_as_text(temp_dir: TempDir) {
        std::fs::write(temp_dir.path().join(IDENTITY_FILE_NAME), [0xff, 0xfe, 0x00])
            .expect("write slot file");
        let slot = FileIdentitySlot::open(&utf8(&temp_dir)).expect("open slot");

        let loaded = slot.load().expect("load").expect("slot has contents");
        assert!(loaded.contains('\u{fffd}'));
    }

    #[rstest]
    fn clear_is_idempotent(temp_dir: TempDir) {
        let slot = FileIdentitySlot::open(&utf8(&temp_dir)).expect("open slot");
        slot.store("{}").expect("store");
        slot.clear().expect("clear");
        slot.clear().expect("clear again");
        assert_eq!(slot.load(), Ok(None));
    }

    #[rstest]
    fn open_creates_missing_directories(temp_dir: TempDir) {
        let nested = utf8(&temp_dir).join("state").join("identity");
        let slot = FileIdentitySlot::open(&nested).expect("open nested slot");
        assert_eq!(slot.location(), nested.join(IDENTITY_FILE_NAME).as_path());
        assert!(nested.is_dir());
    }

    #[rstest]
    fn nested_target_is_rejected(temp_dir: TempDir) {
        let dir = Dir::open_ambient_dir(temp_dir.path(), ambient_authority()).expect("open dir");
        let err = atomic_io::write_atomic(&dir, Utf8Path::new("a/b.json"), "{}")
            .expect_err("nested path must fail");
        assert!(matches!(err, IdentitySlotError::Io { .. }));
    }
}
