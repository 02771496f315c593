//! JSON ledger: `{"used_classes": [...]}`, tab-indented, sorted.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, instrument};

use bemnest_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, LedgerStore},
    },
    domain::{ClassName, LedgerRecord},
    error::{NestError, NestResult},
};

/// [`LedgerStore`] persisting a [`LedgerRecord`] as a JSON file through the
/// [`Filesystem`] port.
pub struct JsonLedgerStore {
    filesystem: Box<dyn Filesystem>,
    path: PathBuf,
}

impl JsonLedgerStore {
    pub fn new(filesystem: Box<dyn Filesystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, reason: impl ToString) -> NestError {
        ApplicationError::LedgerCorrupt {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
        .into()
    }
}

/// Serialize `record` the way it is stored on disk.
pub fn encode_record(record: &LedgerRecord) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    record.serialize(&mut serializer)?;
    buffer.push(b'\n');
    String::from_utf8(buffer)
        .map_err(|e| serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

impl LedgerStore for JsonLedgerStore {
    fn ensure(&self) -> NestResult<()> {
        if self.filesystem.exists(&self.path) {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        let empty = encode_record(&LedgerRecord::default()).map_err(|e| self.corrupt(e))?;
        self.filesystem.write_file(&self.path, &empty)?;
        debug!(path = %self.path.display(), "Created empty ledger");
        Ok(())
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> NestResult<BTreeSet<ClassName>> {
        if !self.filesystem.exists(&self.path) {
            return Ok(BTreeSet::new());
        }

        let text = self.filesystem.read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(BTreeSet::new());
        }

        let record: LedgerRecord = serde_json::from_str(&text).map_err(|e| self.corrupt(e))?;
        debug!(count = record.len(), "Ledger loaded");
        Ok(record.into_classes())
    }

    #[instrument(skip_all, fields(path = %self.path.display(), count = classes.len()))]
    fn save(&self, classes: &BTreeSet<ClassName>) -> NestResult<()> {
        let encoded =
            encode_record(&LedgerRecord::from_classes(classes)).map_err(|e| self.corrupt(e))?;

        if self.filesystem.exists(&self.path)
            && self.filesystem.read_to_string(&self.path)? == encoded
        {
            debug!("Ledger unchanged, skipping write");
            return Ok(());
        }

        self.filesystem.write_file(&self.path, &encoded)?;
        debug!("Ledger saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;

    const LEDGER: &str = "/site/.listOfUsedClasses.json";

    fn set(names: &[&str]) -> BTreeSet<ClassName> {
        names.iter().map(|n| ClassName::new(*n).unwrap()).collect()
    }

    fn store(fs: &MemoryFilesystem) -> JsonLedgerStore {
        JsonLedgerStore::new(Box::new(fs.clone()), LEDGER)
    }

    #[test]
    fn ensure_writes_an_empty_record_once() {
        let fs = MemoryFilesystem::new();
        let ledger = store(&fs);

        ledger.ensure().unwrap();
        ledger.ensure().unwrap();

        assert_eq!(
            fs.read_file(LEDGER).as_deref(),
            Some("{\n\t\"used_classes\": []\n}\n")
        );
        assert!(ledger.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let fs = MemoryFilesystem::new();
        let ledger = store(&fs);
        ledger.ensure().unwrap();

        let classes = set(&["nav", "btn_primary", "menu__item"]);
        ledger.save(&classes).unwrap();

        assert_eq!(ledger.load().unwrap(), classes);
        assert_eq!(
            fs.read_file(LEDGER).as_deref(),
            Some("{\n\t\"used_classes\": [\n\t\t\"btn_primary\",\n\t\t\"menu__item\",\n\t\t\"nav\"\n\t]\n}\n")
        );
    }

    #[test]
    fn saving_identical_contents_does_not_write() {
        let fs = MemoryFilesystem::new();
        let ledger = store(&fs);
        ledger.ensure().unwrap();
        ledger.save(&set(&["menu"])).unwrap();

        let before = fs.write_count();
        ledger.save(&set(&["menu"])).unwrap();
        assert_eq!(fs.write_count(), before);
    }

    #[test]
    fn non_ascii_names_are_stored_verbatim() {
        let fs = MemoryFilesystem::new();
        let ledger = store(&fs);
        ledger.ensure().unwrap();

        ledger.save(&set(&["caf\u{e9}", "promo\u{00A0}x"])).unwrap();

        assert_eq!(
            fs.read_file(LEDGER).as_deref(),
            Some("{\n\t\"used_classes\": [\n\t\t\"caf\u{e9}\",\n\t\t\"promo\u{00A0}x\"\n\t]\n}\n")
        );
        assert_eq!(ledger.load().unwrap(), set(&["caf\u{e9}", "promo\u{00A0}x"]));
    }

    #[test]
    fn garbage_is_reported_as_corrupt() {
        let fs = MemoryFilesystem::new().with_file(LEDGER, "[not json");
        let err = store(&fs).load().unwrap_err();
        assert!(matches!(
            err,
            NestError::Application(ApplicationError::LedgerCorrupt { .. })
        ));
    }

    #[test]
    fn empty_class_names_are_rejected() {
        let fs = MemoryFilesystem::new().with_file(LEDGER, r#"{"used_classes": [""]}"#);
        assert!(store(&fs).load().is_err());
    }

    #[test]
    fn missing_ledger_loads_empty() {
        let fs = MemoryFilesystem::new();
        assert!(store(&fs).load().unwrap().is_empty());
    }
}
