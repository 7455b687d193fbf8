//! A store keeping each record in its own pretty printed JSON file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::store::Record;
use crate::{Error, Result};

/// The extension of record files.
const EXTENSION: &str = "json";

/// Stores records as `{dir}/{id}.json`.
#[derive(Debug, Clone)]
pub struct JsonStore<T: Record> {
    /// The directory of the records.
    dir: PathBuf,

    _record: PhantomData<T>,
}

impl<T: Record> JsonStore<T> {
    /// Creates a store in a directory. The directory is created with the first record.
    pub fn new<P: Into<PathBuf>>(dir: P) -> JsonStore<T> {
        JsonStore {
            dir: dir.into(),
            _record: PhantomData,
        }
    }

    /// Returns the directory of the records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, EXTENSION))
    }

    fn write(file: File, record: &T) -> Result<()> {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, record)?;
        writer.flush()?;
        Ok(())
    }

    fn load(path: &Path) -> Result<T> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Returns true if a record has this id.
    pub fn exists(&self, id: &str) -> bool {
        self.path(id).is_file()
    }

    /// Returns the records satisfying a predicate, sorted by id.
    ///
    /// Records that cannot be read are skipped.
    pub fn list<F: Fn(&T) -> bool>(&self, predicate: F) -> Result<Vec<T>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut records = vec![];

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }

            match JsonStore::<T>::load(&path) {
                Ok(record) if predicate(&record) => records.push(record),
                Ok(_) => (),
                Err(e) => warn!("skipping {}: {}", path.display(), e),
            }
        }

        records.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(records)
    }

    /// Stores a new record. Fails if a record already has its id.
    pub fn create(&self, record: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path(record.id());
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(Error::AlreadyExists {
                    kind: T::KIND,
                    id: String::from(record.id()),
                })
            }
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = JsonStore::write(file, record) {
            // the id stays free when the record could not be written
            if let Err(cleanup) = fs::remove_file(&path) {
                warn!("couldn't remove {}: {}", path.display(), cleanup);
            }
            return Err(e);
        }

        debug!("created {} {}", T::KIND, record.id());
        Ok(())
    }

    /// Reads a record, if present.
    pub fn read(&self, id: &str) -> Result<Option<T>> {
        match JsonStore::<T>::load(&self.path(id)) {
            Ok(record) => Ok(Some(record)),
            Err(Error::IoError(ref e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Replaces a stored record. Fails if no record has its id.
    pub fn update(&self, record: &T) -> Result<()> {
        if !self.exists(record.id()) {
            return Err(Error::NotFound {
                kind: T::KIND,
                id: String::from(record.id()),
            });
        }

        JsonStore::write(File::create(self.path(record.id()))?, record)?;
        debug!("updated {} {}", T::KIND, record.id());
        Ok(())
    }

    /// Removes a record. Fails if no record has this id.
    pub fn delete(&self, id: &str) -> Result<()> {
        match fs::remove_file(self.path(id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound {
                kind: T::KIND,
                id: String::from(id),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Client;

    fn client(id: &str, name: &str) -> Client {
        Client {
            id: String::from(id),
            name: String::from(name),
            ..Client::default()
        }
    }

    #[test]
    fn create_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Client>::new(dir.path().join("client"));

        store.create(&client("acme", "Acme Corp")).unwrap();

        assert_eq!(store.read("acme").unwrap(), Some(client("acme", "Acme Corp")));
        assert_eq!(store.read("nobody").unwrap(), None);
        assert!(dir.path().join("client").join("acme.json").is_file());
    }

    #[test]
    fn duplicate_create_keeps_the_first_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Client>::new(dir.path());

        store.create(&client("acme", "Acme Corp")).unwrap();

        match store.create(&client("acme", "Impostor")) {
            Err(Error::AlreadyExists { kind, id }) => {
                assert_eq!(kind, "client");
                assert_eq!(id, "acme");
            }
            _ => panic!("expected a duplicate error"),
        }

        assert_eq!(store.read("acme").unwrap().unwrap().name, "Acme Corp");
    }

    /// A record whose serialization always fails.
    #[derive(Debug, serde::Deserialize)]
    struct Unwritable {
        id: String,
    }

    impl serde::Serialize for Unwritable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot be written"))
        }
    }

    impl Record for Unwritable {
        const KIND: &'static str = "unwritable";

        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn failed_create_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Unwritable>::new(dir.path());
        let record = Unwritable {
            id: String::from("broken"),
        };

        assert!(matches!(store.create(&record), Err(Error::JsonError(_))));
        assert!(!store.exists("broken"));
        assert!(matches!(store.create(&record), Err(Error::JsonError(_))));
    }

    #[test]
    fn update_and_delete_need_an_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Client>::new(dir.path());

        assert!(matches!(
            store.update(&client("acme", "Acme")),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(store.delete("acme"), Err(Error::NotFound { .. })));

        store.create(&client("acme", "Acme")).unwrap();
        store.update(&client("acme", "Acme Corp")).unwrap();
        assert_eq!(store.read("acme").unwrap().unwrap().name, "Acme Corp");

        store.delete("acme").unwrap();
        assert_eq!(store.read("acme").unwrap(), None);
    }

    #[test]
    fn list_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Client>::new(dir.path());

        for (id, name) in &[("c", "Charlie"), ("a", "Alpha"), ("b", "Bravo")] {
            store.create(&client(id, name)).unwrap();
        }
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let ids: Vec<String> = store.list(|_| true).unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let filtered = store.list(|c| c.name.contains('r')).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Client>::new(dir.path().join("nowhere"));
        assert!(store.list(|_| true).unwrap().is_empty());
    }

    #[test]
    fn corrupted_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Client>::new(dir.path());
        fs::write(dir.path().join("acme.json"), "{ not json").unwrap();
        assert!(matches!(store.read("acme"), Err(Error::JsonError(_))));
    }
}
