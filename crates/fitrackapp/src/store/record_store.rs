use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{FitrackError, Result};
use crate::model::{Collection, Record};
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

pub const DEFAULT_INDENT: usize = 4;

/// Typed JSON collections on top of a raw [`StorageBackend`].
pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    indent: usize,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            indent: DEFAULT_INDENT,
        }
    }

    /// Indent width for persisted JSON; 0 writes compact JSON.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    fn encode<R: Record>(&self, records: &[R]) -> Result<Vec<u8>> {
        let encoded = if self.indent == 0 {
            serialize_with(records, CompactFormatter)
        } else {
            let indent = " ".repeat(self.indent);
            serialize_with(records, PrettyFormatter::with_indent(indent.as_bytes()))
        };
        encoded.map_err(|e| FitrackError::corrupt(R::COLLECTION, e))
    }

    fn decode<R: Record>(bytes: &[u8]) -> Result<Vec<R>> {
        serde_json::from_slice(bytes).map_err(|e| FitrackError::corrupt(R::COLLECTION, e))
    }

    fn initialize<R: Record>(&self) -> Result<()> {
        let empty: Vec<R> = Vec::new();
        self.backend.write(R::COLLECTION, &self.encode(&empty)?)?;
        info!(collection = %R::COLLECTION, "initialized empty collection");
        Ok(())
    }
}

fn serialize_with<R: Record, F: Formatter>(
    records: &[R],
    formatter: F,
) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, AsciiFormatter(formatter));
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Writes every non-ASCII character (and DEL) as a `\uXXXX` escape,
/// UTF-16 surrogate pairs included, so collections stay plain ASCII the way
/// files written by Python's `json.dump` are.
struct AsciiFormatter<F>(F);

impl<F: Formatter> Formatter for AsciiFormatter<F> {
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c <= '~' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn load<R: Record>(&self) -> Result<Vec<R>> {
        let records = match self.backend.read(R::COLLECTION)? {
            Some(bytes) => Self::decode(&bytes)?,
            None => {
                self.initialize::<R>()?;
                Vec::new()
            }
        };
        debug!(collection = %R::COLLECTION, count = records.len(), "loaded collection");
        Ok(records)
    }

    fn save<R: Record>(&mut self, records: &[R]) -> Result<()> {
        let bytes = self.encode(records)?;
        self.backend.write(R::COLLECTION, &bytes)?;
        debug!(collection = %R::COLLECTION, count = records.len(), "saved collection");
        Ok(())
    }

    fn exists(&self, collection: Collection) -> bool {
        self.backend.exists(collection)
    }

    fn location(&self, collection: Collection) -> PathBuf {
        self.backend.location(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Plan, User};
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> RecordStore<MemBackend> {
        RecordStore::with_backend(MemBackend::new())
    }

    fn user(id: u64, name: &str) -> User {
        User {
            user_id: id,
            name: name.to_string(),
            age: 30,
            height: 1.65,
            weight: 60.0,
            contact: "x".to_string(),
        }
    }

    #[test]
    fn test_load_missing_collection_persists_empty() {
        let store = make_store();
        assert!(!store.exists(Collection::Users));

        let users: Vec<User> = store.load().unwrap();

        assert!(users.is_empty());
        assert!(store.exists(Collection::Users));
        assert_eq!(store.backend.raw(Collection::Users).unwrap(), b"[]");
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let mut store = make_store();
        let users = vec![user(3, "C"), user(1, "A"), user(2, "B")];
        store.save(&users).unwrap();

        let loaded: Vec<User> = store.load().unwrap();
        assert_eq!(loaded, users);
    }

    #[test]
    fn test_resave_is_byte_identical() {
        let mut store = make_store();
        store.save(&[user(1, "Ana"), user(2, "Bo")]).unwrap();
        let before = store.backend.raw(Collection::Users).unwrap();

        let loaded: Vec<User> = store.load().unwrap();
        store.save(&loaded).unwrap();

        assert_eq!(store.backend.raw(Collection::Users).unwrap(), before);
    }

    #[test]
    fn test_corrupt_collection_is_an_error() {
        let store = make_store();
        store.backend.set_raw(Collection::Plans, b"[{\"plan_id\": ");

        let result: Result<Vec<Plan>> = store.load();
        assert!(matches!(
            result,
            Err(FitrackError::StorageCorrupt {
                collection: Collection::Plans,
                ..
            })
        ));
        // Corrupt data is left in place
        assert_eq!(
            store.backend.raw(Collection::Plans).unwrap(),
            b"[{\"plan_id\": "
        );
    }

    #[test]
    fn test_record_missing_id_is_corrupt() {
        let store = make_store();
        store
            .backend
            .set_raw(Collection::Plans, br#"[{"type": "Diet", "description": "d"}]"#);

        let result: Result<Vec<Plan>> = store.load();
        assert!(matches!(result, Err(FitrackError::StorageCorrupt { .. })));
    }

    #[test]
    fn test_non_numeric_id_is_corrupt() {
        let store = make_store();
        store.backend.set_raw(
            Collection::Plans,
            br#"[{"plan_id": "one", "type": "Diet", "description": "d"}]"#,
        );

        let result: Result<Vec<Plan>> = store.load();
        assert!(matches!(result, Err(FitrackError::StorageCorrupt { .. })));
    }

    #[test]
    fn test_failed_save_keeps_previous_content() {
        let mut store = make_store();
        store.save(&[user(1, "Ana")]).unwrap();
        let before = store.backend.raw(Collection::Users).unwrap();

        store.backend.set_simulate_write_error(true);
        let result = store.save(&[user(1, "Ana"), user(2, "Bo")]);

        assert!(matches!(
            result,
            Err(FitrackError::StorageUnavailable { .. })
        ));
        assert_eq!(store.backend.raw(Collection::Users).unwrap(), before);
    }

    #[test]
    fn test_load_missing_collection_fails_when_unwritable() {
        let store = make_store();
        store.backend.set_simulate_write_error(true);

        let result: Result<Vec<User>> = store.load();
        assert!(matches!(
            result,
            Err(FitrackError::StorageUnavailable { .. })
        ));
    }

    #[test]
    fn test_default_indent_is_four_spaces() {
        let mut store = make_store();
        store.save(&[user(1, "Ana")]).unwrap();
        let raw = String::from_utf8(store.backend.raw(Collection::Users).unwrap()).unwrap();
        assert!(raw.starts_with("[\n    {\n        \"user_id\": 1,"));
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let mut store = make_store();
        store.save(&[user(1, "José 🏃")]).unwrap();
        let raw = String::from_utf8(store.backend.raw(Collection::Users).unwrap()).unwrap();
        assert!(raw.is_ascii());
        assert!(raw.contains(r#""name": "Jos\u00e9 \ud83c\udfc3""#));

        let loaded: Vec<User> = store.load().unwrap();
        assert_eq!(loaded[0].name, "José 🏃");
    }

    #[test]
    fn test_zero_indent_writes_compact_json() {
        let mut store = make_store().with_indent(0);
        store.save(&[user(1, "Ana")]).unwrap();
        let raw = String::from_utf8(store.backend.raw(Collection::Users).unwrap()).unwrap();
        assert!(!raw.contains('\n'));
        assert!(raw.starts_with("[{\"user_id\":1,"));
    }
}
