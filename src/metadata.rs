//! Info dictionary handling.
//!
//! A PDF's document metadata lives in the trailer's `Info` dictionary.
//! [`InfoMap`] is the string-valued view of that dictionary: reading a
//! document through it keeps only `Object::String` entries, so a
//! read-modify-write drops names, numbers, and other non-string values.

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};

/// String-valued entries of a document's Info dictionary, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoMap {
    entries: Vec<(Vec<u8>, Vec<u8>, StringFormat)>,
}

impl InfoMap {
    /// Read the string-valued Info entries of `doc`.
    ///
    /// Returns an empty map when the document has no Info dictionary.
    pub fn from_document(doc: &Document) -> Self {
        let mut entries = Vec::new();

        if let Some(dict) = info_dictionary(doc) {
            for (key, value) in dict.iter() {
                if let Object::String(bytes, format) = value {
                    entries.push((key.clone(), bytes.clone(), *format));
                }
            }
        }

        Self { entries }
    }

    /// Set an entry, replacing any existing value for `key` in place.
    pub fn set(&mut self, key: &[u8], value: &str) {
        let value = value.as_bytes().to_vec();

        for entry in &mut self.entries {
            if entry.0 == key {
                entry.1 = value;
                entry.2 = StringFormat::Literal;
                return;
            }
        }

        self.entries.push((key.to_vec(), value, StringFormat::Literal));
    }

    /// Raw value bytes for `key`, if present.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(k, _, _)| k == key)
            .map(|(_, v, _)| v.as_slice())
    }

    /// The `Title` entry decoded as UTF-8 (lossily).
    pub fn title(&self) -> Option<String> {
        self.get(b"Title")
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace `doc`'s Info dictionary with exactly these entries.
    ///
    /// A fresh dictionary is installed, so anything not in the map is gone
    /// from the written document.
    pub fn apply(&self, doc: &mut Document) {
        let mut dict = Dictionary::new();
        for (key, value, format) in &self.entries {
            dict.set(key.clone(), Object::String(value.clone(), *format));
        }

        match info_dictionary_id(doc) {
            Some(id) => {
                doc.objects.insert(id, Object::Dictionary(dict));
            }
            None => {
                let id = doc.add_object(dict);
                doc.trailer.set("Info", Object::Reference(id));
            }
        }
    }
}

fn info_dictionary_id(doc: &Document) -> Option<ObjectId> {
    doc.trailer
        .get(b"Info")
        .and_then(|obj| obj.as_reference())
        .ok()
}

/// The document's Info dictionary, if present and well-formed.
pub fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let id = info_dictionary_id(doc)?;
    match doc.get_object(id) {
        Ok(Object::Dictionary(dict)) => Some(dict),
        _ => None,
    }
}
