//! Transient data of a single invocation.
use base64ct::{Base64, Encoding};
use std::collections::BTreeMap;
use thiserror::Error;

/// An error that can occur while populating a [`TransientStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransientError {
    /// The value of a field is not valid padded base64.
    #[error("transient field '{field}' is not valid base64: {source}")]
    Decode {
        /// The offending field.
        field:  String,
        #[source]
        source: base64ct::Error,
    },
}

/// Decoded transient data, keyed by field name.
///
/// The store is replaced as a whole by every call to
/// [`populate`](Self::populate); entries are never merged with those of a
/// previous invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransientStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl TransientStore {
    pub fn new() -> Self { Self::default() }

    /// Decode every value from base64 and replace the contents of the store.
    ///
    /// Either all values decode and the store is replaced, or an error is
    /// returned and the store keeps its previous contents.
    pub fn populate<I, K, V>(&mut self, entries: I) -> Result<(), TransientError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>, {
        let decoded = entries
            .into_iter()
            .map(|(field, value)| {
                let field = field.into();
                match Base64::decode_vec(value.as_ref()) {
                    Ok(bytes) => Ok((field, bytes)),
                    Err(source) => Err(TransientError::Decode {
                        field,
                        source,
                    }),
                }
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        self.entries = decoded;
        Ok(())
    }

    /// The current contents of the store.
    pub fn read(&self) -> &BTreeMap<String, Vec<u8>> { &self.entries }

    /// Encode raw bytes the way [`populate`](Self::populate) expects them.
    pub fn encode(value: &[u8]) -> String { Base64::encode_string(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_decodes_base64() {
        let mut store = TransientStore::new();
        store
            .populate([("note", "PHhtbD50aGlzIGlzIGFuIGV4YW1wbGFyeSBub3RlPC94bWw+")])
            .expect("valid base64");
        assert_eq!(
            store.read().get("note").map(Vec::as_slice),
            Some(&b"<xml>this is an examplary note</xml>"[..])
        );
    }

    #[test]
    fn populate_replaces_instead_of_merging() {
        let mut store = TransientStore::new();
        store.populate([("a", "AQ=="), ("b", "Ag==")]).expect("valid base64");
        store.populate([("c", "Aw==")]).expect("valid base64");
        assert_eq!(store.read().keys().collect::<Vec<_>>(), vec!["c"]);
    }

    #[test]
    fn failed_populate_keeps_previous_contents() {
        let mut store = TransientStore::new();
        store.populate([("a", "AQ==")]).expect("valid base64");
        let err = store
            .populate([("b", "Ag=="), ("c", "not base64!")])
            .expect_err("invalid base64 must be rejected");
        assert!(matches!(err, TransientError::Decode { ref field, .. } if field == "c"));
        assert_eq!(store.read().keys().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn unpadded_values_are_rejected() {
        let mut store = TransientStore::new();
        assert!(store.populate([("a", "AQ")]).is_err());
    }

    #[test]
    fn empty_value_decodes_to_empty_bytes() {
        let mut store = TransientStore::new();
        store.populate([("a", "")]).expect("empty input is valid base64");
        assert_eq!(store.read().get("a"), Some(&Vec::new()));
    }

    #[test]
    fn encode_matches_populate() {
        let mut store = TransientStore::new();
        store.populate([("k", TransientStore::encode(&[0, 255, 7]))]).expect("encoded by us");
        assert_eq!(store.read()["k"], vec![0, 255, 7]);
    }
}
