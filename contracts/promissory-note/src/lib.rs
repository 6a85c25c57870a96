//! Promissory note chaincode.
//!
//! Stores notes encrypted with a key supplied by the client, together with a
//! plain signature. The key, the initialization vector and the note itself
//! are passed as transient data, so they never end up on the ledger.
//!
//! Functions:
//! - `new <signature>` encrypts the transient `note` field with the transient
//!   `encryptionKey` and `initVector` and stores it. The payload of the
//!   response is the ledger key of the stored [`Transaction`].
//! - `query [key]` decrypts the note stored under `key`, or the most recently
//!   created note if no key is given. The payload of the response is a JSON
//!   encoded [`DecryptedTransaction`].
use chaincode_std::*;
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use thiserror::Error;

mod encrypter;

pub use encrypter::{Aes256Encrypter, Encrypter};

/// Transient field holding the base64 encoded AES key.
pub const FIELD_ENCRYPTION_KEY: &str = "encryptionKey";
/// Transient field holding the base64 encoded initialization vector.
pub const FIELD_INIT_VECTOR: &str = "initVector";
/// Transient field holding the base64 encoded note.
pub const FIELD_NOTE: &str = "note";
/// Ledger key pointing to the most recently created note.
pub const LATEST_NOTE_KEY: &str = "latestNote";

/// Object type of the composite keys notes are stored under.
const NOTE_OBJECT_TYPE: &str = "note";

/// A note as it is stored on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Signature")]
    pub signature:      String,
    #[serde(rename = "EncryptedNote", with = "base64_bytes")]
    pub encrypted_note: Vec<u8>,
}

/// A note as it is returned by `query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptedTransaction {
    #[serde(rename = "Signature")]
    pub signature:      String,
    #[serde(rename = "DecryptedNote")]
    pub decrypted_note: String,
}

/// Byte fields are stored as base64 strings.
mod base64_bytes {
    use base64ct::{Base64, Encoding};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Base64::encode_string(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Base64::decode_vec(&encoded).map_err(de::Error::custom)
    }
}

#[derive(Debug, Error)]
enum NoteError {
    #[error("Invoke: '{0}' field empty")]
    MissingField(&'static str),
    #[error("Invoke: incorrect number of arguments, expecting a signature")]
    MissingSignature,
    #[error("Invoke: unknown function '{0}'")]
    UnknownFunction(String),
    #[error("Invoke: no note stored under {0:?}")]
    NoteNotFound(String),
    #[error("Invoke: {0}")]
    State(#[from] StateError),
    #[error("Invoke: {0}")]
    Crypto(#[from] anyhow::Error),
    #[error("Invoke: malformed note record: {0}")]
    Record(#[from] serde_json::Error),
}

type NoteResult<A> = Result<A, NoteError>;

/// Look up a transient field, treating an empty value as missing.
fn required_field(
    transient: &BTreeMap<String, Vec<u8>>,
    field: &'static str,
) -> NoteResult<Vec<u8>> {
    match transient.get(field) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(NoteError::MissingField(field)),
    }
}

/// The key a stored note is kept under: a composite key over the SHA-256
/// digest of the stored record.
fn note_key(record: &[u8]) -> NoteResult<String> {
    let digest = hex::encode(Sha256::digest(record));
    Ok(create_composite_key(NOTE_OBJECT_TYPE, &[&digest])?)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PromissoryNote;

impl PromissoryNote {
    fn create<S: HasChaincodeStub>(stub: &mut S, params: &[String]) -> NoteResult<Response> {
        let transient = stub.transient();
        let key = required_field(transient, FIELD_ENCRYPTION_KEY)?;
        let note = required_field(transient, FIELD_NOTE)?;
        let iv = required_field(transient, FIELD_INIT_VECTOR)?;
        let signature = params.first().ok_or(NoteError::MissingSignature)?;

        let encrypter = Aes256Encrypter::new(stub.tx_id(), &key, &iv)?;
        let record = serde_json::to_vec(&Transaction {
            signature:      signature.clone(),
            encrypted_note: encrypter.encrypt(&note)?,
        })?;
        let key = note_key(&record)?;
        stub.put_state(&key, record)?;
        stub.put_state(LATEST_NOTE_KEY, key.clone().into_bytes())?;
        debug!("stored note under {:?}", key);
        Ok(Response::success(key))
    }

    fn query<S: HasChaincodeStub>(stub: &mut S, params: &[String]) -> NoteResult<Response> {
        let transient = stub.transient();
        let key = required_field(transient, FIELD_ENCRYPTION_KEY)?;
        let iv = required_field(transient, FIELD_INIT_VECTOR)?;

        let note_key = match params.first() {
            Some(note_key) => note_key.clone(),
            None => stub
                .get_state(LATEST_NOTE_KEY)?
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .ok_or_else(|| NoteError::NoteNotFound(LATEST_NOTE_KEY.to_string()))?,
        };
        let record = stub.get_state(&note_key)?.ok_or(NoteError::NoteNotFound(note_key))?;
        let record: Transaction = serde_json::from_slice(&record)?;

        let encrypter = Aes256Encrypter::new(stub.tx_id(), &key, &iv)?;
        let decrypted = encrypter.decrypt(&record.encrypted_note)?;
        let decrypted_note = String::from_utf8(decrypted).map_err(anyhow::Error::from)?;
        let payload = serde_json::to_vec(&DecryptedTransaction {
            signature: record.signature,
            decrypted_note,
        })?;
        Ok(Response::success(payload))
    }
}

impl Chaincode for PromissoryNote {
    fn init<S: HasChaincodeStub>(&self, _stub: &mut S) -> Response { Response::success(Vec::new()) }

    fn invoke<S: HasChaincodeStub>(&self, stub: &mut S) -> Response {
        let (function, params) = stub.function_and_parameters();
        let result = match function.as_str() {
            "new" => Self::create(stub, &params),
            "query" => Self::query(stub, &params),
            other => Err(NoteError::UnknownFunction(other.to_string())),
        };
        result.unwrap_or_else(|err| Response::error(err.to_string()))
    }
}
