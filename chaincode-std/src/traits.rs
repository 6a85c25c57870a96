//! This module defines the capability surface chaincode is written against.
//! The same chaincode can then run against a real peer or against the mock
//! stubs of `chaincode-testing`.
use crate::{create_composite_key, impls::prefix_range_end, types::*};
use std::{collections::BTreeMap, time::SystemTime};

/// Objects which provide the argument vector of the current invocation.
///
/// Element 0 of the vector is the function selector, the remaining elements
/// are its parameters.
///
/// Only [`args`](Self::args) is required. Every other method is derived from
/// it, so an implementor that replaces the argument vector only overrides
/// `args` and all the derived views follow. These provided methods are the
/// complete set of operations that depend on argument retrieval; extend this
/// list, never a concrete stub, when another view is needed.
pub trait HasArguments {
    /// The argument vector exactly as it was supplied.
    fn args(&self) -> &[Vec<u8>];

    /// The arguments decoded as UTF-8. Invalid sequences are replaced by
    /// `U+FFFD`.
    fn string_args(&self) -> Vec<String> {
        self.args().iter().map(|arg| String::from_utf8_lossy(arg).into_owned()).collect()
    }

    /// The function selector and its parameters.
    ///
    /// Returns an empty selector and no parameters for an empty argument
    /// vector.
    fn function_and_parameters(&self) -> (String, Vec<String>) {
        let mut args = self.string_args().into_iter();
        match args.next() {
            Some(function) => (function, args.collect()),
            None => (String::new(), Vec::new()),
        }
    }

    /// All arguments concatenated into one byte string.
    fn args_slice(&self) -> Vec<u8> { self.args().concat() }
}

/// Objects which give access to the key-value ledger state.
pub trait HasState {
    /// Lookup the value stored under `key`. Returns `None` if the key is not
    /// present.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StateError>;

    /// Remove `key` from the state. Removing a missing key is not an error.
    fn del_state(&mut self, key: &str) -> Result<(), StateError>;

    /// All entries with keys in the half-open range `[start_key, end_key)`,
    /// ordered by key. An empty bound means the range is unbounded on that
    /// side.
    fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Vec<(String, Vec<u8>)>, StateError>;

    /// All entries whose composite key has the given object type and starts
    /// with the given attributes.
    fn get_state_by_partial_composite_key(
        &self,
        object_type: &str,
        attributes: &[&str],
    ) -> Result<Vec<(String, Vec<u8>)>, StateError> {
        let start_key = create_composite_key(object_type, attributes)?;
        self.get_state_by_range(&start_key, &prefix_range_end(&start_key))
    }
}

/// Objects which give access to the transient data of the current
/// invocation.
///
/// Transient data is supplied out of band by the client and is never
/// committed to the ledger.
pub trait HasTransient {
    fn transient(&self) -> &BTreeMap<String, Vec<u8>>;
}

/// Objects which know the transaction the current invocation is part of.
pub trait HasTransaction {
    /// Identifier of the current transaction. Empty outside a transaction.
    fn tx_id(&self) -> &str;

    /// Time the current transaction was started.
    fn tx_timestamp(&self) -> Option<SystemTime>;
}

/// The complete execution context handed to a chaincode entry point.
pub trait HasChaincodeStub: HasArguments + HasState + HasTransient + HasTransaction {}

impl<T: HasArguments + HasState + HasTransient + HasTransaction> HasChaincodeStub for T {}

/// Entry points of a chaincode.
pub trait Chaincode {
    /// Called once when the chaincode is instantiated.
    fn init<S: HasChaincodeStub>(&self, stub: &mut S) -> Response;

    /// Called for every transaction. The selector is usually obtained with
    /// [`HasArguments::function_and_parameters`].
    fn invoke<S: HasChaincodeStub>(&self, stub: &mut S) -> Response;
}
