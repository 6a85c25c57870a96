use crate::{ledger::LedgerStore, transient::TransientStore};
use std::{collections::BTreeMap, time::SystemTime};

/// The simulated base environment a chaincode runs in.
///
/// It owns the ledger state, so a single `MockStub` shared by several
/// invocations lets them observe each other's writes. Its own argument
/// vector is only set through [`mock_invoke`](Self::mock_invoke) and
/// [`mock_init`](Self::mock_init), and it has no way of receiving transient
/// data. Use [`InvocationStub`] to drive invocations with transient data.
#[derive(Debug, Clone)]
pub struct MockStub {
    /// The name of the simulated chaincode.
    pub name:                String,
    /// The ledger state.
    pub(crate) state:        LedgerStore,
    /// Arguments of the last invocation started through this environment.
    pub(crate) args:         Vec<Vec<u8>>,
    /// Always empty.
    pub(crate) transient:    BTreeMap<String, Vec<u8>>,
    /// Identifier of the open transaction, empty if none is open.
    pub(crate) tx_id:        String,
    /// Start time of the open transaction.
    pub(crate) tx_timestamp: Option<SystemTime>,
    /// Time reported as the start of every transaction. Defaults to the
    /// unix epoch.
    pub time:                SystemTime,
}

/// The mock execution context handed to chaincode by the invocation driver.
///
/// It wraps a [`MockStub`] and replaces exactly two capabilities of it: the
/// argument vector and the transient data. Ledger access and the transaction
/// context are forwarded to the wrapped environment unchanged.
///
/// # Example
///
/// ```ignore
/// let mut stub = InvocationStub::new();
/// stub.set_transient([("encryptionKey", "6BJVZR1nq6hPiOHCVTtziRd4eusri+I46kJp4gkwZ3c=")])?;
/// let response = stub.invoke_fresh(&MyChaincode, vec![b"new".to_vec(), b"key1".to_vec()]);
/// assert_eq!(response.message, "");
/// ```
#[derive(Debug, Clone)]
pub struct InvocationStub {
    /// The wrapped environment. After an invocation on an existing
    /// environment this is a copy of that environment as the invocation left
    /// it.
    pub(crate) base:      MockStub,
    /// Arguments of the current invocation.
    pub(crate) args:      Vec<Vec<u8>>,
    /// Transient data of the current invocation.
    pub(crate) transient: TransientStore,
    /// Transaction identifier used for every invocation.
    pub(crate) tx_id:     String,
}
