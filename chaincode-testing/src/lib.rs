//! A library for testing chaincode without a ledger network.
//!
//! The library provides two execution contexts implementing
//! [`HasChaincodeStub`](chaincode_std::HasChaincodeStub):
//!
//! - [`MockStub`], the simulated base environment. It owns the ledger state
//!   and can run invocations with its own argument vector.
//! - [`InvocationStub`], which wraps a [`MockStub`] and replaces its argument
//!   vector and transient data. This is the context used to drive chaincode
//!   from tests.
//!
//! Every invocation is bracketed by a transaction start and end, and returns
//! the chaincode's [`Response`](chaincode_std::Response) unchanged.
//!
//! # Example
//!
//! ```ignore
//! use chaincode_testing::*;
//!
//! let mut stub = InvocationStub::new();
//! let mut environment = MockStub::new(MOCK_STUB_NAME);
//!
//! stub.set_transient([("encryptionKey", key), ("initVector", iv), ("note", note)])?;
//! let created = stub.invoke_on_existing(&contract, vec![b"new".to_vec()], &mut environment);
//!
//! stub.set_transient([("encryptionKey", key), ("initVector", iv)])?;
//! let queried = stub.invoke_on_existing(&contract, vec![b"query".to_vec()], &mut environment);
//! ```
mod constants;
mod impls;
mod ledger;
mod transient;
mod types;

pub use chaincode_std::*;
pub use constants::*;
pub use ledger::LedgerStore;
pub use transient::{TransientError, TransientStore};
pub use types::*;
