//! The chaincode standard library.
//!
//! Chaincode receives its execution context as a value implementing
//! [`HasChaincodeStub`]. The context bundles
//!
//! - the argument vector, see [`HasArguments`],
//! - the key-value ledger state, see [`HasState`],
//! - the transient data that is never committed, see [`HasTransient`],
//! - the transaction identifier, see [`HasTransaction`].
//!
//! Every invocation produces exactly one [`Response`].
//!
//! ```ignore
//! use chaincode_std::*;
//!
//! struct Echo;
//!
//! impl Chaincode for Echo {
//!     fn init<S: HasChaincodeStub>(&self, _stub: &mut S) -> Response { Response::success(vec![]) }
//!
//!     fn invoke<S: HasChaincodeStub>(&self, stub: &mut S) -> Response {
//!         let (function, _params) = stub.function_and_parameters();
//!         Response::success(function)
//!     }
//! }
//! ```
mod constants;
mod impls;
mod traits;
mod types;

pub use constants::*;
pub use impls::{create_composite_key, split_composite_key};
pub use traits::*;
pub use types::*;
