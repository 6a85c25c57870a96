//! Chaincode and helpers that are used in most or all of the tests in this
//! folder.
// `cargo test` compiles each test file independently, and not every file
// uses every helper.
#![allow(dead_code)]

use chaincode_testing::*;
use std::{cell::RefCell, collections::BTreeMap, time::SystemTime};

/// Install a logger once per test binary. Output is only shown for failing
/// tests.
pub(crate) fn init_logger() { let _ = env_logger::builder().is_test(true).try_init(); }

/// Turn string literals into an argument vector.
pub(crate) fn args(items: &[&str]) -> Vec<Vec<u8>> {
    items.iter().map(|item| item.as_bytes().to_vec()).collect()
}

/// Everything a chaincode could observe through the argument and transient
/// capabilities of its stub.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Observation {
    pub(crate) args:                    Vec<Vec<u8>>,
    pub(crate) string_args:             Vec<String>,
    pub(crate) function_and_parameters: (String, Vec<String>),
    pub(crate) args_slice:              Vec<u8>,
    pub(crate) transient:               BTreeMap<String, Vec<u8>>,
    pub(crate) tx_id:                   String,
    pub(crate) tx_timestamp:            Option<SystemTime>,
}

/// Records what it observes on every invocation and always succeeds.
#[derive(Default)]
pub(crate) struct Recorder {
    pub(crate) observations: RefCell<Vec<Observation>>,
}

impl Recorder {
    fn record<S: HasChaincodeStub>(&self, stub: &S) -> Response {
        self.observations.borrow_mut().push(Observation {
            args:                    stub.args().to_vec(),
            string_args:             stub.string_args(),
            function_and_parameters: stub.function_and_parameters(),
            args_slice:              stub.args_slice(),
            transient:               stub.transient().clone(),
            tx_id:                   stub.tx_id().to_string(),
            tx_timestamp:            stub.tx_timestamp(),
        });
        Response::success(Vec::new())
    }

    /// The observation of the most recent invocation.
    pub(crate) fn last(&self) -> Observation {
        self.observations.borrow().last().cloned().expect("at least one invocation")
    }
}

impl Chaincode for Recorder {
    fn init<S: HasChaincodeStub>(&self, stub: &mut S) -> Response { self.record(stub) }

    fn invoke<S: HasChaincodeStub>(&self, stub: &mut S) -> Response { self.record(stub) }
}

/// A key-value store chaincode.
///
/// - `put <key> <value>` stores a value,
/// - `get <key>` returns the value as payload,
/// - `del <key>` removes a value,
/// - `range <start> <end>` returns the matching keys separated by `,`,
/// - `fail <status> <message>` returns the given status and message.
pub(crate) struct KeyValue;

impl KeyValue {
    fn run<S: HasChaincodeStub>(stub: &mut S) -> Result<Response, StateError> {
        let (function, params) = stub.function_and_parameters();
        let param = |i: usize| params.get(i).map(String::as_str).unwrap_or_default();
        let response = match function.as_str() {
            "put" => {
                stub.put_state(param(0), param(1).as_bytes().to_vec())?;
                Response::success(Vec::new())
            }
            "get" => match stub.get_state(param(0))? {
                Some(value) => Response::success(value),
                None => Response::error(format!("no value under '{}'", param(0))),
            },
            "del" => {
                stub.del_state(param(0))?;
                Response::success(Vec::new())
            }
            "range" => {
                let keys: Vec<String> = stub
                    .get_state_by_range(param(0), param(1))?
                    .into_iter()
                    .map(|(key, _)| key)
                    .collect();
                Response::success(keys.join(","))
            }
            "fail" => Response {
                status:  param(0).parse().unwrap_or(ERROR),
                message: param(1).to_string(),
                payload: b"partial".to_vec(),
            },
            other => Response::error(format!("unknown function '{other}'")),
        };
        Ok(response)
    }
}

impl Chaincode for KeyValue {
    fn init<S: HasChaincodeStub>(&self, _stub: &mut S) -> Response { Response::success(Vec::new()) }

    fn invoke<S: HasChaincodeStub>(&self, stub: &mut S) -> Response {
        Self::run(stub).unwrap_or_else(|err| Response::error(err.to_string()))
    }
}
