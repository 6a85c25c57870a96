use crate::{constants::*, ledger::LedgerStore, transient::*, types::*};
use chaincode_std::*;
use log::{debug, warn};
use std::{
    collections::BTreeMap,
    mem,
    time::{SystemTime, UNIX_EPOCH},
};

impl MockStub {
    /// Create an environment with an empty ledger and no open transaction.
    /// Transactions report the unix epoch as their start time.
    pub fn new(name: impl Into<String>) -> Self { Self::new_with_time(name, UNIX_EPOCH) }

    /// Create an environment whose transactions report `time` as their start
    /// time.
    pub fn new_with_time(name: impl Into<String>, time: SystemTime) -> Self {
        Self {
            name:         name.into(),
            state:        LedgerStore::new(),
            args:         Vec::new(),
            transient:    BTreeMap::new(),
            tx_id:        String::new(),
            tx_timestamp: None,
            time,
        }
    }

    /// The ledger state, for direct inspection by tests.
    pub fn state(&self) -> &LedgerStore { &self.state }

    /// Open a transaction. State writes are only allowed while a transaction
    /// is open.
    pub fn mock_transaction_start(&mut self, tx_id: &str) {
        debug!("{}: starting transaction {}", self.name, tx_id);
        self.tx_id = tx_id.to_string();
        self.tx_timestamp = Some(self.time);
    }

    /// Close the open transaction.
    pub fn mock_transaction_end(&mut self, tx_id: &str) {
        if self.tx_id != tx_id {
            warn!(
                "{}: ending transaction {} while transaction {:?} is open",
                self.name, tx_id, self.tx_id
            );
        }
        debug!("{}: ending transaction {}", self.name, tx_id);
        self.tx_id.clear();
        self.tx_timestamp = None;
    }

    /// Call the `init` entry point of `chaincode` inside transaction `tx_id`
    /// with this environment's own argument vector set to `args`.
    pub fn mock_init<C: Chaincode>(
        &mut self,
        chaincode: &C,
        tx_id: &str,
        args: Vec<Vec<u8>>,
    ) -> Response {
        self.args = args;
        self.mock_transaction_start(tx_id);
        let response = chaincode.init(self);
        self.mock_transaction_end(tx_id);
        response
    }

    /// Call the `invoke` entry point of `chaincode` inside transaction `tx_id`
    /// with this environment's own argument vector set to `args`.
    ///
    /// The chaincode sees no transient data.
    pub fn mock_invoke<C: Chaincode>(
        &mut self,
        chaincode: &C,
        tx_id: &str,
        args: Vec<Vec<u8>>,
    ) -> Response {
        self.args = args;
        self.mock_transaction_start(tx_id);
        let response = chaincode.invoke(self);
        self.mock_transaction_end(tx_id);
        response
    }
}

impl HasArguments for MockStub {
    fn args(&self) -> &[Vec<u8>] { &self.args }
}

impl HasState for MockStub {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.state.get(key).map(<[u8]>::to_vec))
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        if self.tx_id.is_empty() {
            return Err(StateError::NoTransaction("put state"));
        }
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }
        debug!("{}: putting {} bytes under {:?}", self.name, value.len(), key);
        self.state.put(key, value);
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> Result<(), StateError> {
        if self.tx_id.is_empty() {
            return Err(StateError::NoTransaction("delete state"));
        }
        debug!("{}: deleting {:?}", self.name, key);
        self.state.delete(key);
        Ok(())
    }

    fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Vec<(String, Vec<u8>)>, StateError> {
        Ok(self.state.range(start_key, end_key))
    }
}

impl HasTransient for MockStub {
    fn transient(&self) -> &BTreeMap<String, Vec<u8>> { &self.transient }
}

impl HasTransaction for MockStub {
    fn tx_id(&self) -> &str { &self.tx_id }

    fn tx_timestamp(&self) -> Option<SystemTime> { self.tx_timestamp }
}

impl Default for InvocationStub {
    fn default() -> Self { Self::new() }
}

impl InvocationStub {
    /// Create a stub where
    ///  - the wrapped environment is named [`MOCK_STUB_NAME`],
    ///  - every invocation runs in transaction [`DEFAULT_TX_ID`],
    ///  - the argument vector and the transient data are empty.
    pub fn new() -> Self { Self::new_with_name_and_tx_id(MOCK_STUB_NAME, DEFAULT_TX_ID) }

    /// Create a stub with a custom environment name and transaction
    /// identifier.
    pub fn new_with_name_and_tx_id(name: impl Into<String>, tx_id: impl Into<String>) -> Self {
        Self {
            base:      MockStub::new(name),
            args:      Vec::new(),
            transient: TransientStore::new(),
            tx_id:     tx_id.into(),
        }
    }

    /// Replace the transient data. Every value must be padded base64.
    ///
    /// If any value fails to decode, the previous transient data is kept and
    /// the error names the offending field.
    pub fn set_transient<I, K, V>(&mut self, entries: I) -> Result<(), TransientError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>, {
        self.transient.populate(entries)
    }

    /// Replace the argument vector. No validation is done, an empty vector is
    /// allowed.
    pub fn set_args(&mut self, args: Vec<Vec<u8>>) { self.args = args; }

    /// The environment the last invocation ran against. After
    /// [`invoke_on_existing`](Self::invoke_on_existing) this is a copy of the
    /// caller's environment taken when the invocation finished.
    pub fn environment(&self) -> &MockStub { &self.base }

    /// Consume the stub and return the environment it wraps.
    pub fn into_environment(self) -> MockStub { self.base }

    /// Invoke `chaincode` against a new, empty environment.
    ///
    /// The new environment replaces the wrapped one, so ledger writes of
    /// earlier invocations are not visible. It stays accessible through
    /// [`HasState`] and [`environment`](Self::environment) until the next
    /// fresh invocation.
    pub fn invoke_fresh<C: Chaincode>(&mut self, chaincode: &C, args: Vec<Vec<u8>>) -> Response {
        self.base = MockStub::new_with_time(self.base.name.clone(), self.base.time);
        self.dispatch(chaincode, args)
    }

    /// Invoke `chaincode` against `environment`.
    ///
    /// Ledger writes go to `environment`, so a sequence of invocations on the
    /// same environment share state. Afterwards the stub wraps a copy of
    /// `environment`, so the writes are also visible through the stub's own
    /// [`HasState`] until the next invocation. Writes made to `environment`
    /// directly after this call are only visible through `environment`.
    pub fn invoke_on_existing<C: Chaincode>(
        &mut self,
        chaincode: &C,
        args: Vec<Vec<u8>>,
        environment: &mut MockStub,
    ) -> Response {
        mem::swap(&mut self.base, environment);
        let response = self.dispatch(chaincode, args);
        mem::swap(&mut self.base, environment);
        self.base = environment.clone();
        response
    }

    /// Install the arguments and run the `invoke` entry point between a
    /// transaction start and end. The response is returned untouched.
    fn dispatch<C: Chaincode>(&mut self, chaincode: &C, args: Vec<Vec<u8>>) -> Response {
        self.set_args(args);
        let tx_id = self.tx_id.clone();
        self.base.mock_transaction_start(&tx_id);
        let response = chaincode.invoke(self);
        self.base.mock_transaction_end(&tx_id);
        debug!(
            "{}: invocation finished with status {} and {} bytes of payload",
            self.base.name,
            response.status,
            response.payload.len()
        );
        response
    }
}

// Only the argument primitive is replaced; the derived views come from
// `HasArguments` and therefore see these arguments as well.
impl HasArguments for InvocationStub {
    fn args(&self) -> &[Vec<u8>] { &self.args }
}

impl HasTransient for InvocationStub {
    fn transient(&self) -> &BTreeMap<String, Vec<u8>> { self.transient.read() }
}

impl HasState for InvocationStub {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        self.base.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        self.base.put_state(key, value)
    }

    fn del_state(&mut self, key: &str) -> Result<(), StateError> { self.base.del_state(key) }

    fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Vec<(String, Vec<u8>)>, StateError> {
        self.base.get_state_by_range(start_key, end_key)
    }
}

impl HasTransaction for InvocationStub {
    fn tx_id(&self) -> &str { self.base.tx_id() }

    fn tx_timestamp(&self) -> Option<SystemTime> { self.base.tx_timestamp() }
}
