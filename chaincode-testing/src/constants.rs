//! Defaults of the mock environment.

/// Name given to every base environment created by the invocation driver.
pub const MOCK_STUB_NAME: &str = "mockChaincodeStub";

/// Transaction identifier used to bracket every invocation made by the
/// driver.
pub const DEFAULT_TX_ID: &str = "test";
