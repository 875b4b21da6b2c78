//! JSON-RPC 2.0 over HTTP.
//!
//! - **Protocol**: request/response envelopes and error-object mapping
//! - **Transport**: HTTP POST of one envelope per call, session injection,
//!   status and envelope validation

pub mod protocol;
pub mod transport;

pub use protocol::{Params, RpcErrorObject, RpcRequest, RpcResponse};
pub use transport::RpcTransport;
