//! API implementation submodules.
//!
//! Each submodule contains `impl WobbleClient` blocks, one per area of the
//! remote API. The struct definition remains in `lib.rs`.

mod contacts;
mod notifications;
mod posts;
mod session;
mod topics;

use crate::rpc::Params;
use crate::{Result, WobbleClient};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Build a parameter map from name/value pairs.
pub(crate) fn params<const N: usize>(pairs: [(&str, Value); N]) -> Params {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

impl WobbleClient {
    /// Issue one call with the current session and decode its result.
    pub(crate) async fn call<T: DeserializeOwned>(&self, method: &str, params: Params) -> Result<T> {
        self.transport
            .call_typed(method, params, &self.session)
            .await
    }
}
