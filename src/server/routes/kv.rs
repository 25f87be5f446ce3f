//! The `/get` and `/put` operations.

use serde::{Deserialize, Serialize};

use crate::service::{PutOutcome, Service};
use crate::store::RecordStore;

use super::super::operation::Operation;

/// Body of `POST /get`.
///
/// A missing `key` decodes as empty, which simply finds nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRequest {
    pub key: String,
}

/// Response of `POST /get`. `value` is empty when nothing could be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResponse {
    pub key: String,
    pub value: String,
}

/// Body of `POST /put`.
///
/// Missing fields decode as empty and are then rejected by validation, so
/// they are reported in `err` rather than as a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PutRequest {
    pub key: String,
    pub value: String,
}

/// Response of `POST /put`. `err` is empty on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutResponse {
    pub err: String,
}

impl From<&PutOutcome> for PutResponse {
    fn from(outcome: &PutOutcome) -> Self {
        Self {
            err: outcome.error_message(),
        }
    }
}

pub struct GetOperation;

impl Operation for GetOperation {
    const NAME: &'static str = "get";

    type Request = GetRequest;
    type Response = GetResponse;

    fn invoke<S: RecordStore>(service: &Service<S>, request: GetRequest) -> GetResponse {
        let value = service.get(&request.key).value().to_string();
        GetResponse {
            key: request.key,
            value,
        }
    }
}

pub struct PutOperation;

impl Operation for PutOperation {
    const NAME: &'static str = "put";

    type Request = PutRequest;
    type Response = PutResponse;

    fn invoke<S: RecordStore>(service: &Service<S>, request: PutRequest) -> PutResponse {
        PutResponse::from(&service.put(&request.key, &request.value))
    }
}
