use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use typed_builder::TypedBuilder as Builder;

/// The platform response shape: one per request, written exactly once.
/// Headers carry a single value each in the minimal contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResponse {
    pub status_code: u16,

    #[serde(default)]
    #[builder(default)]
    pub headers: HashMap<String, String>,

    #[serde(default)]
    #[builder(default, setter(into))]
    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub status_message: Option<String>,
}
