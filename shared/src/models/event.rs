use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use typed_builder::TypedBuilder as Builder;

/// One invocation's worth of request data, as delivered by the platform.
/// Built once per invocation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[builder(setter(into))]
    pub http_method: String,

    /// Path plus the verbatim query string, e.g. `/a?b=c&d=e`.
    #[builder(setter(into))]
    pub request_uri: String,

    #[serde(default)]
    #[builder(default)]
    pub headers: HashMap<String, Vec<String>>,

    #[serde(default)]
    #[builder(default, setter(into))]
    pub body: Option<String>,

    #[serde(default)]
    #[builder(default)]
    pub request_context: Option<EventContext>,
}

/// The slice of the platform request context this crate cares about:
/// the claims attached by an upstream authorizer, if any.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder)]
pub struct EventContext {
    #[serde(default)]
    #[builder(default)]
    pub authorizer: Option<HashMap<String, Value>>,
}

impl From<ApiGatewayProxyRequest> for InboundEvent {
    fn from(request: ApiGatewayProxyRequest) -> Self {
        let mut request_uri = request.path.unwrap_or_else(|| "/".to_string());
        let query = request.multi_value_query_string_parameters;
        if !query.is_empty() {
            request_uri.push('?');
            request_uri.push_str(&query.to_query_string());
        }

        let headers = if request.multi_value_headers.is_empty() {
            header_values(&request.headers)
        } else {
            header_values(&request.multi_value_headers)
        };

        let authorizer = request.request_context.authorizer;
        let request_context = Some(EventContext {
            authorizer: if authorizer.is_empty() {
                None
            } else {
                Some(authorizer)
            },
        });

        InboundEvent {
            http_method: request.http_method.to_string(),
            request_uri,
            headers,
            body: request.body,
            request_context,
        }
    }
}

fn header_values(map: &HeaderMap) -> HashMap<String, Vec<String>> {
    let mut headers = HashMap::new();
    for name in map.keys() {
        let values = map
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect();
        headers.insert(name.as_str().to_string(), values);
    }
    headers
}
