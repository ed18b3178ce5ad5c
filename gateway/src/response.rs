use http::StatusCode;
use shared::error::ApplicationError;
use shared::models::response::OutboundResponse;
use std::collections::HashMap;
use tracing::warn;

/// Handed to the container alongside the request; the container writes
/// its final response attributes through it exactly once.
pub trait ResponseWriter: Send {
    fn write_response(
        &mut self,
        status: StatusCode,
        headers: &HashMap<String, Vec<String>>,
        body: Vec<u8>,
    ) -> Result<(), ApplicationError>;
}

/// Accumulates the container's response into the platform shape.
/// `response()` yields nothing until the container has written.
#[derive(Debug, Default)]
pub struct OutboundResponseWriter {
    response: Option<OutboundResponse>,
}

impl OutboundResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn response(&self) -> Option<&OutboundResponse> {
        self.response.as_ref()
    }

    pub fn into_response(self) -> Option<OutboundResponse> {
        self.response
    }
}

impl ResponseWriter for OutboundResponseWriter {
    fn write_response(
        &mut self,
        status: StatusCode,
        headers: &HashMap<String, Vec<String>>,
        body: Vec<u8>,
    ) -> Result<(), ApplicationError> {
        if self.response.is_some() {
            warn!("response already written for this request, replacing it");
        }

        // Minimal platform contract: one value per header.
        let headers = headers
            .iter()
            .filter_map(|(name, values)| values.first().map(|value| (name.clone(), value.clone())))
            .collect();

        self.response = Some(
            OutboundResponse::builder()
                .status_code(status.as_u16())
                .status_message(status.canonical_reason().map(str::to_string))
                .headers(headers)
                .body(String::from_utf8_lossy(&body).into_owned())
                .build(),
        );

        Ok(())
    }
}
