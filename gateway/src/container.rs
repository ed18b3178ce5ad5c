use async_trait::async_trait;
use lambda_runtime::Context;
#[cfg(test)]
use mockall::automock;
use shared::error::ApplicationError;
use shared::models::event::InboundEvent;
use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;
use tracing::warn;

use crate::response::ResponseWriter;

/// The authenticated principal for the current request. Absence means
/// "unauthenticated"; once installed it stays unchanged for the rest of
/// the request lifecycle.
pub trait SecurityContext: fmt::Debug + Send + Sync {
    fn principal_name(&self) -> Option<&str>;
    fn authentication_scheme(&self) -> &str;
    fn is_user_in_role(&self, role: &str) -> bool;
    fn is_secure(&self) -> bool;
}

/// The filter's view of an in-flight request.
#[cfg_attr(test, automock)]
pub trait RequestContext {
    fn inbound_event(&self) -> Option<InboundEvent>;
    fn set_security_context(&mut self, context: Box<dyn SecurityContext>);
}

/// Applied by the container at request-setup time, before any filter runs.
pub type RequestEnhancer = Box<dyn FnOnce(&mut ContainerRequest) + Send>;

/// The external web container: routing, filter chain and business-logic
/// dispatch live behind this boundary. It applies the enhancer first,
/// then processes the request and writes exactly one response.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Container: Send + Sync {
    async fn handle_request(
        &self,
        request: ContainerRequest,
        writer: &mut (dyn ResponseWriter + 'static),
        enhancer: Option<RequestEnhancer>,
    ) -> Result<(), ApplicationError>;
}

/// The container-native request, owned by the container for the duration
/// of one request. The inbound event and the invocation context ride
/// along in typed slots so downstream code never re-parses the platform
/// payload.
#[derive(Debug)]
pub struct ContainerRequest {
    http_method: String,
    request_uri: String,
    headers: HashMap<String, Vec<String>>,
    entity: Vec<u8>,
    event: Option<InboundEvent>,
    invocation: Option<Context>,
    security_context: Option<Box<dyn SecurityContext>>,
}

impl ContainerRequest {
    pub fn new(
        http_method: String,
        request_uri: String,
        headers: HashMap<String, Vec<String>>,
        entity: Vec<u8>,
    ) -> Self {
        ContainerRequest {
            http_method,
            request_uri,
            headers,
            entity,
            event: None,
            invocation: None,
            security_context: None,
        }
    }

    pub fn http_method(&self) -> &str {
        &self.http_method
    }

    pub fn request_uri(&self) -> &str {
        &self.request_uri
    }

    pub fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    pub fn entity_bytes(&self) -> &[u8] {
        &self.entity
    }

    /// A readable stream over the body bytes; zero-length when the event
    /// carried no body.
    pub fn entity_stream(&self) -> Cursor<&[u8]> {
        Cursor::new(self.entity.as_slice())
    }

    pub fn attach_event(&mut self, event: InboundEvent) {
        self.event = Some(event);
    }

    pub fn attach_invocation_context(&mut self, context: Context) {
        self.invocation = Some(context);
    }

    pub fn invocation_context(&self) -> Option<&Context> {
        self.invocation.as_ref()
    }

    pub fn security_context(&self) -> Option<&dyn SecurityContext> {
        self.security_context.as_deref()
    }
}

impl RequestContext for ContainerRequest {
    fn inbound_event(&self) -> Option<InboundEvent> {
        self.event.clone()
    }

    fn set_security_context(&mut self, context: Box<dyn SecurityContext>) {
        if self.security_context.is_some() {
            warn!("security context already set for this request, keeping the first one");
            return;
        }
        self.security_context = Some(context);
    }
}
