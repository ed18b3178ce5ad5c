use tracing::debug;

use crate::container::RequestContext;
use crate::security::provider::SecurityContextProvider;

/// Pre-matching filter that turns authorizer claims into the request's
/// security context.
///
/// Single pass per request: if the inbound event, its request context or
/// the claims mapping is missing (or the mapping is empty, which counts
/// the same as absent), the request is left untouched and the setter is
/// never invoked. Only a non-empty claims mapping installs a context,
/// exactly once.
pub struct AuthorizerFilter<P> {
    provider: P,
}

impl<P: SecurityContextProvider> AuthorizerFilter<P> {
    pub fn new(provider: P) -> Self {
        AuthorizerFilter { provider }
    }

    pub fn filter(&self, request: &mut dyn RequestContext) {
        let event = match request.inbound_event() {
            Some(event) => event,
            None => {
                debug!("no inbound event attached to the request, skipping authorizer filter");
                return;
            }
        };

        let event_context = match event.request_context {
            Some(context) => context,
            None => {
                debug!("event carries no request context, skipping authorizer filter");
                return;
            }
        };

        let claims = match event_context.authorizer {
            Some(claims) if !claims.is_empty() => claims,
            _ => {
                debug!("no authorizer claims on the request");
                return;
            }
        };

        let security_context = self.provider.derive_security_context(&claims);
        request.set_security_context(security_context);
    }
}
