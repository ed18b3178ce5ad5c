use lambda_runtime::Context;
use shared::models::event::InboundEvent;

use crate::container::{ContainerRequest, RequestEnhancer};

/// Builds the container-native request for one inbound event.
///
/// Method, URI and headers are copied verbatim; the entity stream holds
/// the body bytes or nothing when the body is absent. The adapter never
/// dispatches to the container itself.
pub fn create_container_request(event: &InboundEvent) -> ContainerRequest {
    let entity = event
        .body
        .as_ref()
        .map(|body| body.as_bytes().to_vec())
        .unwrap_or_default();

    ContainerRequest::new(
        event.http_method.clone(),
        event.request_uri.clone(),
        event.headers.clone(),
        entity,
    )
}

/// The request-setup callback handed to the container: attaches the
/// original event and the invocation context to the request so filters
/// and application code can retrieve them.
pub fn request_enhancer(event: InboundEvent, context: Context) -> RequestEnhancer {
    Box::new(move |request| {
        request.attach_event(event);
        request.attach_invocation_context(context);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Read;

    fn minimal_event() -> InboundEvent {
        InboundEvent::builder()
            .http_method("GET")
            .request_uri("/")
            .build()
    }

    fn read_entity(request: &ContainerRequest) -> Vec<u8> {
        let mut bytes = Vec::new();
        request
            .entity_stream()
            .read_to_end(&mut bytes)
            .expect("in-memory read cannot fail");
        bytes
    }

    #[test]
    fn no_body_given_uses_empty_entity_stream() {
        // ARRANGE
        let event = minimal_event();

        // ACT
        let request = create_container_request(&event);

        // ASSERT
        assert_eq!(read_entity(&request), Vec::<u8>::new());
    }

    #[test]
    fn body_given_uses_body_bytes() {
        // ARRANGE
        let event = InboundEvent::builder()
            .http_method("POST")
            .request_uri("/")
            .body("abc".to_string())
            .build();

        // ACT
        let request = create_container_request(&event);

        // ASSERT
        assert_eq!(read_entity(&request), b"abc".to_vec());
    }

    #[test]
    fn http_method_copied_verbatim() {
        // ARRANGE
        let event = InboundEvent::builder().http_method("X").request_uri("/").build();

        // ACT
        let request = create_container_request(&event);

        // ASSERT
        assert_eq!(request.http_method(), "X");
    }

    #[test]
    fn request_uri_keeps_query_string() {
        // ARRANGE
        let event = InboundEvent::builder()
            .http_method("GET")
            .request_uri("/a?b=c&d=e")
            .build();

        // ACT
        let request = create_container_request(&event);

        // ASSERT
        assert_eq!(request.request_uri(), "/a?b=c&d=e");
    }

    #[test]
    fn headers_copied_verbatim_including_empty_lists() {
        // ARRANGE
        let mut headers = HashMap::new();
        headers.insert("0".to_string(), Vec::new());
        headers.insert("1".to_string(), vec!["a".to_string()]);
        headers.insert("2".to_string(), vec!["b".to_string(), "c".to_string()]);
        let event = InboundEvent::builder()
            .http_method("GET")
            .request_uri("/")
            .headers(headers.clone())
            .build();

        // ACT
        let request = create_container_request(&event);

        // ASSERT
        assert_eq!(request.headers(), &headers);
    }

    #[test]
    fn minimal_event_maps_to_minimal_request() {
        // ARRANGE
        let event = minimal_event();

        // ACT
        let request = create_container_request(&event);

        // ASSERT
        assert_eq!(request.http_method(), "GET");
        assert_eq!(request.request_uri(), "/");
        assert!(request.headers().is_empty());
        assert_eq!(read_entity(&request), Vec::<u8>::new());
    }

    #[test]
    fn running_the_adapter_twice_yields_equal_requests() {
        // ARRANGE
        let event = InboundEvent::builder()
            .http_method("PUT")
            .request_uri("/a?b=c")
            .body("payload".to_string())
            .build();

        // ACT
        let first = create_container_request(&event);
        let second = create_container_request(&event);

        // ASSERT
        assert_eq!(first.http_method(), second.http_method());
        assert_eq!(first.request_uri(), second.request_uri());
        assert_eq!(first.headers(), second.headers());
        assert_eq!(first.entity_bytes(), second.entity_bytes());
    }

    #[test]
    fn enhancer_attaches_event_and_invocation_context() {
        // ARRANGE
        let event = minimal_event();
        let mut request = create_container_request(&event);
        let enhancer = request_enhancer(event.clone(), Context::default());

        // ACT
        enhancer(&mut request);

        // ASSERT
        use crate::container::RequestContext;
        assert_eq!(request.inbound_event(), Some(event));
        assert!(request.invocation_context().is_some());
    }
}
