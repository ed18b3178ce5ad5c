use lambda_runtime::LambdaEvent;
use shared::error::ApplicationError;
use shared::models::event::InboundEvent;
use shared::models::response::OutboundResponse;
use typed_builder::TypedBuilder as Builder;

use crate::adapter;
use crate::container::Container;
use crate::response::OutboundResponseWriter;

/// One invocation in, one response out: builds the container request,
/// hands it to the container together with a fresh response writer and
/// the enhancer, and collects what the container wrote. Container
/// failures propagate unchanged.
#[derive(Debug, Clone, Builder)]
pub struct GatewayHandler<C> {
    container: C,
}

impl<C: Container> GatewayHandler<C> {
    pub async fn handle(
        &self,
        event: LambdaEvent<InboundEvent>,
    ) -> Result<OutboundResponse, ApplicationError> {
        let payload = event.payload;
        let context = event.context;

        let request = adapter::create_container_request(&payload);
        let mut writer = OutboundResponseWriter::new();
        let enhancer = adapter::request_enhancer(payload, context);

        self.container
            .handle_request(request, &mut writer, Some(enhancer))
            .await?;

        writer.into_response().ok_or_else(|| {
            ApplicationError::InternalError(
                "container finished without writing a response".to_string(),
            )
        })
    }
}
