use async_trait::async_trait;
use http::StatusCode;
use lambda_gateway_bridge::container::{Container, ContainerRequest, RequestEnhancer};
use lambda_gateway_bridge::handler::GatewayHandler;
use lambda_gateway_bridge::response::ResponseWriter;
use lambda_gateway_bridge::security::{
    AuthorizerFilter, CognitoSecurityContextProvider, CustomAuthorizerSecurityContextProvider,
    SecurityContextProvider,
};
use lambda_runtime::{self, service_fn, Error, LambdaEvent};
use serde_json::json;
use shared::error::ApplicationError;
use shared::models::event::InboundEvent;
use shared::models::response::OutboundResponse;
use std::collections::HashMap;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let provider: Box<dyn SecurityContextProvider> =
        match std::env::var("AUTHORIZER_KIND").as_deref() {
            Ok("custom") => Box::new(CustomAuthorizerSecurityContextProvider::default()),
            _ => Box::new(CognitoSecurityContextProvider::default()),
        };
    let container = EchoContainer {
        filter: AuthorizerFilter::new(provider),
    };
    let handler = GatewayHandler::builder().container(container).build();

    lambda_runtime::run(service_fn(|event: LambdaEvent<InboundEvent>| {
        execute(&handler, event)
    }))
    .await?;
    Ok(())
}

pub async fn execute<C: Container>(
    handler: &GatewayHandler<C>,
    event: LambdaEvent<InboundEvent>,
) -> Result<OutboundResponse, Error> {
    Ok(handler.handle(event).await?)
}

/// Stand-in container: applies the enhancer, runs the authorizer filter
/// pre-matching and echoes the request line back as JSON.
struct EchoContainer {
    filter: AuthorizerFilter<Box<dyn SecurityContextProvider>>,
}

#[async_trait]
impl Container for EchoContainer {
    async fn handle_request(
        &self,
        mut request: ContainerRequest,
        writer: &mut (dyn ResponseWriter + 'static),
        enhancer: Option<RequestEnhancer>,
    ) -> Result<(), ApplicationError> {
        if let Some(enhance) = enhancer {
            enhance(&mut request);
        }
        self.filter.filter(&mut request);

        let principal = request
            .security_context()
            .and_then(|context| context.principal_name().map(str::to_string));
        let body = json!({
            "message": "ok",
            "method": request.http_method(),
            "uri": request.request_uri(),
            "principal": principal,
        })
        .to_string();

        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            vec!["application/json".to_string()],
        );
        writer.write_response(StatusCode::OK, &headers, body.into_bytes())
    }
}
