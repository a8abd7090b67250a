use std::{path::PathBuf, time::Duration};

use axum::{
    body::Body,
    http::{HeaderName, Request, Response},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{MakeSpan, OnRequest, OnResponse, TraceLayer},
};
use tracing::Span;

use super::{function, midware, routes::routes, REQUEST_ID_HEADER};
use crate::{App, AppState, Result, Transport};

/// The core async function serving this application until the listener fails.
///
/// Accepts an `App` and picks the adapter that maps HTTP onto the registry by `transport`.
pub async fn serve(app: App, transport: Transport) -> Result<()> {
    let App {
        app_state,
        listener,
        static_dir,
    } = app;

    let app = build_router(app_state, transport, static_dir);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the adapter's routes and wraps them in the request id, tracing, error mapping
/// and CORS middleware shared by both adapters.
pub fn build_router(
    app_state: AppState,
    transport: Transport,
    static_dir: Option<PathBuf>,
) -> Router {
    let x_request_id: HeaderName = HeaderName::from_static(REQUEST_ID_HEADER);

    let routes = match transport {
        Transport::Server => routes(app_state, static_dir),
        Transport::Function => function::routes(app_state),
    };

    routes.layer(
        ServiceBuilder::new()
            // Set UUID per request
            .layer(SetRequestIdLayer::new(
                x_request_id.clone(),
                MakeRequestUuid,
            ))
            // Responses travel the stack bottom up, so the UUID lands on whatever
            // the response mapper below hands back, error envelopes included.
            .layer(PropagateRequestIdLayer::new(x_request_id))
            .layer(build_trace_layer())
            // CORS sits above the response mapper so that error envelopes get the headers too.
            .layer(middleware::map_response(midware::cors_headers))
            .layer(middleware::map_response(midware::response_mapper)),
    )
}

/// A helper function that sets up the `tower_http::TraceLayer` - tracing configuration.
fn build_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let uuid = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .map(|uuid| uuid.to_str().unwrap_or("").to_string());

            tracing::error_span!(
                "serve",
                id = uuid,
                method = req.method().to_string(),
                path = req.uri().path()
            )
        })
        .on_request(|req: &Request<Body>, _s: &Span| tracing::info!("START @ {}", req.uri()))
        .on_response(|res: &Response<Body>, latency: Duration, _s: &Span| {
            let st_code = res.status().as_u16();

            if (500..=599).contains(&st_code) {
                tracing::error!("END in: {:?} - STATUS: {st_code}", latency)
            } else {
                tracing::info!("END in: {:?} - STATUS: {st_code}", latency)
            }
        })
}
