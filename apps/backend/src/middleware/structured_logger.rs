use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;
use crate::extractors::CurrentProfessor;
use crate::trace_ctx::UNKNOWN_TRACE_ID;

/// Emits one `request_completed` line per request, at a level chosen by
/// status class, tagged with the authenticated professor when there is one.
/// Must sit inside `RequestTrace`.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();

        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, professor_id) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request()
                        .extensions()
                        .get::<CurrentProfessor>()
                        .map(|p| p.id),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            let completed = Completed {
                method: &method,
                path: &path,
                status,
                professor_id,
                duration_us: start.elapsed().as_micros() as u64,
                trace_id: &trace_id,
            };
            completed.log();

            result
        })
    }
}

/// Fields of one `request_completed` line.
struct Completed<'a> {
    method: &'a str,
    path: &'a str,
    status: StatusCode,
    /// Set when the handler authenticated a professor
    professor_id: Option<i64>,
    duration_us: u64,
    trace_id: &'a str,
}

impl Completed<'_> {
    fn log(&self) {
        let status_code = self.status.as_u16();
        let Completed {
            method,
            path,
            professor_id,
            duration_us,
            trace_id,
            ..
        } = *self;

        if self.status.is_server_error() {
            error!(http.method = method, url.path = path, http.status_code = status_code, professor_id, duration_us, trace_id, message = "request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method = method, url.path = path, http.status_code = status_code, professor_id, duration_us, trace_id, message = "request_completed");
        } else {
            info!(http.method = method, url.path = path, http.status_code = status_code, professor_id, duration_us, trace_id, message = "request_completed");
        }
    }
}
