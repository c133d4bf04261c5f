//! Request identification.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID for every inbound request
//! - Echo the ID back on the response for correlation
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A client-supplied `x-request-id` is kept as-is

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

fn header_name() -> HeaderName {
    HeaderName::from_static(X_REQUEST_ID)
}

/// Layer that stamps missing request IDs.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(header_name(), MakeRequestUuid)
}

/// Layer that copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(header_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_generates_uuid_ids() {
        let req = Request::builder().body(Body::empty()).unwrap();
        let mut maker = MakeRequestUuid;

        let a = maker.make_request_id(&req).unwrap();
        let b = maker.make_request_id(&req).unwrap();

        let a = a.header_value().to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&a).is_ok());
        assert_ne!(a, b.header_value().to_str().unwrap());
    }
}
