use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::database::AppState;
use crate::error::ApiError;

/// Authenticated user context resolved from a bearer token.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub user_id: i32,
}

/// Token authentication middleware. Resolves the authorization header to a
/// user id before any handler touches the data layer; absent or invalid
/// tokens are rejected as unauthorized.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = extract_auth_header(&headers)?;

    let user_id = auth::verify_bearer(presented, &state.config.jwt_secret)
        .ok_or_else(|| ApiError::unauthorized("invalid or expired token"))?;

    request.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(request).await)
}

fn extract_auth_header(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    value
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_authorization_header() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
        assert_eq!(extract_auth_header(&headers).unwrap(), "Bearer abc");
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let headers = HeaderMap::new();
        let err = extract_auth_header(&headers).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn non_utf8_header_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_bytes(b"\xffbad").unwrap());
        let err = extract_auth_header(&headers).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }
}
