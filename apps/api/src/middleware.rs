use axum::extract::{Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use cartaz_core::AppError;

use crate::error::ApiResult;
use crate::state::AppState;

/// Header carrying the email of the administrator acting on the request.
pub const ADMIN_EMAIL_HEADER: &str = "x-admin-email";

pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let token = bearer_token(request.headers().get(header::AUTHORIZATION))
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    if token != state.admin_api_token {
        return Err(AppError::Unauthorized("invalid API token".to_owned()).into());
    }

    let admin_email = request
        .headers()
        .get(ADMIN_EMAIL_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    let identity = state.access_service.require_admin(&admin_email).await?;
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

fn bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::bearer_token;

    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_strips_scheme_prefix() {
        let header = HeaderValue::from_static("Bearer cartaz-admin-token");

        assert_eq!(bearer_token(Some(&header)), Some("cartaz-admin-token"));
    }

    #[test]
    fn bearer_token_trims_surrounding_whitespace() {
        let header = HeaderValue::from_static("Bearer   spaced-token  ");

        assert_eq!(bearer_token(Some(&header)), Some("spaced-token"));
    }

    #[test]
    fn bearer_token_rejects_missing_header() {
        assert_eq!(bearer_token(None), None);
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        let header = HeaderValue::from_static("Basic YWRtaW46c2VjcmV0");

        assert_eq!(bearer_token(Some(&header)), None);
    }

    #[test]
    fn bearer_token_rejects_empty_token() {
        let header = HeaderValue::from_static("Bearer    ");

        assert_eq!(bearer_token(Some(&header)), None);
    }
}
