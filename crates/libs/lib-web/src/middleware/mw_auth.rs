//! # Authentication Guard
//!
//! Route-level middleware that admits a request only if it carries a valid
//! `Authorization: Bearer <token>` header. The verified [`Identity`](lib_auth::Identity) is placed
//! in the request extensions for the handler.
//!
//! It is applied per route, not to the whole router:
//!
//! ```rust,ignore
//! let guard = axum::middleware::from_fn_with_state(state.clone(), require_auth);
//!
//! Router::new()
//!     .route("/auth/profile", get(profile).route_layer(guard))
//! ```
//!
//! Handlers then take `Extension<Identity>`:
//!
//! ```rust,ignore
//! async fn profile(Extension(identity): Extension<Identity>) -> String {
//!     identity.username
//! }
//! ```

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use lib_auth::TokenService;
use lib_core::AppError;
use tracing::{debug, warn};

/// Reject the request with `401` unless it carries a valid bearer token.
///
/// Runs before the handler's own extractors, so an unauthenticated request is
/// refused even when its body would also fail validation.
pub async fn require_auth(
    State(tokens): State<TokenService>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or_else(|| {
        warn!("[AUTH] Missing or malformed Authorization header");
        AppError::Unauthorized
    })?;

    let identity = tokens.verify(token).map_err(|e| {
        warn!("[AUTH] Token rejected: {}", e);
        AppError::Unauthorized
    })?;

    debug!("[AUTH] Authenticated user: {} (id: {})", identity.username, identity.user_id);

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Extract the token from `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively; an empty token counts as absent.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
