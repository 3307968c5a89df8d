// src/presentation/http/controllers/profiles.rs
use crate::application::dto::LoadResult;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestLocals;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/private/profile",
    responses(
        (status = 200, description = "The caller's profile, or null without a session.", body = LoadResult),
        (status = 403, description = "The store refused the read.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No profile exists for the session's user.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn load_private_profile(
    Extension(state): Extension<HttpState>,
    locals: RequestLocals,
) -> HttpResult<Json<LoadResult>> {
    state
        .services
        .profile_queries
        .load(locals.session.as_ref(), locals.store.as_ref())
        .await
        .into_http()
        .map(Json)
}
