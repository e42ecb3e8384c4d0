use axum::{
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        forum::{get_forum_categories, get_forum_topics},
        server_info::get_server_info,
        webhook::nameless_webhook,
    },
    state::AppState,
};

/// Registers the shared-secret query parameter as a security scheme.
struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "ApiKey",
            SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::with_description(
                "api_key",
                "Shared secret configured with FORUM_API_KEY.",
            ))),
        );
    }
}

/// OpenAPI document for the forum bridge endpoints.
#[derive(OpenApi)]
#[openapi(
    modifiers(&ApiKeyAddon),
    info(
        title = "Nameless bridge API",
        description = "Read-only forum endpoints and the forum webhook receiver."
    ),
    paths(
        crate::server::controller::forum::get_forum_categories,
        crate::server::controller::forum::get_forum_topics,
        crate::server::controller::server_info::get_server_info,
        crate::server::controller::webhook::nameless_webhook,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v2/forum_categories", get(get_forum_categories))
        .route("/api/v2/forum_topics", get(get_forum_topics))
        .route("/api/v2/server_info", get(get_server_info))
        .route("/api/nameless-webhook", post(nameless_webhook))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
