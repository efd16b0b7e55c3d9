use garde::Validate;
use serde::{
    Deserialize,
    Serialize,
};
use utoipa::{
    IntoResponses,
    Modify,
    ToSchema,
    openapi::{
        OpenApi,
        security::{
            Http,
            HttpAuthScheme,
            SecurityScheme,
        },
    },
};
use utoipa_axum::{
    router::OpenApiRouter,
    routes,
};

use crate::AppState;

mod jwt;
mod routes {
    pub mod login;
}

pub use jwt::{
    Authenticated,
    BearerToken,
    sign,
    verify,
};

pub const TAG: &str = "Login";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(routes::login::login))
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[garde(length(chars, min = 1))]
    #[schema(example = "root")]
    pub username: String,
    #[garde(length(chars, min = 1))]
    #[schema(example = "sekret")]
    pub password: String,
}

#[derive(Serialize, ToSchema, IntoResponses)]
#[response(status = OK)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
