//! RequestContext Extractor

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::RequestContext;
use crate::core::ServerState;
use crate::utils::AppError;

impl FromRequestParts<ServerState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            return Ok(ctx.clone());
        }

        let user_id = match parts.headers.get(state.config.actor_header.as_str()) {
            Some(value) => {
                let value = value.to_str().map_err(|_| {
                    AppError::invalid_request(format!(
                        "Header {} is not valid UTF-8",
                        state.config.actor_header
                    ))
                })?;
                let value = value.trim();
                (!value.is_empty()).then(|| value.to_string())
            }
            None => None,
        };

        let ctx = RequestContext::new(user_id);
        parts.extensions.insert(ctx.clone());
        Ok(ctx)
    }
}
