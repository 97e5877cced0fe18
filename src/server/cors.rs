//! CORS policy construction

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::config::CorsSettings;
use crate::error::PipelineDagError;

/// Build the CORS layer for `settings`
///
/// Browsers refuse a literal `*` together with credentials, so a wildcard
/// policy with credentials mirrors the request's origin, method and headers
/// back instead.
pub fn cors_layer(settings: &CorsSettings) -> Result<CorsLayer, PipelineDagError> {
    let layer = CorsLayer::new().allow_credentials(settings.allow_credentials);

    let layer = if settings.allow_credentials {
        layer
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    } else {
        layer.allow_methods(Any).allow_headers(Any)
    };

    let origin = if settings.allows_any_origin() {
        if settings.allow_credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::any()
        }
    } else {
        let origins = settings
            .allow_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| PipelineDagError::ConfigurationError {
                    message: format!("Invalid CORS origin '{origin}'"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(layer.allow_origin(origin))
}
