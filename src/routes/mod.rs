use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use tera::{Context, Tera};

use crate::dto::api::ApiResponse;

pub mod api;
pub mod main;

/// Registers the JSON API under `/api/products` and the index page.
///
/// Static assets are mounted separately by the binary since their location
/// comes from configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(api::list_products)
            .service(api::search_product)
            .service(api::get_product)
            .service(api::create_product),
    )
    .service(main::index);
}

/// Cross-origin policy of the application: any origin may call the API.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Answers unreadable create bodies with the failure envelope instead of
/// Actix's plain-text 400.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    log::error!("Failed to read product body: {detail}");
    let response = HttpResponse::InternalServerError().json(ApiResponse::failure(
        api::CREATE_FAILURE_MESSAGE,
        Some(detail),
    ));
    InternalError::from_response(err, response).into()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
