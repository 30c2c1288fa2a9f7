use actix_web::{Responder, get, web};
use chrono::Utc;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::domain::product::Product;
use crate::dto::products::ProductView;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::products::{
    find_product_by_id as find_product_by_id_service,
    find_product_by_name as find_product_by_name_service,
    list_products as list_products_service,
};
use crate::services::{ServiceError, ServiceResult};

#[derive(Deserialize)]
struct IndexQueryParams {
    /// Name fragment typed into the search form.
    q: Option<String>,
    /// Identifier of a product clicked in the listing.
    id: Option<String>,
}

#[get("/")]
pub async fn index(
    params: web::Query<IndexQueryParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let now = Utc::now();
    let mut context = Context::new();
    let mut errors: Vec<String> = Vec::new();

    let query = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    context.insert("query", &query.unwrap_or_default());

    let lookup: Option<ServiceResult<Product>> = match (params.id.as_deref(), query) {
        (Some(id), _) => Some(find_product_by_id_service(id, now, repo.get_ref())),
        (None, Some(query)) => Some(find_product_by_name_service(query, now, repo.get_ref())),
        (None, None) => None,
    };

    match lookup {
        Some(Ok(product)) => {
            let days = product.days_expiration.unwrap_or_default();
            context.insert("found", &ProductView::with_days(&product, days));
        }
        Some(Err(ServiceError::NotFound)) => errors.push("Product not found".to_string()),
        Some(Err(err)) => errors.push(err.to_string()),
        None => {}
    }

    match list_products_service(repo.get_ref()) {
        Ok(products) => {
            let views = products
                .iter()
                .map(|p| ProductView::at(p, now))
                .collect::<Vec<_>>();
            context.insert("products", &views);
        }
        Err(err) => {
            context.insert("products", &Vec::<ProductView>::new());
            errors.push(err.to_string());
        }
    }

    context.insert("errors", &errors);
    render_template(&tera, "main/index.html", &context)
}
