use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;

use crate::dto::api::ApiResponse;
use crate::dto::products::ProductDto;
use crate::forms::products::{AddProductForm, AddProductFormPayload};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, find_product_by_id as find_product_by_id_service,
    find_product_by_name as find_product_by_name_service,
    list_products as list_products_service,
};

const NOT_FOUND_MESSAGE: &str = "Product not found";
pub(crate) const CREATE_FAILURE_MESSAGE: &str = "Error creating product";

/// Maps a failed lookup onto the JSON envelope.
fn lookup_failure(err: ServiceError, message: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ApiResponse::failure(NOT_FOUND_MESSAGE, None))
        }
        err => HttpResponse::InternalServerError()
            .json(ApiResponse::failure(message, Some(err.to_string()))),
    }
}

#[get("")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(ApiResponse::list(
            products
                .into_iter()
                .map(ProductDto::from)
                .collect::<Vec<_>>(),
        )),
        Err(err) => HttpResponse::InternalServerError().json(ApiResponse::failure(
            "Error getting products",
            Some(err.to_string()),
        )),
    }
}

#[get("/search/{name}")]
pub async fn search_product(
    name: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match find_product_by_name_service(&name.into_inner(), Utc::now(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::ok(ProductDto::from(product))),
        Err(err) => lookup_failure(err, "Error finding product"),
    }
}

#[get("/{id}")]
pub async fn get_product(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match find_product_by_id_service(&id.into_inner(), Utc::now(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::ok(ProductDto::from(product))),
        Err(err) => lookup_failure(err, "Error finding product"),
    }
}

#[post("")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddProductForm>,
) -> impl Responder {
    let payload: AddProductFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            return HttpResponse::InternalServerError().json(ApiResponse::failure(
                CREATE_FAILURE_MESSAGE,
                Some(e.to_string()),
            ));
        }
    };

    match create_product_service(payload, Utc::now(), repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(ApiResponse::created(
            "Product created successfully",
            ProductDto::from(product),
        )),
        Err(err) => HttpResponse::InternalServerError().json(ApiResponse::failure(
            CREATE_FAILURE_MESSAGE,
            Some(err.to_string()),
        )),
    }
}
