//! Self-describing schema endpoint.

use actix_web::{HttpResponse, get};

use crate::doc::api_document;

/// Return the OpenAPI document describing this API.
///
/// The document is generated once per process, so repeated calls return
/// identical bodies.
#[utoipa::path(
    get,
    path = "/anything/api/schema",
    responses(
        (status = 200, description = "OpenAPI document")
    ),
    tags = ["schema"],
    operation_id = "schema"
)]
#[get("/schema")]
pub async fn schema_document() -> HttpResponse {
    HttpResponse::Ok().json(api_document())
}
