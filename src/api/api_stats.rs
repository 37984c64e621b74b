use std::sync::Arc;
use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::structs::api_service_data::ApiServiceData;

#[tracing::instrument(level = "debug")]
pub async fn api_service_prom_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(data.certificate_stats.render_prometheus())
}
