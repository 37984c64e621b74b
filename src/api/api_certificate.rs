use crate::api::structs::api_certificate::{CertificateReloadResponse, CertificateStatusResponse};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_info::CertificateInfo;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::{web, HttpResponse};
use log::{error, info};
use serde_json::json;
use std::sync::Arc;

#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
    let manager = &data.certificate_manager;
    match manager.certificate_info() {
        Ok(certificate) => {
            let loaded_at = manager
                .get_current_certificate()
                .map(|material| material.loaded_at.to_rfc3339());
            HttpResponse::Ok()
                .content_type(ContentType::json())
                .json(CertificateStatusResponse {
                    status: "ok",
                    generation: manager.store().generation(),
                    loaded_at,
                    certificate,
                })
        }
        Err(e) => certificate_error_response(&e),
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_disk_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
    let manager = Arc::clone(&data.certificate_manager);
    match web::block(move || manager.certificate_info_from_disk()).await {
        Ok(Ok(certificate)) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "certificate": certificate
        })),
        Ok(Err(e)) => certificate_error_response(&e),
        Err(e) => {
            error!("[API] Blocking task failed: {}", e);
            HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
                "status": "internal error"
            }))
        }
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_reload(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
    let manager = Arc::clone(&data.certificate_manager);
    info!("[API] Certificate reload requested for {}", manager.paths().cert_path);
    let result = web::block(move || manager.reload_now()).await;
    let generation = data.certificate_manager.store().generation();
    match result {
        Ok(Ok(material)) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .json(CertificateReloadResponse {
                status: "ok",
                generation,
                certificate: Some(CertificateInfo::from_material(&material, chrono::Utc::now())),
                error: None,
            }),
        Ok(Err(e)) => HttpResponse::UnprocessableEntity()
            .content_type(ContentType::json())
            .json(CertificateReloadResponse {
                status: "failed",
                generation,
                certificate: None,
                error: Some(e.to_string()),
            }),
        Err(e) => {
            error!("[API] Blocking task failed: {}", e);
            HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
                "status": "internal error"
            }))
        }
    }
}

fn certificate_error_response(error: &CertificateError) -> HttpResponse {
    let mut response = match error {
        CertificateError::NotLoaded | CertificateError::FileNotFound(_) => HttpResponse::NotFound(),
        _ => HttpResponse::UnprocessableEntity(),
    };
    response.content_type(ContentType::json()).json(json!({
        "status": "error",
        "error": error.to_string()
    }))
}
