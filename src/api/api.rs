use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use actix_web::{App, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::api::api_certificate::{
    api_service_certificate_disk_get,
    api_service_certificate_get,
    api_service_certificate_reload
};
use crate::api::api_stats::api_service_prom_get;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::ssl::ssl::create_server_config_with_resolver;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(Arc::clone(&data)));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("metrics").route(web::get().to(api_service_prom_get)));
        cfg.service(web::resource("api/certificate").route(web::get().to(api_service_certificate_get)));
        cfg.service(web::resource("api/certificate/disk").route(web::get().to(api_service_certificate_disk_get)));
        cfg.service(web::resource("api/certificate/reload").route(web::post().to(api_service_certificate_reload)));
    })
}

/// Binds the status API with TLS served from the manager's current
/// certificate.
pub fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    threads: u64,
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    info!("[API] Starting server listener with SSL on {}", addr);
    let resolver = Arc::new(DynamicCertificateResolver::new(Arc::clone(&data.certificate_manager)));
    let tls_config = create_server_config_with_resolver(resolver).map_err(std::io::Error::other)?;

    let server = HttpServer::new(move || {
        App::new().configure(api_service_routes(Arc::clone(&data)))
    })
        .workers(threads.max(1) as usize)
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn api_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
