use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use tracing::info;

use minilink::config::get_config;
use minilink::errors::MinilinkError;
use minilink::generator::CodeGenerator;
use minilink::services::{HealthService, RedirectService, ShortenService, StatsService};
use minilink::store::{MemoryStore, RecordStore};
use minilink::structs::AppStartTime;
use minilink::system::logging::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = get_config();
    let _log_guard = init_logging(config);

    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    // The store lives here for the whole process; handlers get shared handles.
    let generator = CodeGenerator::new(
        config.features.random_code_length,
        config.features.max_generate_attempts,
    );
    let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::new(generator));
    info!("Using store backend: {}", store.backend_name().await);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .route("/shorten", web::post().to(ShortenService::create_shorten))
            .route("/health", web::get().to(HealthService::health_check))
            .route(
                "/shortcode/stats/{code}",
                web::get().to(StatsService::get_stats),
            )
            .route(
                "/shortcode/{code}",
                web::get().to(RedirectService::handle_redirect),
            )
            .route(
                "/shortcode/{code}",
                web::head().to(RedirectService::handle_redirect),
            )
    })
    .workers(config.server.cpu_count)
    .bind(&bind_address)
    .map_err(|e| {
        eprintln!(
            "{}",
            MinilinkError::config(format!("Failed to bind {}: {}", bind_address, e))
                .format_colored()
        );
        e
    })?
    .run()
    .await
}
