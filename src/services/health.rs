use std::sync::Arc;
use std::time::Duration;

use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::{error, trace};

use crate::store::RecordStore;
use crate::structs::AppStartTime;

pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        store: web::Data<Arc<dyn RecordStore>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

        // A pure in-memory store answers instantly; the timeout only
        // trips if the process is wedged.
        let records = match tokio::time::timeout(Duration::from_secs(5), store.len()).await {
            Ok(count) => count,
            Err(_) => {
                error!("Store health check timeout");
                return HttpResponse::ServiceUnavailable().json(json!({
                    "status": "unhealthy",
                    "timestamp": now.to_rfc3339(),
                    "uptime": uptime_seconds,
                    "error": "timeout",
                }));
            }
        };

        HttpResponse::Ok().json(json!({
            "status": "healthy",
            "timestamp": now.to_rfc3339(),
            "uptime": uptime_seconds,
            "records": records,
            "backend": store.backend_name().await,
        }))
    }
}
