use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use tracing::trace;

use crate::services::error_response;
use crate::store::RecordStore;
use crate::structs::StatsResponse;

pub struct StatsService;

impl StatsService {
    pub async fn get_stats(
        path: web::Path<String>,
        store: web::Data<Arc<dyn RecordStore>>,
    ) -> impl Responder {
        let code = path.into_inner();
        trace!("Stats request for '{}'", code);

        match store.stats(&code).await {
            Ok(stats) => HttpResponse::Ok().json(StatsResponse {
                start_date: stats.created_at,
                last_seen_date: stats.last_accessed_at,
                redirect_count: stats.access_count,
            }),
            Err(e) => error_response(&e),
        }
    }
}
