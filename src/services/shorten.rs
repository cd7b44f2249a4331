use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use tracing::{error, info};

use crate::config::get_config;
use crate::errors::MinilinkError;
use crate::services::error_response;
use crate::store::RecordStore;
use crate::structs::{ShortenRequest, ShortenResponse};
use crate::utils::{is_valid_shortcode, validate_url};

pub struct ShortenService;

impl ShortenService {
    pub async fn create_shorten(
        params: web::Json<ShortenRequest>,
        store: web::Data<Arc<dyn RecordStore>>,
    ) -> impl Responder {
        let params = params.into_inner();

        if let Err(e) = validate_url(&params.url) {
            return error_response(&e);
        }

        // An empty shortcode field means "generate one for me"
        let code = params.shortcode.filter(|c| !c.is_empty());
        if let Some(ref code) = code {
            let expected_len = get_config().features.random_code_length;
            if !is_valid_shortcode(code, expected_len) {
                return error_response(&MinilinkError::validation(format!(
                    "Shortcode must be exactly {} alphanumeric characters",
                    expected_len
                )));
            }
        }

        match store.create(code, params.url).await {
            Ok(record) => {
                info!("Created shortcode '{}' -> '{}'", record.code, record.url);
                HttpResponse::Created().json(ShortenResponse {
                    shortcode: record.code,
                })
            }
            Err(e @ MinilinkError::KeyspaceExhausted(_)) => {
                error!("{}", e.format_simple());
                error_response(&e)
            }
            Err(e) => error_response(&e),
        }
    }
}
