use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use tracing::debug;
use tracing::instrument;

use crate::services::error_response;
use crate::store::RecordStore;

pub struct RedirectService;

impl RedirectService {
    #[instrument(skip(store), fields(code = %path))]
    pub async fn handle_redirect(
        path: web::Path<String>,
        store: web::Data<Arc<dyn RecordStore>>,
    ) -> impl Responder {
        let code = path.into_inner();

        match store.resolve(&code).await {
            Ok(url) => HttpResponse::TemporaryRedirect()
                .insert_header(("Location", url))
                .finish(),
            Err(e) => {
                debug!("Redirect target not found: {}", code);
                error_response(&e)
            }
        }
    }
}
