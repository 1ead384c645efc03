use actix_web::{http::header, post, web, HttpResponse};

use crate::services::ScrapeClient;

use super::page_route::render_page;

/// Sends the browser to the backend's download endpoint once the
/// spreadsheet exists. Otherwise the page is shown again with the reason.
#[post("/export")]
pub async fn export_excel(client: web::Data<ScrapeClient>) -> HttpResponse {
    match client.export_to_excel().await {
        Ok(Some(download)) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, download.as_str()))
            .finish(),
        Ok(None) => render_page(&client).await,
        Err(e) => {
            log::error!("Export did not complete: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
