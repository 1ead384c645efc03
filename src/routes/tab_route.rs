use actix_web::{http::header, post, web, HttpResponse};

use crate::{domain::Tab, services::ScrapeClient};

#[post("/tab/{name}")]
pub async fn switch_tab(client: web::Data<ScrapeClient>, path: web::Path<String>) -> HttpResponse {
    let tab: Tab = match path.parse() {
        Ok(tab) => tab,
        Err(e) => return HttpResponse::NotFound().body(e.to_string()),
    };

    match client.switch_tab(tab) {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/"))
            .finish(),
        Err(e) => {
            log::error!("Could not switch tab: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
