use actix_web::{get, web, HttpResponse};
use askama::Template;

use crate::{services::ScrapeClient, view::IndexTemplate};

#[get("/")]
pub async fn index(client: web::Data<ScrapeClient>) -> HttpResponse {
    render_page(&client).await
}

/// Results panel on its own, for partial refreshes. Empty while hidden.
#[get("/results")]
pub async fn results(client: web::Data<ScrapeClient>) -> HttpResponse {
    match client.peek().await {
        Ok(snapshot) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(snapshot.panel.map(|panel| panel.to_html()).unwrap_or_default()),
        Err(e) => {
            log::error!("Could not read results: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub(crate) async fn render_page(client: &ScrapeClient) -> HttpResponse {
    let snapshot = match client.render().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!("Could not render page: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    match IndexTemplate::from(snapshot).render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Could not render index template: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
