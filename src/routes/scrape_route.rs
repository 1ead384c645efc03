use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

use crate::services::ScrapeClient;

use super::page_route::render_page;

#[derive(Deserialize)]
struct ScrapeSingleForm {
    #[serde(default)]
    url: String,
}

#[derive(Deserialize)]
struct ScrapeMultipleForm {
    #[serde(default)]
    urls: String,
}

#[post("/scrape")]
pub async fn scrape_single(
    client: web::Data<ScrapeClient>,
    form: web::Form<ScrapeSingleForm>,
) -> HttpResponse {
    if let Err(e) = client.scrape_single(&form.url).await {
        log::error!("Single scrape did not complete: {}", e);
        return HttpResponse::InternalServerError().finish();
    }
    render_page(&client).await
}

#[post("/scrape-multiple")]
pub async fn scrape_multiple(
    client: web::Data<ScrapeClient>,
    form: web::Form<ScrapeMultipleForm>,
) -> HttpResponse {
    if let Err(e) = client.scrape_multiple(&form.urls).await {
        log::error!("Multiple scrape did not complete: {}", e);
        return HttpResponse::InternalServerError().finish();
    }
    render_page(&client).await
}
