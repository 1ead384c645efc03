use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{export_route, page_route, scrape_route, tab_route},
    services::ScrapeClient,
};

pub fn run(listener: TcpListener, scrape_client: ScrapeClient) -> Result<Server, std::io::Error> {
    let scrape_client = web::Data::new(scrape_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure_app)
            .app_data(scrape_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(Files::new("/static", "./templates/static").prefer_utf8(true))
        .service(page_route::index)
        .service(page_route::results)
        .service(tab_route::switch_tab)
        .service(scrape_route::scrape_single)
        .service(scrape_route::scrape_multiple)
        .service(export_route::export_excel);
}
