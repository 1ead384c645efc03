pub mod export_route;
pub mod page_route;
pub mod scrape_route;
pub mod tab_route;
