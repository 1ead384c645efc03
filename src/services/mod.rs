pub mod backend_client;
pub mod indicator;
pub mod scrape_client;

pub use backend_client::*;
pub use indicator::*;
pub use scrape_client::*;
