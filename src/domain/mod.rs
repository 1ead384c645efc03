pub mod notification;
pub mod scrape_result;
pub mod tab;
pub mod url_input;

pub use notification::*;
pub use scrape_result::*;
pub use tab::*;
