pub mod page;
pub mod results;

pub use page::*;
pub use results::*;
