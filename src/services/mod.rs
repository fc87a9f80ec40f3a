pub mod fetch;
pub mod listing;
pub mod log;
pub mod scrape;
pub mod store;

pub use fetch::*;
pub use listing::*;
pub use scrape::*;
pub use store::*;
// Qualified so the module doesn't shadow the `log` crate.
pub use self::log::*;
