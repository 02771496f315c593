//! HTML class extraction adapters.

mod scraper;

pub use self::scraper::ScraperClassSource;
