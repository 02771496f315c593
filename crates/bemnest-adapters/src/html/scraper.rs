//! [`ClassSource`] backed by the `scraper` HTML parser.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

use bemnest_core::{
    application::ports::ClassSource,
    domain::ClassName,
    error::{NestError, NestResult},
};

static CLASS_SELECTOR: Lazy<Result<Selector, String>> =
    Lazy::new(|| Selector::parse("[class]").map_err(|e| e.to_string()));

/// Parses documents leniently, the way a browser would, and collects the
/// class tokens of every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperClassSource;

impl ScraperClassSource {
    pub fn new() -> Self {
        Self
    }
}

impl ClassSource for ScraperClassSource {
    #[instrument(skip_all, fields(bytes = document.len()))]
    fn class_names(&self, document: &str) -> NestResult<BTreeSet<ClassName>> {
        let selector = CLASS_SELECTOR
            .as_ref()
            .map_err(|message| NestError::Internal {
                message: format!("invalid class selector: {message}"),
            })?;

        let html = Html::parse_document(document);
        let mut classes = BTreeSet::new();
        for element in html.select(selector) {
            for class in element.value().classes() {
                classes.insert(ClassName::new(class)?);
            }
        }

        debug!(count = classes.len(), "Extracted class names");
        Ok(classes)
    }
}
