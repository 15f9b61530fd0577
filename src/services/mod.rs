// Linkstash services
// Services provide the ingestion pipeline pieces: fetching, title extraction, tag formatting,
// collection views and settings.

pub mod collection;
pub mod fetcher;
pub mod settings_engine;
pub mod tag_formatter;
pub mod title_extractor;
