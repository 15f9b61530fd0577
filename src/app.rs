//! App Core for linkstash.
//!
//! Holds what every request shares: the store connection, the fetcher and the
//! loaded settings. Nothing else persists between requests.

use std::sync::Mutex;

use tracing::info;

use crate::database::connection::Database;
use crate::managers::bookmark_manager::BookmarkManager;
use crate::services::collection::build_collection;
use crate::services::fetcher::{Fetcher, HttpFetcher};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::bookmark::Collection;
use crate::types::errors::{DispatchError, StoreError};
use crate::types::settings::LinkstashSettings;

/// Central application struct.
///
/// `BookmarkManager` borrows the connection, so it is created per call via
/// [`App::with_store`] rather than stored here.
pub struct App {
    db: Mutex<Database>,
    fetcher: Box<dyn Fetcher>,
    settings: LinkstashSettings,
}

impl App {
    /// Loads settings, opens the database and builds the HTTP fetcher.
    pub fn new(settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut engine = SettingsEngine::new(settings_path);
        let settings = engine.load()?;
        let db_path = engine.database_path();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::open(&db_path)?;
        let fetcher = HttpFetcher::new(&settings.fetch)?;
        info!(
            database = %db_path.display(),
            config = engine.get_config_path(),
            "linkstash initialised"
        );
        Ok(Self::with_parts(db, Box::new(fetcher), settings))
    }

    /// Assembles an app from ready-made parts; tests pass a stub fetcher here.
    pub fn with_parts(db: Database, fetcher: Box<dyn Fetcher>, settings: LinkstashSettings) -> Self {
        Self {
            db: Mutex::new(db),
            fetcher,
            settings,
        }
    }

    pub fn fetcher(&self) -> &dyn Fetcher {
        self.fetcher.as_ref()
    }

    pub fn settings(&self) -> &LinkstashSettings {
        &self.settings
    }

    /// Runs `f` against the store while holding the connection lock.
    ///
    /// The lock covers one store call; fetching happens outside it.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&mut BookmarkManager<'_>) -> Result<T, StoreError>,
    ) -> Result<T, DispatchError> {
        let db = self
            .db
            .lock()
            .map_err(|e| DispatchError::Internal(format!("store lock poisoned: {}", e)))?;
        let mut store = BookmarkManager::new(db.connection());
        Ok(f(&mut store)?)
    }

    /// The filtered listing plus hashtag cloud used by the render layer.
    pub fn collection(&self, filter: &str) -> Result<Collection, DispatchError> {
        self.with_store(|store| build_collection(&*store, filter))
    }
}
