use crate::config::Config;
use crate::db::events::{StorageUsage, load_all, save_all};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::EventStore;

/// Outcome of flushing the store to disk.
#[derive(Debug)]
pub enum Persisted {
    Saved(StorageUsage),
    /// The write failed; the in-memory store is still valid.
    Failed(String),
}

impl Persisted {
    /// Message worth showing to the user, if any.
    pub fn warning(&self, warn_percent: u8) -> Option<String> {
        match self {
            Persisted::Saved(usage) if usage.percent() > warn_percent as usize => Some(format!(
                "Advertencia: El almacenamiento está al {}% de su capacidad",
                usage.percent()
            )),
            Persisted::Saved(_) => None,
            Persisted::Failed(msg) => Some(format!("Error al guardar: {msg}")),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Persisted::Saved(_))
    }
}

/// Database handle plus the in-memory collection loaded from it.
pub struct Session {
    pub pool: DbPool,
    pub store: EventStore,
    storage_limit: usize,
    warn_percent: u8,
}

impl Session {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        Self::from_pool(pool, cfg)
    }

    pub fn from_pool(pool: DbPool, cfg: &Config) -> AppResult<Self> {
        let store = EventStore::new(load_all(&pool.conn)?);
        Ok(Self {
            pool,
            store,
            storage_limit: cfg.storage_limit_bytes,
            warn_percent: cfg.storage_warn_percent,
        })
    }

    /// Write the whole collection back. Errors are folded into the result
    /// instead of being propagated.
    pub fn flush(&mut self) -> Persisted {
        match save_all(&mut self.pool.conn, self.store.events(), self.storage_limit) {
            Ok(usage) => Persisted::Saved(usage),
            Err(e) => {
                log::error!("flush failed: {e}");
                Persisted::Failed(e.to_string())
            }
        }
    }

    pub fn warn_percent(&self) -> u8 {
        self.warn_percent
    }

    /// Append an entry to the internal audit log (non-blocking).
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}
