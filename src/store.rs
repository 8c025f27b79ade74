// src/store.rs
//! Load-once cache around [`load::load`].
//!
//! The season's tables are read on the first `get()` and shared as an
//! `Arc<DataSet>` until someone calls `invalidate()` (GUI "Reload" button,
//! changed paths). `is_stale()` compares input mtimes against the load time
//! so a front end can offer the reload; nothing is re-read behind its back.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;

use crate::config::options::{DataPaths, LoadOptions};
use crate::error::Result;
use crate::load::{self, DataSet};

pub struct DatasetCache {
    paths: DataPaths,
    options: LoadOptions,
    cached: Option<Cached>,
}

struct Cached {
    data: Arc<DataSet>,
    loaded_at: SystemTime,
}

impl DatasetCache {
    pub fn new(paths: DataPaths, options: LoadOptions) -> Self {
        Self { paths, options, cached: None }
    }

    pub fn paths(&self) -> &DataPaths { &self.paths }
    pub fn is_loaded(&self) -> bool { self.cached.is_some() }

    /// Cached data, loading it first if needed. A failed load leaves the
    /// cache empty so the next call retries.
    pub fn get(&mut self) -> Result<Arc<DataSet>> {
        if let Some(c) = &self.cached {
            return Ok(Arc::clone(&c.data));
        }
        let loaded_at = SystemTime::now();
        let data = Arc::new(load::load(&self.paths, &self.options)?);
        self.cached = Some(Cached { data: Arc::clone(&data), loaded_at });
        Ok(data)
    }

    /// Cached data without triggering a load.
    pub fn peek(&self) -> Option<Arc<DataSet>> {
        self.cached.as_ref().map(|c| Arc::clone(&c.data))
    }

    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            logd!("Cache: invalidated");
        }
    }

    pub fn reload(&mut self) -> Result<Arc<DataSet>> {
        self.invalidate();
        self.get()
    }

    /// Swap inputs; drops the cached data only if something changed.
    pub fn set_source(&mut self, paths: DataPaths, options: LoadOptions) {
        if paths != self.paths || options != self.options {
            self.paths = paths;
            self.options = options;
            self.invalidate();
        }
    }

    /// True if an input file was modified after the cached load.
    /// Unloaded caches and unreadable mtimes count as not stale.
    pub fn is_stale(&self) -> bool {
        let Some(c) = &self.cached else { return false };
        let newer = |p: &Path| modified(p).is_some_and(|m| m > c.loaded_at);
        newer(&self.paths.results) || self.paths.predictions.as_deref().is_some_and(newer)
    }
}

fn modified(p: &Path) -> Option<SystemTime> {
    fs::metadata(p).ok().and_then(|m| m.modified().ok())
}
