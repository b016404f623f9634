use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::SourceConfig;
use crate::dataset::{load_code_records, load_order_records};
use crate::error::Result;
use crate::flow::{CodeSearchFlow, OrderSearchFlow};
use crate::loadlog::ActivityLog;
use crate::models::{CodeRecord, OrderRecord};

/// Entry point tying sources, activity log, and the two lookup flows
/// together. Each flow owns its dataset; the portal is only the loader.
#[derive(Debug, Clone)]
pub struct Portal {
    config: SourceConfig,
    log: ActivityLog,
}

impl Portal {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(root, SourceConfig::from_env())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: SourceConfig) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            config,
            log: ActivityLog::new(&root),
        })
    }

    pub fn load_codes(&self) -> Result<Vec<CodeRecord>> {
        let source = self.config.codes_url.clone();
        self.load_logged("load_codes", &source, load_code_records)
    }

    pub fn load_orders(&self) -> Result<Vec<OrderRecord>> {
        let source = self.config.orders_url.clone();
        self.load_logged("load_orders", &source, load_order_records)
    }

    /// A failed load leaves the flow over an empty dataset: every search
    /// degrades to "no results" instead of failing, and the error is only
    /// visible in the activity log. No retry.
    #[must_use]
    pub fn code_flow(&self) -> CodeSearchFlow {
        CodeSearchFlow::new(self.load_codes().unwrap_or_default())
    }

    #[must_use]
    pub fn order_flow(&self) -> OrderSearchFlow {
        OrderSearchFlow::new(self.load_orders().unwrap_or_default())
    }

    fn load_logged<R>(
        &self,
        operation: &str,
        source: &str,
        load: impl FnOnce(&str) -> Result<Vec<R>>,
    ) -> Result<Vec<R>> {
        let started = Instant::now();
        match load(source) {
            Ok(records) => {
                self.log
                    .log_status(operation, source, started.elapsed().as_millis());
                Ok(records)
            }
            Err(err) => {
                self.log
                    .log_error(operation, source, started.elapsed().as_millis(), &err);
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    #[must_use]
    pub fn activity_log_path(&self) -> &Path {
        self.log.path()
    }
}
