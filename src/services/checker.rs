use crate::domain::error::CheckerError;
use crate::domain::models::{CheckResult, MASTER_DIR, PUBLISH_LOG_DIR};
use crate::services::clock::{Clock, SystemClock};
use crate::services::locator::published_collections;
use crate::services::metadata::{deleted_roots, DeletedPaths};
use crate::services::presence::path_exists;
use crate::services::report::Inconsistencies;
use crate::services::validator::check_published_collection;
use std::path::{Path, PathBuf};

pub fn root_dir_inconsistency(dir: &str) -> String {
    format!("'{dir}' dir missing from zebedee root")
}

/// One-shot consistency check of a zebedee root.
///
/// Holds only read-only configuration; every `run` starts from an empty
/// inconsistency list, so repeated runs over an unchanged tree agree.
#[derive(Debug, Clone)]
pub struct Checker<C = SystemClock> {
    zebedee_root: String,
    check_published_previous_days: u32,
    clock: C,
}

impl Checker<SystemClock> {
    pub fn new(zebedee_root: impl Into<String>, check_published_previous_days: u32) -> Self {
        Self::with_clock(zebedee_root, check_published_previous_days, SystemClock)
    }
}

impl<C: Clock> Checker<C> {
    pub fn with_clock(
        zebedee_root: impl Into<String>,
        check_published_previous_days: u32,
        clock: C,
    ) -> Self {
        Self {
            zebedee_root: zebedee_root.into(),
            check_published_previous_days,
            clock,
        }
    }

    fn ensure_zebedee_root(&self) -> Result<&Path, CheckerError> {
        if self.zebedee_root.is_empty() {
            return Err(CheckerError::RootUndefined);
        }
        Ok(Path::new(&self.zebedee_root))
    }

    fn master(&self) -> Result<PathBuf, CheckerError> {
        Ok(self.ensure_zebedee_root()?.join(MASTER_DIR))
    }

    fn publish_log(&self) -> Result<PathBuf, CheckerError> {
        Ok(self.ensure_zebedee_root()?.join(PUBLISH_LOG_DIR))
    }

    pub fn run(&self) -> Result<CheckResult, CheckerError> {
        let found = Inconsistencies::default();

        // Both are checked so that a run reports every missing top-level dir.
        let valid_master = self.validate_dir(MASTER_DIR, &found)?;
        let valid_publish_log = self.validate_dir(PUBLISH_LOG_DIR, &found)?;

        if valid_master && valid_publish_log {
            self.check_published_collections(&found)?;
        }

        Ok(found.into_result())
    }

    fn validate_dir(&self, dir: &str, found: &Inconsistencies) -> Result<bool, CheckerError> {
        let fulldir = self.ensure_zebedee_root()?.join(dir);
        match path_exists(&fulldir) {
            Ok(true) => {
                tracing::info!(dir = %fulldir.display(), "dir exists in zebedee root");
                Ok(true)
            }
            Ok(false) => {
                tracing::info!(dir = %fulldir.display(), "dir does not exist in zebedee root");
                found.record(root_dir_inconsistency(dir));
                Ok(false)
            }
            Err(e) => {
                tracing::error!(dir = %fulldir.display(), error = %e, "error reading dir in zebedee root");
                Err(e)
            }
        }
    }

    pub fn published_collections(&self) -> Result<Vec<String>, CheckerError> {
        published_collections(
            &self.publish_log()?,
            self.check_published_previous_days,
            &self.clock,
        )
    }

    /// Checks every collection in the window, newest first, and returns
    /// whether all of them are consistent.
    pub fn check_published_collections(&self, found: &Inconsistencies) -> Result<bool, CheckerError> {
        tracing::info!("checking consistency of published collections");
        let collections = self.published_collections()?;
        self.check_collections_in_order(collections.iter().rev(), found)
    }

    /// Folds deletions through `ordered`, checking each collection against
    /// its own deletions plus those of every collection before it. Only a
    /// newest-first order excuses content deleted by later publishes.
    fn check_collections_in_order<'a>(
        &self,
        mut ordered: impl Iterator<Item = &'a String>,
        found: &Inconsistencies,
    ) -> Result<bool, CheckerError> {
        let publish_log = self.publish_log()?;
        let master = self.master()?;

        let (_, valid) = ordered.try_fold(
            (DeletedPaths::default(), true),
            |(deleted, valid), collection| -> Result<(DeletedPaths, bool), CheckerError> {
                let deleted = deleted.merged(deleted_roots(&publish_log, collection)?);
                let col_valid =
                    check_published_collection(&publish_log, &master, collection, &deleted, found)?;
                Ok((deleted, valid && col_valid))
            },
        )?;
        Ok(valid)
    }
}
