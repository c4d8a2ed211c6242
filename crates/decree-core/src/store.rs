//! Keyed local persistence of case records.
//!
//! A single JSON file holds the full report list, newest first, matching
//! the single-device scope of the tool. The store never feeds the engine
//! directly: imported records go back through the validator first.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde_json::Value;

use crate::types::{CaseRecord, StoredReport};
use crate::validator::validate_case;
use crate::DecreeResult;

/// JSON-file-backed store of case records.
#[derive(Debug)]
pub struct ReportStore {
    path: PathBuf,
    reports: Vec<StoredReport>,
}

/// Result of a best-effort batch import.
#[derive(Debug, Default, Serialize)]
pub struct ImportOutcome {
    pub imported: usize,
    pub updated: usize,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Serialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

impl ReportStore {
    /// Load an existing store file, or start empty if none exists yet.
    pub fn open(path: impl AsRef<Path>) -> DecreeResult<Self> {
        let path = path.as_ref().to_path_buf();
        let reports = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&contents)?
            }
        } else {
            Vec::new()
        };
        Ok(Self { path, reports })
    }

    /// All stored reports, newest first.
    pub fn list(&self) -> &[StoredReport] {
        &self.reports
    }

    pub fn get(&self, id: &str) -> Option<&StoredReport> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Assign an id and timestamp, prepend, and persist.
    pub fn save(&mut self, case: CaseRecord) -> DecreeResult<StoredReport> {
        let report = StoredReport {
            id: next_id(),
            created_at: chrono::Utc::now().to_rfc3339(),
            case,
        };
        self.reports.insert(0, report.clone());
        self.persist()?;
        Ok(report)
    }

    /// Replace a stored report in place. Returns false when the id is unknown.
    pub fn update(&mut self, report: StoredReport) -> DecreeResult<bool> {
        match self.reports.iter_mut().find(|r| r.id == report.id) {
            Some(slot) => {
                *slot = report;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a stored report. Returns false when the id is unknown.
    pub fn delete(&mut self, id: &str) -> DecreeResult<bool> {
        let before = self.reports.len();
        self.reports.retain(|r| r.id != id);
        let removed = self.reports.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Best-effort batch import of externally supplied records.
    ///
    /// Each candidate is deserialized and re-validated; failures are
    /// recorded and skipped, never aborting the batch. A candidate whose id
    /// already exists replaces the stored copy.
    pub fn import(&mut self, values: Vec<Value>) -> DecreeResult<ImportOutcome> {
        let mut outcome = ImportOutcome::default();

        for (index, value) in values.into_iter().enumerate() {
            let report: StoredReport = match serde_json::from_value(value) {
                Ok(report) => report,
                Err(e) => {
                    outcome.skipped.push(SkippedRecord {
                        index,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            if let Err(issues) = validate_case(&report.case) {
                outcome.skipped.push(SkippedRecord {
                    index,
                    reason: format!("{}: {}", issues[0].field, issues[0].reason),
                });
                continue;
            }
            match self.reports.iter_mut().find(|r| r.id == report.id) {
                Some(slot) => {
                    *slot = report;
                    outcome.updated += 1;
                }
                None => {
                    self.reports.insert(0, report);
                    outcome.imported += 1;
                }
            }
        }

        if outcome.imported + outcome.updated > 0 {
            self.persist()?;
        }
        Ok(outcome)
    }

    fn persist(&self) -> DecreeResult<()> {
        let json = serde_json::to_string_pretty(&self.reports)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Time-ordered hex ids; a process-local counter breaks ties.
fn next_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    let count = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{nanos:016x}{count:08x}")
}
