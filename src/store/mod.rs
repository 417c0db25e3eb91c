//! Persisted dashboard state: the selected reporting period
//!
//! The store is an explicit value owned by the caller. It loads the persisted
//! selection once when opened and writes through to its backend on every
//! change, so the in-memory value never gets ahead of what is stored.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Key under which the selected period is persisted.
pub const SELECTED_PERIOD_KEY: &str = "selected-period";

/// Durable key-value storage for small pieces of UI state.
///
/// Saving `None` removes the key.
pub trait StateBackend: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: Option<&str>) -> Result<()>;
}

/// A reporting period label such as `2024`, `FY2023` or `2024-Q1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReportingPeriod(String);

impl ReportingPeriod {
    pub fn parse(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidPeriod(
                "period label cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(Error::InvalidPeriod(format!(
                "period label `{}` contains control characters",
                trimmed.escape_debug()
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReportingPeriod {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ReportingPeriod> for String {
    fn from(p: ReportingPeriod) -> String {
        p.0
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Holds the currently selected reporting period.
pub struct PeriodStore<B: StateBackend> {
    backend: B,
    selected: Option<ReportingPeriod>,
}

impl<B: StateBackend> PeriodStore<B> {
    /// Open the store, loading the persisted selection.
    ///
    /// Nothing stored means no selection. An unreadable backend or a stored
    /// label that no longer parses is logged and also means no selection.
    pub fn open(backend: B) -> Result<Self> {
        let selected = match backend.load(SELECTED_PERIOD_KEY) {
            Ok(None) => None,
            Ok(Some(raw)) => match ReportingPeriod::parse(&raw) {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("discarding stored period selection: {}", e);
                    None
                }
            },
            Err(e) => {
                log::warn!("could not load stored period selection: {}", e);
                None
            }
        };
        log::debug!(
            "period store opened with selection {}",
            selected.as_ref().map(|p| p.as_str()).unwrap_or("<none>")
        );
        Ok(Self { backend, selected })
    }

    pub fn selected(&self) -> Option<&ReportingPeriod> {
        self.selected.as_ref()
    }

    /// Select a period and persist it. On a failed write the previous
    /// selection is kept.
    pub fn select(&mut self, period: ReportingPeriod) -> Result<()> {
        self.backend
            .save(SELECTED_PERIOD_KEY, Some(period.as_str()))?;
        log::info!("selected reporting period {}", period);
        self.selected = Some(period);
        Ok(())
    }

    /// Clear the selection and persist the removal.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.save(SELECTED_PERIOD_KEY, None)?;
        log::info!("cleared reporting period selection");
        self.selected = None;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}
