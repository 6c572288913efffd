// Panel data loader - Tries each source in priority order, never fails
use crate::application::panel_source::PanelSource;
use crate::domain::panel::PanelPage;
use serde::Deserialize;
use std::sync::Arc;

/// Which fallback tiers are consulted after the spreadsheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Spreadsheet, then delimited text, then the bundled dataset.
    Legacy,
    /// Spreadsheet, then delimited text, then nothing.
    TextFallback,
    /// Spreadsheet only; an empty but readable sheet is still an answer.
    #[default]
    SpreadsheetOnly,
}

/// When a tier's result is accepted instead of falling through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// At least one row was read.
    NonEmpty,
    /// The source could be read at all.
    Reachable,
}

#[derive(Clone)]
struct Tier {
    source: Arc<dyn PanelSource>,
    acceptance: Acceptance,
}

/// Which tier produced the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Source(String),
    Exhausted,
}

#[derive(Clone, Default)]
pub struct PanelDataLoader {
    tiers: Vec<Tier>,
}

impl PanelDataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tier. Tiers are tried in the order they are added.
    pub fn with_tier(mut self, source: Arc<dyn PanelSource>, acceptance: Acceptance) -> Self {
        self.tiers.push(Tier { source, acceptance });
        self
    }

    pub fn for_policy(
        policy: FallbackPolicy,
        spreadsheet: Arc<dyn PanelSource>,
        text: Arc<dyn PanelSource>,
        bundled: Arc<dyn PanelSource>,
    ) -> Self {
        match policy {
            FallbackPolicy::Legacy => Self::new()
                .with_tier(spreadsheet, Acceptance::NonEmpty)
                .with_tier(text, Acceptance::NonEmpty)
                .with_tier(bundled, Acceptance::Reachable),
            FallbackPolicy::TextFallback => Self::new()
                .with_tier(spreadsheet, Acceptance::NonEmpty)
                .with_tier(text, Acceptance::NonEmpty),
            FallbackPolicy::SpreadsheetOnly => {
                Self::new().with_tier(spreadsheet, Acceptance::Reachable)
            }
        }
    }

    pub async fn load(&self) -> PanelPage {
        self.load_with_outcome().await.0
    }

    pub async fn load_with_outcome(&self) -> (PanelPage, LoadOutcome) {
        for tier in &self.tiers {
            let name = tier.source.name();
            match tier.source.load_rows().await {
                Ok(rows) if rows.is_empty() && tier.acceptance == Acceptance::NonEmpty => {
                    tracing::debug!("Panel source {} returned no rows, falling through", name);
                }
                Ok(rows) => {
                    tracing::debug!("Panel source {} answered with {} rows", name, rows.len());
                    return (PanelPage::from_rows(&rows), LoadOutcome::Source(name.to_string()));
                }
                Err(e) => {
                    tracing::warn!("Panel source {} unavailable: {}", name, e);
                }
            }
        }

        tracing::warn!("No panel source answered, serving an empty panel list");
        (PanelPage::empty(), LoadOutcome::Exhausted)
    }
}
