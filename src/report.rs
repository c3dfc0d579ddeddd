// 📈 Integration report - how well each output table linked to the
// reference sets. Written alongside the output tables so match quality is
// inspectable without re-running the pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Link quality of one identifier field in one output table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSummary {
    pub table: String,
    pub field: String,
    pub rows: usize,
    pub matched: usize,
}

impl LinkSummary {
    pub fn new(table: &str, field: &str, rows: usize, matched: usize) -> Self {
        LinkSummary {
            table: table.to_string(),
            field: field.to_string(),
            rows,
            matched,
        }
    }

    pub fn unmatched(&self) -> usize {
        self.rows - self.matched
    }

    pub fn match_rate(&self) -> f64 {
        if self.rows == 0 {
            1.0
        } else {
            self.matched as f64 / self.rows as f64
        }
    }
}

/// Full run report: reference-set sizes plus one summary per linked field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationReport {
    pub teams: usize,
    pub players: usize,
    pub links: Vec<LinkSummary>,
    pub generated_at: DateTime<Utc>,
}

impl IntegrationReport {
    pub fn new(teams: usize, players: usize) -> Self {
        IntegrationReport {
            teams,
            players,
            links: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    pub fn add_link(&mut self, link: LinkSummary) {
        self.links.push(link);
    }

    pub fn summary(&self) -> String {
        let rows: usize = self.links.iter().map(|link| link.rows).sum();
        let matched: usize = self.links.iter().map(|link| link.matched).sum();
        format!(
            "{} teams, {} players, {}/{} identifier fields matched ({} blank)",
            self.teams,
            self.players,
            matched,
            rows,
            rows - matched
        )
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
