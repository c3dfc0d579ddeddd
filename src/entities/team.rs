// 🏀 Team Entity - canonical roster reference data
//
// Identifiers are assigned once, when the roster table is loaded, and are
// immutable for the lifetime of a run. The UUID is the join key; the name
// and prefix are the values other sources match against.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resolver::ReferenceEntry;

/// Canonical roster row as loaded from the source table.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamSource {
    pub name: String,

    /// Lowercase lookup prefix carried by the roster, matched against the
    /// abbreviated team strings in the season statistics sources.
    #[serde(rename = "prefix_1")]
    pub prefix: String,
}

/// Reference team: stable identity plus the values it was loaded with.
#[derive(Debug, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub prefix: String,
}

/// Persisted row of the team reference table: `(uuid, name)`.
#[derive(Debug, Clone, Serialize)]
pub struct TeamRow {
    pub uuid: Uuid,
    pub name: String,
}

// ============================================================================
// TEAM REGISTRY
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    /// Assign one fresh identifier per roster row, in input order.
    pub fn from_sources(sources: Vec<TeamSource>) -> Self {
        let teams = sources
            .into_iter()
            .map(|source| Team {
                id: Uuid::new_v4(),
                name: source.name,
                prefix: source.prefix,
            })
            .collect();

        TeamRegistry { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Exact, case-sensitive membership test on canonical names.
    pub fn contains_name(&self, name: &str) -> bool {
        self.teams.iter().any(|team| team.name == name)
    }

    /// Reference entries keyed by canonical name.
    pub fn name_reference(&self) -> Vec<ReferenceEntry> {
        self.teams
            .iter()
            .map(|team| ReferenceEntry::new(team.name.clone(), team.id))
            .collect()
    }

    /// Reference entries keyed by lookup prefix.
    pub fn prefix_reference(&self) -> Vec<ReferenceEntry> {
        self.teams
            .iter()
            .map(|team| ReferenceEntry::new(team.prefix.clone(), team.id))
            .collect()
    }

    /// Rows of the persisted reference table.
    pub fn to_rows(&self) -> Vec<TeamRow> {
        self.teams
            .iter()
            .map(|team| TeamRow {
                uuid: team.id,
                name: team.name.clone(),
            })
            .collect()
    }
}
