// 🏆 Championship integration - split scraped title rows by conference and
// link each champion to its canonical team.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::TeamRegistry;
use crate::resolver::Resolver;

// ============================================================================
// INPUT / OUTPUT SHAPES
// ============================================================================

/// Scraped championship row, one season per row.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleRow {
    pub year: String,
    pub western_champ: String,
    pub western_coach: String,
    pub score: String,
    pub eastern_champ: String,
    pub eastern_coach: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Western,
    Eastern,
}

/// A kept champion record, before team resolution.
#[derive(Debug, Clone)]
pub struct ChampionRecord {
    pub id: Uuid,
    pub year: String,
    pub region: Region,
    pub champion: String,
}

/// Output row: the free-text champion column replaced by the team id.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedChampion {
    pub uuid: Uuid,
    pub year: String,
    pub region: Region,
    pub champion_uuid: Option<Uuid>,
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Champion cells often carry a parenthetical seed note, e.g.
/// "Golden State Warriors (1)". Cut at the first '(' and trim.
pub fn strip_seed_note(name: &str) -> &str {
    name.split('(').next().unwrap_or(name).trim()
}

/// Split title rows into per-region champion records: the whole western
/// block first, then the eastern block, each in source order. Years are
/// truncated to their leading four characters. Rows whose stripped champion
/// name is not an exact member of the canonical roster are skipped.
pub fn collect_champions(titles: &[TitleRow], teams: &TeamRegistry) -> Vec<ChampionRecord> {
    let mut western = Vec::new();
    let mut eastern = Vec::new();

    for row in titles {
        let year: String = row.year.chars().take(4).collect();

        if teams.contains_name(strip_seed_note(&row.western_champ)) {
            western.push((year.clone(), row.western_champ.clone()));
        }
        if teams.contains_name(strip_seed_note(&row.eastern_champ)) {
            eastern.push((year.clone(), row.eastern_champ.clone()));
        }
    }

    let mut records = Vec::with_capacity(western.len() + eastern.len());
    for (year, champion) in western {
        records.push(ChampionRecord {
            id: Uuid::new_v4(),
            year,
            region: Region::Western,
            champion,
        });
    }
    for (year, champion) in eastern {
        records.push(ChampionRecord {
            id: Uuid::new_v4(),
            year,
            region: Region::Eastern,
            champion,
        });
    }

    records
}

/// Link every champion record to a team identifier. The seed note is
/// stripped before matching; records without a match at the resolver's
/// threshold keep a blank team id.
pub fn resolve_champions(
    records: &[ChampionRecord],
    resolver: &Resolver,
    teams: &TeamRegistry,
) -> Result<Vec<ResolvedChampion>> {
    let reference = teams.name_reference();
    let mut resolved = Vec::with_capacity(records.len());

    for record in records {
        let champion_uuid = resolver.resolve(strip_seed_note(&record.champion), &reference)?;
        resolved.push(ResolvedChampion {
            uuid: record.id,
            year: record.year.clone(),
            region: record.region,
            champion_uuid,
        });
    }

    Ok(resolved)
}

// ============================================================================
// TESTS
// ============================================================================
