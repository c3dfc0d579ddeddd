// 👤 Player Entity - the reference set every player-name field resolves against
//
// Built once per run from the union of all season tables' name columns.
// Deduplication is by exact, case-sensitive name equality only — fuzzy
// matching happens later, at resolution time, against this set.

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use crate::resolver::ReferenceEntry;

/// Reference player: stable identity plus canonical full name.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
}

/// Persisted row of the player reference table: `(uuid, name)`.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRow {
    pub uuid: Uuid,
    pub name: String,
}

// ============================================================================
// PLAYER REGISTRY
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    /// Build the reference set from name columns concatenated in season
    /// order. The first occurrence of a name wins; every surviving name gets
    /// one fresh identifier.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let mut players = Vec::new();

        for name in names {
            if seen.insert(name.clone()) {
                players.push(Player {
                    id: Uuid::new_v4(),
                    name,
                });
            }
        }

        PlayerRegistry { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Reference entries keyed by canonical full name.
    pub fn name_reference(&self) -> Vec<ReferenceEntry> {
        self.players
            .iter()
            .map(|player| ReferenceEntry::new(player.name.clone(), player.id))
            .collect()
    }

    /// Rows of the persisted reference table.
    pub fn to_rows(&self) -> Vec<PlayerRow> {
        self.players
            .iter()
            .map(|player| PlayerRow {
                uuid: player.id,
                name: player.name.clone(),
            })
            .collect()
    }
}
