// 📊 Season statistics integration - bring heterogeneous season tables onto
// the common schema and replace their name columns with identifiers.

use anyhow::Result;
use uuid::Uuid;

use crate::columns::{EXTRA_STAT_COLUMNS, STATS_COLUMN_MAPPING};
use crate::entities::{PlayerRegistry, TeamRegistry};
use crate::resolver::Resolver;
use crate::table::Table;

pub const NAME_COLUMN: &str = "NAME";
pub const TEAM_COLUMN: &str = "TEAM";

/// Normalize one scraped season table: rename verbose headers, drop the
/// starred and extra aggregate columns, then drop every row whose player
/// name is ambiguous within the season.
pub fn normalize(table: &Table) -> Result<Table> {
    let mut normalized = table
        .rename_columns(STATS_COLUMN_MAPPING)
        .drop_starred_columns();

    for column in EXTRA_STAT_COLUMNS {
        normalized = normalized.drop_column_if_present(column);
    }

    normalized.drop_ambiguous_rows(NAME_COLUMN)
}

/// Player names of the given season tables, concatenated in season order.
/// This is the input to reference-identifier assignment; deduplication
/// happens in the registry.
pub fn player_names(tables: &[Table]) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for table in tables {
        names.extend(table.column(NAME_COLUMN)?);
    }
    Ok(names)
}

/// Replace a season table's NAME and TEAM columns with resolved identifiers.
///
/// Player names match the player reference directly; team strings are
/// lowercased and matched against the roster's lookup prefixes. The output
/// leads with `player_uuid`, `team_uuid`, followed by the remaining
/// performance columns in their normalized order; unresolved fields stay
/// blank.
pub fn resolve_table(
    table: &Table,
    resolver: &Resolver,
    players: &PlayerRegistry,
    teams: &TeamRegistry,
) -> Result<Table> {
    let name_index = table.column_index(NAME_COLUMN)?;
    let team_index = table.column_index(TEAM_COLUMN)?;
    let player_reference = players.name_reference();
    let team_reference = teams.prefix_reference();

    let mut headers = vec!["player_uuid".to_string(), "team_uuid".to_string()];
    headers.extend(
        table
            .headers()
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != name_index && *index != team_index)
            .map(|(_, header)| header.clone()),
    );
    let mut resolved = Table::new(headers);

    for row in table.rows() {
        let player_id = resolver.resolve(&row[name_index], &player_reference)?;
        let team_id = resolver.resolve(&row[team_index].to_lowercase(), &team_reference)?;

        let mut cells = vec![id_cell(player_id), id_cell(team_id)];
        cells.extend(
            row.iter()
                .enumerate()
                .filter(|(index, _)| *index != name_index && *index != team_index)
                .map(|(_, cell)| cell.clone()),
        );
        resolved.push_row(cells)?;
    }

    Ok(resolved)
}

fn id_cell(id: Option<Uuid>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}
