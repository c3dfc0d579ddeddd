// 💰 Salary integration - parse currency-formatted amounts and link each
// row to a reference player.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::PlayerRegistry;
use crate::resolver::Resolver;

/// Scraped salary row: free-text player name, currency-formatted amount.
#[derive(Debug, Clone, Deserialize)]
pub struct SalarySource {
    pub player: String,
    pub salary: String,
}

/// Output row: record id, resolved player id (blank when unmatched),
/// numeric amount.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSalary {
    pub uuid: Uuid,
    pub player_uuid: Option<Uuid>,
    pub salary_in_usd: f64,
}

/// Parse a currency-formatted amount: "$45,780,966" -> 45780966.0.
/// Residual non-numeric content is a fatal parse failure for the table —
/// there is no partial-row recovery.
pub fn parse_salary(raw: &str) -> Result<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .with_context(|| format!("malformed salary value '{raw}'"))
}

/// Assign a record identifier to every salary row and link it to a player.
pub fn resolve_salaries(
    rows: &[SalarySource],
    resolver: &Resolver,
    players: &PlayerRegistry,
) -> Result<Vec<ResolvedSalary>> {
    let reference = players.name_reference();
    let mut resolved = Vec::with_capacity(rows.len());

    for row in rows {
        let salary_in_usd = parse_salary(&row.salary)?;
        let player_uuid = resolver.resolve(&row.player, &reference)?;
        resolved.push(ResolvedSalary {
            uuid: Uuid::new_v4(),
            player_uuid,
            salary_in_usd,
        });
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMetric;

    fn players() -> PlayerRegistry {
        PlayerRegistry::from_names([
            "Stephen Curry".to_string(),
            "Jayson Tatum".to_string(),
        ])
    }

    fn source(player: &str, salary: &str) -> SalarySource {
        SalarySource {
            player: player.to_string(),
            salary: salary.to_string(),
        }
    }

    #[test]
    fn test_parse_salary_strips_currency_formatting() {
        assert_eq!(parse_salary("$45,780,966").unwrap(), 45780966.0);
        assert_eq!(parse_salary("1000000").unwrap(), 1000000.0);
        assert_eq!(parse_salary(" $5,000 ").unwrap(), 5000.0);
    }

    #[test]
    fn test_parse_salary_rejects_residual_text() {
        assert!(parse_salary("$45,780,966 (est.)").is_err());
        assert!(parse_salary("").is_err());
        assert!(parse_salary("N/A").is_err());
    }

    #[test]
    fn test_resolve_assigns_record_ids_and_links_players() {
        let players = players();
        let resolver = Resolver::new(DistanceMetric::DamerauLevenshtein);
        let rows = vec![
            source("Stephen Curry", "$45,780,966"),
            source("Stephon Curry", "$1,000,000"),
        ];

        let resolved = resolve_salaries(&rows, &resolver, &players).unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].player_uuid, Some(players.players()[0].id));
        assert_eq!(resolved[0].salary_in_usd, 45780966.0);

        // Misspelled name is the best candidate but not exact: left blank
        assert_eq!(resolved[1].player_uuid, None);

        assert_ne!(resolved[0].uuid, resolved[1].uuid);
    }

    #[test]
    fn test_malformed_salary_aborts_the_table() {
        let players = players();
        let resolver = Resolver::new(DistanceMetric::DamerauLevenshtein);
        let rows = vec![
            source("Stephen Curry", "$45,780,966"),
            source("Jayson Tatum", "forty million"),
        ];

        assert!(resolve_salaries(&rows, &resolver, &players).is_err());
    }
}
