// Column mapping for the season statistics sources.
//
// Three of the four scraped season tables glue each stat's explainer text
// onto the header; this maps them down to the common short set. A "*" target
// marks a column the common schema drops. Tables that already carry short
// headers pass through the mapping unchanged.

pub const STATS_COLUMN_MAPPING: &[(&str, &str)] = &[
    ("RANK", "RANK"),
    ("FULL NAME", "NAME"),
    ("TEAM", "TEAM"),
    ("POS", "POS"),
    ("AGE", "AGE"),
    ("GP", "GP"),
    ("MPG", "MPG"),
    (
        "MIN%Minutes PercentagePercentage of team minutes used by a player while he was on the floor",
        "*",
    ),
    (
        "USG%Usage RateUsage rate, a.k.a., usage percentage is an estimate of the percentage of team plays used by a player while he was on the floor",
        "USG%",
    ),
    (
        "TO%Turnover RateA metric that estimates the number of turnovers a player commits per 100 possessions",
        "TO%",
    ),
    ("FTA", "FTA"),
    ("FT%", "FT%"),
    ("2PA", "2PA"),
    ("2P%", "2P%"),
    ("3PA", "3PA"),
    ("3P%", "3P%"),
    (
        "eFG%Effective Shooting PercentageWith eFG%, three-point shots made are worth 50% more than two-point shots made. eFG% Formula=(FGM+ (0.5 x 3PM))/FGA",
        "eFG%",
    ),
    (
        "TS%True Shooting PercentageTrue shooting percentage is a measure of shooting efficiency that takes into account field goals, 3-point field goals, and free throws.",
        "TS%",
    ),
    ("PPGPointsPoints per game.", "PPG"),
    ("RPGReboundsRebounds per game.", "RPG"),
    (
        "TRB%Total Rebound PercentageTotal rebound percentage is estimated percentage of available rebounds grabbed by the player while the player is on the court.",
        "*",
    ),
    ("APGAssistsAssists per game.", "APG"),
    (
        "AST%Assist PercentageAssist percentage is an estimated percentage of teammate field goals a player assisted while the player is on the court",
        "P+A",
    ),
    ("SPGStealsSteals per game.", "SPG"),
    ("BPGBlocksBlocks per game.", "BPG"),
    ("TOPGTurnoversTurnovers per game.", "TPG"),
    (
        "VIVersatility IndexVersatility index is a metric that measures a player’s ability to produce in points, assists, and rebounds. The average player will score around a five on the index, while top players score above 10",
        "VI",
    ),
    (
        "ORTGOffensive RatingIndividual offensive rating is the number of points produced by a player per 100 total individual possessions.",
        "ORtg",
    ),
    (
        "DRTGDefensive RatingIndividual defensive rating estimates how many points the player allowed per 100 possessions he individually faced while staying on the court.",
        "DRtg",
    ),
];

/// Aggregate columns some sources carry on top of the common set.
pub const EXTRA_STAT_COLUMNS: &[&str] = &["P+R+A", "P+R"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_targets_are_short_names_or_drops() {
        for (source, target) in STATS_COLUMN_MAPPING {
            assert!(!source.is_empty());
            assert!(
                *target == "*" || target.len() <= 4,
                "unexpected mapping target '{target}'"
            );
        }
    }

    #[test]
    fn test_mapping_covers_the_join_columns() {
        let targets: Vec<&str> = STATS_COLUMN_MAPPING.iter().map(|(_, t)| *t).collect();
        assert!(targets.contains(&"NAME"));
        assert!(targets.contains(&"TEAM"));
        assert_eq!(targets.iter().filter(|t| **t == "*").count(), 2);
    }
}
