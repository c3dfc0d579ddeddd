// Pipeline configuration - every input and output location is injected
// explicitly; nothing in the crate reads ambient path globals.

use std::path::{Path, PathBuf};

/// Seasons covered by the conventional dataset layout.
pub const SEASONS: &[&str] = &["2019_2020", "2020_2021", "2021_2022", "2022_2023"];

/// One per-season input table.
#[derive(Debug, Clone)]
pub struct SeasonFile {
    pub season: String,
    pub path: PathBuf,
}

impl SeasonFile {
    pub fn new(season: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        SeasonFile {
            season: season.into(),
            path: path.into(),
        }
    }
}

/// All input table locations plus the output directory for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub teams_csv: PathBuf,
    pub titles_csv: PathBuf,
    pub stats: Vec<SeasonFile>,
    pub salaries: Vec<SeasonFile>,
    pub out_dir: PathBuf,
}

impl PipelineConfig {
    /// Conventional layout under one dataset directory:
    /// `teams.csv`, `teams_won_titles.csv`, `stats/stats_<season>.csv`,
    /// `salaries/salaries_<season>.csv`, output under `processed/`.
    pub fn from_data_dir(dir: &Path) -> Self {
        let stats = SEASONS
            .iter()
            .map(|season| {
                SeasonFile::new(*season, dir.join("stats").join(format!("stats_{season}.csv")))
            })
            .collect();

        let salaries = SEASONS
            .iter()
            .map(|season| {
                SeasonFile::new(
                    *season,
                    dir.join("salaries").join(format!("salaries_{season}.csv")),
                )
            })
            .collect();

        PipelineConfig {
            teams_csv: dir.join("teams.csv"),
            titles_csv: dir.join("teams_won_titles.csv"),
            stats,
            salaries,
            out_dir: dir.join("processed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_layout() {
        let config = PipelineConfig::from_data_dir(Path::new("datasets"));

        assert_eq!(config.teams_csv, Path::new("datasets/teams.csv"));
        assert_eq!(config.titles_csv, Path::new("datasets/teams_won_titles.csv"));
        assert_eq!(config.stats.len(), 4);
        assert_eq!(config.salaries.len(), 4);
        assert_eq!(
            config.stats[0].path,
            Path::new("datasets/stats/stats_2019_2020.csv")
        );
        assert_eq!(
            config.salaries[3].path,
            Path::new("datasets/salaries/salaries_2022_2023.csv")
        );
        assert_eq!(config.out_dir, Path::new("datasets/processed"));
    }
}
