// 🔄 Integration pipeline - load, normalize, resolve, write.
//
// Step order follows the data dependencies: the roster must exist before
// champions or team columns can resolve, and the player reference is built
// from the union of the normalized season tables before any player column
// resolves.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::champions::{self, ResolvedChampion, TitleRow};
use crate::config::PipelineConfig;
use crate::distance::DistanceMetric;
use crate::entities::{PlayerRegistry, TeamRegistry, TeamSource};
use crate::report::{IntegrationReport, LinkSummary};
use crate::resolver::Resolver;
use crate::salaries::{self, ResolvedSalary, SalarySource};
use crate::stats;
use crate::table::Table;

/// Run the full integration and return the match-quality report.
pub fn run(config: &PipelineConfig) -> Result<IntegrationReport> {
    // 1. Canonical teams
    println!("📂 Loading canonical teams...");
    let team_sources: Vec<TeamSource> = read_rows(&config.teams_csv)?;
    let teams = TeamRegistry::from_sources(team_sources);
    println!("✓ {} teams registered", teams.len());

    // 2. Championship records
    println!("\n🏆 Integrating championships...");
    let titles: Vec<TitleRow> = read_rows(&config.titles_csv)?;
    let records = champions::collect_champions(&titles, &teams);
    let name_resolver = Resolver::new(DistanceMetric::Levenshtein);
    let resolved_champions = champions::resolve_champions(&records, &name_resolver, &teams)?;
    println!(
        "✓ {} champion records from {} title rows",
        resolved_champions.len(),
        titles.len()
    );

    // 3. Season statistics: normalize every table, then build the player
    //    reference from the union of their name columns
    println!("\n📊 Normalizing season statistics...");
    let mut stat_tables = Vec::with_capacity(config.stats.len());
    for season in &config.stats {
        let raw = Table::from_csv_path(&season.path)?;
        let normalized = stats::normalize(&raw)
            .with_context(|| format!("failed to normalize {}", season.path.display()))?;
        println!("✓ {}: {} rows", season.season, normalized.len());
        stat_tables.push(normalized);
    }

    let players = PlayerRegistry::from_names(stats::player_names(&stat_tables)?);
    println!("✓ {} unique players registered", players.len());

    // 4. Resolve the statistics tables
    let fuzzy_resolver = Resolver::new(DistanceMetric::DamerauLevenshtein);
    let mut report = IntegrationReport::new(teams.len(), players.len());
    report.add_link(champion_link(&resolved_champions));

    let mut resolved_stats = Vec::with_capacity(stat_tables.len());
    for (season, table) in config.stats.iter().zip(&stat_tables) {
        let resolved = stats::resolve_table(table, &fuzzy_resolver, &players, &teams)?;
        let table_name = format!("stats_{}", season.season);
        report.add_link(table_link(&table_name, "player_uuid", &resolved)?);
        report.add_link(table_link(&table_name, "team_uuid", &resolved)?);
        resolved_stats.push(resolved);
    }

    // 5. Salaries
    println!("\n💰 Integrating salaries...");
    let mut resolved_salaries = Vec::with_capacity(config.salaries.len());
    for season in &config.salaries {
        let rows: Vec<SalarySource> = read_rows(&season.path)?;
        let resolved = salaries::resolve_salaries(&rows, &fuzzy_resolver, &players)
            .with_context(|| format!("failed to integrate {}", season.path.display()))?;

        let matched = resolved.iter().filter(|r| r.player_uuid.is_some()).count();
        println!(
            "✓ {}: {}/{} players matched",
            season.season,
            matched,
            resolved.len()
        );
        report.add_link(LinkSummary::new(
            &format!("salaries_{}", season.season),
            "player_uuid",
            resolved.len(),
            matched,
        ));
        resolved_salaries.push(resolved);
    }

    // 6. Write the output tables and the report
    println!("\n💾 Writing output tables...");
    write_outputs(
        config,
        &teams,
        &players,
        &resolved_champions,
        &resolved_stats,
        &resolved_salaries,
    )?;
    report.write_json(&config.out_dir.join("integration_report.json"))?;
    println!("✓ {}", report.summary());

    Ok(report)
}

fn champion_link(resolved: &[ResolvedChampion]) -> LinkSummary {
    let matched = resolved
        .iter()
        .filter(|record| record.champion_uuid.is_some())
        .count();
    LinkSummary::new("champions", "champion_uuid", resolved.len(), matched)
}

fn table_link(table_name: &str, field: &str, table: &Table) -> Result<LinkSummary> {
    let index = table.column_index(field)?;
    let matched = table
        .rows()
        .iter()
        .filter(|row| !row[index].is_empty())
        .count();
    Ok(LinkSummary::new(table_name, field, table.len(), matched))
}

fn write_outputs(
    config: &PipelineConfig,
    teams: &TeamRegistry,
    players: &PlayerRegistry,
    champions: &[ResolvedChampion],
    stat_tables: &[Table],
    salary_tables: &[Vec<ResolvedSalary>],
) -> Result<()> {
    let out = &config.out_dir;
    for subdir in [out.clone(), out.join("stats"), out.join("salaries")] {
        fs::create_dir_all(&subdir)
            .with_context(|| format!("failed to create {}", subdir.display()))?;
    }

    write_rows(&out.join("teams_with_uuid.csv"), &teams.to_rows())?;
    write_rows(&out.join("unique_players.csv"), &players.to_rows())?;
    write_rows(&out.join("champions_with_team_ids.csv"), champions)?;

    for (season, table) in config.stats.iter().zip(stat_tables) {
        let path = out.join("stats").join(format!("stats_{}.csv", season.season));
        table.write_csv_path(&path)?;
    }
    for (season, rows) in config.salaries.iter().zip(salary_tables) {
        let path = out
            .join("salaries")
            .join(format!("salaries_{}.csv", season.season));
        write_rows(&path, rows)?;
    }

    Ok(())
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: T = result.with_context(|| format!("failed to parse {}", path.display()))?;
        rows.push(row);
    }

    Ok(rows)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
