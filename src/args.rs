use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{CarryRule, RulesFile, ScoringRules, SkinsCarry};
use crate::model::{ScoreEntry, ScoreSheet, Tournament, TournamentSnapshot};
use crate::payout::PayoutReport;
use crate::report::{RunOutput, render_leaderboard, render_payouts};
use crate::score::{LeaderboardRow, compute_leaderboard};
use crate::storage::{InMemoryScoreStore, ScoreStore, Submission};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Leaderboard,
    Payouts,
    #[default]
    All,
}

#[derive(Parser, Debug, Default)]
#[command(about = "Score a golf outing and split the pot")]
pub struct Cli {
    /// Tournament snapshot JSON: course, game, bets, teams and any scores.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
    /// JSON array of score submissions replayed over the snapshot's scores.
    #[arg(long)]
    pub entries: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    #[arg(long)]
    pub config_toml: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub match_carry: Option<CarryRule>,
    #[arg(long, value_enum)]
    pub skins_final_carry: Option<SkinsCarry>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    snapshot: Option<PathBuf>,
    entries: Option<PathBuf>,
    mode: Option<Mode>,
    json: Option<bool>,
    #[serde(flatten)]
    scoring: RulesFile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub snapshot: PathBuf,
    pub entries: Option<PathBuf>,
    pub mode: Mode,
    pub rules: ScoringRules,
    pub json: bool,
}

/// Load config from CLI and optional TOML file.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or no
/// snapshot is given.
pub fn load_config(cli: Cli) -> Result<RunConfig> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let snapshot = cli
        .snapshot
        .or(file_config.snapshot)
        .ok_or_else(|| anyhow!("missing --snapshot"))?;

    Ok(RunConfig {
        snapshot,
        entries: cli.entries.or(file_config.entries),
        mode: cli.mode.or(file_config.mode).unwrap_or_default(),
        rules: ScoringRules::resolve(
            cli.match_carry,
            cli.skins_final_carry,
            &file_config.scoring,
        ),
        json: cli.json || file_config.json.unwrap_or(false),
    })
}

fn read_entries(path: &Path) -> Result<Vec<ScoreEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read score entries {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse score entries {}", path.display()))
}

/// Validate the snapshot and replay any extra entries over its scores,
/// last write wins.
///
/// # Errors
/// Returns an error for unreadable files or the first invalid setup or score.
pub fn load_tournament(config: &RunConfig) -> Result<(Tournament, ScoreSheet)> {
    let path = &config.snapshot;
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read snapshot {}", path.display()))?;
    let (tournament, scores) = TournamentSnapshot::from_json(&contents)
        .and_then(TournamentSnapshot::into_parts)
        .with_context(|| format!("load snapshot {}", path.display()))?;

    let Some(entries_path) = &config.entries else {
        return Ok((tournament, scores));
    };

    let mut store = InMemoryScoreStore::from_sheet(&scores, chrono::Utc::now());
    let (mut inserted, mut updated) = (0usize, 0usize);
    for entry in read_entries(entries_path)? {
        let target = format!("{}/{} hole {}", entry.team, entry.player, entry.hole);
        match store
            .submit(&tournament, entry)
            .with_context(|| format!("submit score for {target}"))?
        {
            Submission::Inserted => inserted += 1,
            Submission::Updated { .. } => updated += 1,
            Submission::Unchanged => {}
        }
    }
    info!(inserted, updated, total = store.len(), "score entries replayed");
    Ok((tournament, store.sheet()))
}

/// Produce the text or JSON the binary prints.
///
/// # Errors
/// Returns an error if the tournament cannot be loaded or scored.
pub fn run(config: &RunConfig) -> Result<String> {
    let (tournament, scores) = load_tournament(config)?;

    let leaderboard: Option<Vec<LeaderboardRow>> = match config.mode {
        Mode::Leaderboard | Mode::All => Some(compute_leaderboard(&tournament, &scores)),
        Mode::Payouts => None,
    };
    let payouts: Option<PayoutReport> = match config.mode {
        Mode::Payouts | Mode::All => Some(
            tournament
                .payouts(&scores, &config.rules)
                .context("compute payouts")?,
        ),
        Mode::Leaderboard => None,
    };

    if config.json {
        let output = RunOutput::new(&tournament, leaderboard, payouts);
        return serde_json::to_string_pretty(&output).context("serialize output");
    }

    let mut out = format!(
        "{} at {}\n",
        tournament.format().display_name(),
        tournament.course().name
    );
    if let Some(rows) = &leaderboard {
        out.push('\n');
        out.push_str(&render_leaderboard(rows));
    }
    if let Some(report) = &payouts {
        out.push('\n');
        out.push_str(&render_payouts(report));
    }
    Ok(out)
}
