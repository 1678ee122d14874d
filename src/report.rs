use serde::Serialize;
use std::fmt;

use crate::model::Tournament;
use crate::payout::{FormatDetails, PayoutCategory, PayoutReport, round_cents};
use crate::score::LeaderboardRow;

/// What `--json` prints. Either half may be absent depending on the mode.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub game: String,
    pub course: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaderboard: Option<Vec<LeaderboardRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payouts: Option<PayoutReport>,
}

impl RunOutput {
    #[must_use]
    pub fn new(
        tournament: &Tournament,
        leaderboard: Option<Vec<LeaderboardRow>>,
        payouts: Option<PayoutReport>,
    ) -> Self {
        Self {
            game: tournament.format().to_string(),
            course: tournament.course().name.clone(),
            leaderboard,
            payouts,
        }
    }
}

fn to_par_label(to_par: i32) -> String {
    match to_par {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}

/// Fixed-width leaderboard, one row per team, unlogged holes shown as `-`.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardTable<'a>(pub &'a [LeaderboardRow]);

impl fmt::Display for LeaderboardTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .0
            .iter()
            .map(|r| r.team.chars().count())
            .max()
            .unwrap_or(0)
            .max("Team".len());

        write!(f, "{:>3}  {:<width$}", "Pos", "Team")?;
        for hole in 1..=18 {
            write!(f, " {hole:>3}")?;
        }
        writeln!(f, "  {:>5} {:>4} {:>5}", "Net", "Thru", "ToPar")?;

        for row in self.0 {
            write!(f, "{:>3}  {:<width$}", row.position, row.team)?;
            for net in &row.per_hole {
                match net {
                    Some(n) => write!(f, " {n:>3}")?,
                    None => write!(f, " {:>3}", "-")?,
                }
            }
            writeln!(
                f,
                "  {:>5} {:>4} {:>5}",
                row.total_net,
                row.holes_scored,
                to_par_label(row.to_par)
            )?;
        }
        Ok(())
    }
}

/// Payout lines in report order, amounts rounded to cents for display only.
#[derive(Debug, Clone, Copy)]
pub struct PayoutTable<'a>(pub &'a PayoutReport);

impl fmt::Display for PayoutTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let width = report
            .payouts
            .iter()
            .map(|l| l.label.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(f, "Total pot: {:.2}", round_cents(report.details.total_pot))?;
        for line in &report.payouts {
            let marker = match line.category {
                PayoutCategory::Tie => " (halved)",
                _ => "",
            };
            writeln!(
                f,
                "  {:<width$}  {:>10.2}{marker}",
                line.label,
                round_cents(line.amount)
            )?;
        }
        if let FormatDetails::Skins { unclaimed, .. } = &report.details.team {
            if *unclaimed > 0.0 {
                writeln!(f, "  unclaimed skins carry: {:.2}", round_cents(*unclaimed))?;
            }
        }
        Ok(())
    }
}

#[must_use]
pub fn render_leaderboard(rows: &[LeaderboardRow]) -> String {
    LeaderboardTable(rows).to_string()
}

#[must_use]
pub fn render_payouts(report: &PayoutReport) -> String {
    PayoutTable(report).to_string()
}
