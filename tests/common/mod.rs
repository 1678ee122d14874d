#![allow(dead_code)]

use rusty_golf_payout::{Course, GameFormat, Player, ScoreSheet, Team, Tournament, ScoringError};

/// Stroke index equals hole number on every fixture course.
pub const INDEXES: [u8; 18] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18];

pub fn par_72() -> Course {
    Course::from_layout(
        "Fixture Par 72",
        [4, 4, 3, 5, 4, 4, 3, 5, 4, 4, 4, 3, 5, 4, 4, 3, 5, 4],
        INDEXES,
    )
    .expect("fixture course is valid")
}

pub fn flat_par_4() -> Course {
    Course::from_layout("Fixture Flat", [4; 18], INDEXES).expect("fixture course is valid")
}

/// Teams of scratch players named `<team>1`, `<team>2`, ...
pub fn scratch_team(name: &str, players: usize) -> Team {
    Team::new(
        name,
        (1..=players)
            .map(|i| Player::new(format!("{name}{i}"), 0.0))
            .collect(),
    )
}

pub fn tournament(
    format: GameFormat,
    bet: f64,
    teams: Vec<Team>,
) -> Result<Tournament, ScoringError> {
    Tournament::new(Some(flat_par_4()), format, bet, 0.0, 0.0, teams)
}

/// Record the same gross on every hole for one player.
pub fn fill(sheet: &mut ScoreSheet, team: &str, player: &str, gross: u32) {
    for hole in 1..=18 {
        sheet.record(team, player, hole, gross);
    }
}

/// Record per-hole gross scores; hole 1 first.
pub fn fill_holes(sheet: &mut ScoreSheet, team: &str, player: &str, gross: &[u32]) {
    for (i, g) in gross.iter().enumerate() {
        let hole = u8::try_from(i + 1).expect("at most 18 holes");
        sheet.record(team, player, hole, *g);
    }
}

/// 18 values summing to `total`, spread as evenly as possible.
pub fn spread(total: u32) -> Vec<u32> {
    let base = total / 18;
    let extra = total % 18;
    (0..18).map(|i| base + u32::from(i < extra)).collect()
}
