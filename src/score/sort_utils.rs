use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};

/// A team's place in a ranked format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TeamStanding {
    pub team: String,
    /// Net over the holes that produced a score.
    pub net: i32,
    pub holes_resolved: u8,
    /// False when some hole produced no team score, leaving the total
    /// unresolvable.
    pub complete: bool,
}

impl TeamStanding {
    #[must_use]
    pub fn total_net(&self) -> Option<i32> {
        self.complete.then_some(self.net)
    }

    fn rank_key(&self) -> (bool, Reverse<u8>, i32) {
        if self.complete {
            (false, Reverse(0), self.net)
        } else {
            (true, Reverse(self.holes_resolved), self.net)
        }
    }
}

/// Lowest net first. Complete cards rank ahead of incomplete ones; ties keep
/// declaration order.
pub fn sort_standings(standings: &mut [TeamStanding]) {
    standings.sort_by(compare_standings);
}

#[must_use]
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    a.rank_key().cmp(&b.rank_key())
}

/// Split an already-sorted slice into runs of equal entries, returning the
/// half-open index range of each run.
pub fn tie_groups<T>(sorted: &[T], same: impl Fn(&T, &T) -> bool) -> Vec<(usize, usize)> {
    let mut groups = Vec::new();
    let mut start = 0;
    while start < sorted.len() {
        let mut end = start + 1;
        while end < sorted.len() && same(&sorted[start], &sorted[end]) {
            end += 1;
        }
        groups.push((start, end));
        start = end;
    }
    groups
}

/// Competition positions (1, 1, 3, ...) for a sorted slice.
pub fn positions<T>(sorted: &[T], same: impl Fn(&T, &T) -> bool) -> Vec<usize> {
    let mut out = vec![0; sorted.len()];
    for (start, end) in tie_groups(sorted, same) {
        for slot in &mut out[start..end] {
            *slot = start + 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(team: &str, net: i32, holes: u8) -> TeamStanding {
        TeamStanding {
            team: team.to_string(),
            net,
            holes_resolved: holes,
            complete: holes == 18,
        }
    }

    #[test]
    fn incomplete_cards_sink() {
        let mut s = vec![
            standing("partial", 40, 10),
            standing("full", 80, 18),
            standing("less", 20, 5),
            standing("best", 70, 18),
        ];
        sort_standings(&mut s);
        let order: Vec<&str> = s.iter().map(|t| t.team.as_str()).collect();
        assert_eq!(order, vec!["best", "full", "partial", "less"]);
        assert_eq!(s[2].total_net(), None);
    }

    #[test]
    fn ties_stay_in_declaration_order() {
        let mut s = vec![standing("B", 70, 18), standing("A", 70, 18)];
        sort_standings(&mut s);
        assert_eq!(s[0].team, "B");
    }

    #[test]
    fn groups_and_positions() {
        let nets = [68, 70, 70, 72];
        assert_eq!(tie_groups(&nets, |a, b| a == b), vec![(0, 1), (1, 3), (3, 4)]);
        assert_eq!(positions(&nets, |a, b| a == b), vec![1, 2, 2, 4]);
        assert!(tie_groups::<i32>(&[], |a, b| a == b).is_empty());
    }
}
