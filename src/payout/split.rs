use crate::score::tie_groups;

/// Best ball, scramble and the individual champion pay 75% to first and 25%
/// to second.
pub const PODIUM_SPLIT: [f64; 2] = [0.75, 0.25];

/// Stroke play pays the whole pot to the lowest total.
pub const WINNER_TAKES_ALL: [f64; 1] = [1.0];

/// Pay `pot * fractions[place]` down a ranked slice. Entries tied with each
/// other pool the fractions of every place their group spans and share the
/// pool equally. Returns `(index, amount)` for each paid entry.
pub fn split_places<T>(
    ranked: &[T],
    same: impl Fn(&T, &T) -> bool,
    fractions: &[f64],
    pot: f64,
) -> Vec<(usize, f64)> {
    let mut paid = Vec::new();
    for (start, end) in tie_groups(ranked, same) {
        if start >= fractions.len() {
            break;
        }
        let pooled: f64 = fractions[start..end.min(fractions.len())].iter().sum();
        // group sizes are at most the field size
        let share = pot * pooled / (end - start) as f64;
        paid.extend((start..end).map(|i| (i, share)));
    }
    paid
}

/// Round to whole cents for display.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
