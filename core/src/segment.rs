use std::ops::Range;

use crate::models::RawStep;

/// Standard terskel (linjer) mellom to steg før en ny økt antas.
pub const DEFAULT_GAP_THRESHOLD: u32 = 10;

/// Del en flat stegliste i økter ut fra hopp i kildeposisjon.
///
/// Et hopp *større enn* `gap_threshold` mellom steg i og i+1 avslutter gruppen
/// etter i. Siste gruppe går alltid til slutten av listen. Tom liste eller ett
/// steg gir én gruppe. Rekkene er halvåpne og dekker hele `raw_steps`.
pub fn segment(raw_steps: &[RawStep], gap_threshold: u32) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut start = 0usize;

    for (i, pair) in raw_steps.windows(2).enumerate() {
        // Posisjoner kan i teorien gå bakover; det regnes ikke som et hopp
        let gap = pair[1].source_position.saturating_sub(pair[0].source_position);
        if gap > gap_threshold {
            groups.push(start..i + 1);
            start = i + 1;
        }
    }
    groups.push(start..raw_steps.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(positions: &[u32]) -> Vec<RawStep> {
        positions.iter().map(|&p| RawStep::new("x", p)).collect()
    }

    #[test]
    fn splits_on_large_gap() {
        assert_eq!(segment(&at(&[1, 2, 3, 20, 21]), 10), vec![0..3, 3..5]);
    }

    #[test]
    fn gap_equal_to_threshold_does_not_split() {
        assert_eq!(segment(&at(&[1, 11, 22]), 10), vec![0..2, 2..3]);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(segment(&[], 10), vec![0..0]);
        assert_eq!(segment(&at(&[5]), 10), vec![0..1]);
    }
}
