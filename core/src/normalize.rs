// core/src/normalize.rs

/// Varighet i sekunder fra (timer, minutter, sekunder). Manglende del = 0.
/// Metter i stedet for å flyte over ved absurde tall.
pub fn normalize_duration(hours: Option<u32>, minutes: Option<u32>, seconds: Option<u32>) -> u32 {
    let h = hours.unwrap_or(0).saturating_mul(3600);
    let m = minutes.unwrap_or(0).saturating_mul(60);
    let s = seconds.unwrap_or(0);
    h.saturating_add(m).saturating_add(s)
}

/// Prosentpoeng av FTP → brøk (65 → 0.65)
#[inline]
pub fn normalize_power(percentage_points: u32) -> f64 {
    percentage_points as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_parts() {
        assert_eq!(normalize_duration(None, None, None), 0);
        assert_eq!(normalize_duration(Some(1), Some(30), Some(15)), 5415);
        assert_eq!(normalize_duration(None, Some(2), None), 120);
        assert_eq!(normalize_duration(Some(0), None, Some(45)), 45);
    }

    #[test]
    fn duration_saturates() {
        assert_eq!(normalize_duration(Some(u32::MAX), None, None), u32::MAX);
    }

    #[test]
    fn power_fraction() {
        assert_eq!(normalize_power(65), 0.65);
        assert_eq!(normalize_power(120), 1.2);
        assert_eq!(normalize_power(0), 0.0);
    }
}
