/// Hectopascals in one inch of mercury.
const HPA_PER_INHG: f64 = 33.8639;

// Ties go to the even neighbour: 12.5 -> 12, 13.5 -> 14.
pub(crate) fn round_half_even(value: f64) -> i32 {
    value.round_ties_even() as i32
}

pub(crate) fn hpa_to_inhg(hpa: f64) -> f64 {
    (hpa / HPA_PER_INHG * 100.0).round_ties_even() / 100.0
}

/// Rounds to the nearest 10 degrees, then wraps into `[0, 360)`.
pub(crate) fn round_direction(degrees: f64) -> i32 {
    (round_half_even(degrees / 10.0) * 10).rem_euclid(360)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(12.5), 12);
        assert_eq!(round_half_even(13.5), 14);
        assert_eq!(round_half_even(12.51), 13);
        assert_eq!(round_half_even(-2.5), -2);
        assert_eq!(round_half_even(-2.6), -3);
    }

    #[test]
    fn test_standard_pressure() {
        assert_eq!(hpa_to_inhg(1013.25), 29.92);
        assert_eq!(hpa_to_inhg(1000.0), 29.53);
        assert_eq!(hpa_to_inhg(1030.0), 30.42);
    }

    #[test]
    fn test_direction_wraps_north() {
        assert_eq!(round_direction(357.0), 0);
        assert_eq!(round_direction(360.0), 0);
        assert_eq!(round_direction(5.0), 0);
        assert_eq!(round_direction(15.0), 20);
        assert_eq!(round_direction(354.0), 350);
        assert_eq!(round_direction(226.0), 230);
        assert_eq!(round_direction(0.0), 0);
    }
}
