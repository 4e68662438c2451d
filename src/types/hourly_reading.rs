use crate::types::wind::Wind;
use crate::utils::{hpa_to_inhg, round_direction, round_half_even};

/// Values from the hourly model forecast for one hour, already rounded for briefing use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyReading {
    pub temperature_c: i32,
    pub pressure_inhg: f64,
    pub wind: Wind,
}

impl HourlyReading {
    /// Builds a reading from raw model output (°C, hPa, knots, degrees).
    pub fn from_raw(
        temperature_c: f64,
        pressure_hpa: f64,
        wind_speed: f64,
        wind_direction: f64,
    ) -> Self {
        Self {
            temperature_c: round_half_even(temperature_c),
            pressure_inhg: hpa_to_inhg(pressure_hpa),
            wind: Wind::new(round_direction(wind_direction), round_half_even(wind_speed)),
        }
    }
}
