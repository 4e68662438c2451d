//! Picks the TAF wind for a moment in time.
//!
//! A period whose window contains the target time wins outright. When no window
//! contains it (typically near the end of a report's validity) the window whose
//! nearer boundary is closest to the target is used instead.

use crate::forecast_data::error::ForecastDataError;
use crate::types::taf_period::TafPeriod;
use crate::types::wind::Wind;
use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use thiserror::Error;

/// Why no TAF wind is available.
///
/// None of these abort a briefing; the hourly model wind is used instead. The
/// distinct causes exist for logging.
#[derive(Debug, Error)]
pub enum TafAbsence {
    #[error("TAF could not be fetched")]
    Unavailable(#[from] ForecastDataError),

    #[error("TAF has no forecast periods")]
    NoPeriods,

    #[error("no TAF period has parseable start and end times")]
    NoDatablePeriod,

    #[error("the TAF period covering the requested time has no usable wind")]
    CorruptContainingPeriod,

    #[error("the nearest TAF period has no usable wind")]
    NearestWithoutWind,
}

/// Selects the wind for `target` from periods in upstream order.
///
/// * Periods whose start or end cannot be parsed are skipped.
/// * A period with `start <= target <= end` and a usable wind is returned at once.
/// * A containing period without a usable wind is ignored. It is never the
///   nearest candidate, and once one has been seen the nearest-window fallback
///   is off: only a later containing period with a usable wind can still win.
/// * Otherwise the period minimising `min(|target - start|, |target - end|)`
///   supplies the wind. On equal distances the first period wins.
///
/// The list is scanned in full; it is not assumed to be sorted.
///
/// # Errors
///
/// Returns the [`TafAbsence`] describing why no wind could be selected.
pub fn select_wind(periods: &[TafPeriod], target: DateTime<Utc>) -> Result<Wind, TafAbsence> {
    if periods.is_empty() {
        return Err(TafAbsence::NoPeriods);
    }

    let mut nearest: Option<(TimeDelta, &TafPeriod)> = None;
    let mut corrupt_containing = false;

    for period in periods {
        let (Some(start), Some(end)) = (period.start(), period.end()) else {
            continue;
        };

        if start <= target && target <= end {
            match period.wind() {
                Some(wind) => {
                    debug!("TAF period {} - {} contains {}", start, end, target);
                    return Ok(wind);
                }
                None => {
                    corrupt_containing = true;
                    continue;
                }
            }
        }

        let distance = (target - start).abs().min((target - end).abs());
        if nearest.map_or(true, |(best, _)| distance < best) {
            nearest = Some((distance, period));
        }
    }

    if corrupt_containing {
        return Err(TafAbsence::CorruptContainingPeriod);
    }

    let (distance, period) = nearest.ok_or(TafAbsence::NoDatablePeriod)?;
    debug!(
        "No TAF period contains {}, nearest is {} minutes away",
        target,
        distance.num_minutes()
    );
    period.wind().ok_or(TafAbsence::NearestWithoutWind)
}
