use std::time::Duration;

use sles::{SLmillibel, SLmillisecond, SL_MILLIBEL_MAX, SL_MILLIBEL_MIN, SL_TIME_UNKNOWN};

use crate::{Error, Result};

/// Converts a linear amplitude gain to millibels.
///
/// Silence (zero, negative or NaN gain) maps to `SL_MILLIBEL_MIN`; other
/// values are rounded and clamped to the millibel range.
pub fn millibel_from_gain(gain: f32) -> SLmillibel {
    if gain.is_nan() || gain <= 0.0 {
        return SL_MILLIBEL_MIN;
    }

    let mb = (2000.0 * gain.log10()).round();
    mb.clamp(SL_MILLIBEL_MIN as f32, SL_MILLIBEL_MAX as f32) as SLmillibel
}

/// Converts millibels to a linear amplitude gain. `SL_MILLIBEL_MIN` is silence.
pub fn gain_from_millibel(mb: SLmillibel) -> f32 {
    if mb == SL_MILLIBEL_MIN {
        return 0.0;
    }

    10.0f32.powf(mb as f32 / 2000.0)
}

pub(crate) fn to_millis(duration: Duration) -> Result<SLmillisecond> {
    SLmillisecond::try_from(duration.as_millis())
        .ok()
        .filter(|&ms| ms != SL_TIME_UNKNOWN)
        .ok_or(Error::InvalidArgument("duration does not fit in milliseconds"))
}

/// `SL_TIME_UNKNOWN` maps to `None`.
pub(crate) fn from_millis(ms: SLmillisecond) -> Option<Duration> {
    if ms == SL_TIME_UNKNOWN {
        None
    } else {
        Some(Duration::from_millis(ms as u64))
    }
}
