use sles::*;

use crate::interface::{call, Itf};
use crate::units::{gain_from_millibel, millibel_from_gain};
use crate::{check, Error, Result};

/// Volume of a player or output mix (`SLVolumeItf`).
pub type Volume = Itf<SLVolumeItf_>;

impl Itf<SLVolumeItf_> {
    pub fn set_level(&self, level: SLmillibel) -> Result<()> {
        check(unsafe { call!(self, SetVolumeLevel(level)) })
    }

    pub fn level(&self) -> Result<SLmillibel> {
        let mut level = 0;
        check(unsafe { call!(self, GetVolumeLevel(&mut level)) })?;
        Ok(level)
    }

    pub fn max_level(&self) -> Result<SLmillibel> {
        let mut level = 0;
        check(unsafe { call!(self, GetMaxVolumeLevel(&mut level)) })?;
        Ok(level)
    }

    /// Sets a linear gain, clamped to [`max_level`](Self::max_level).
    pub fn set_gain(&self, gain: f32) -> Result<()> {
        let level = millibel_from_gain(gain).min(self.max_level()?);
        self.set_level(level)
    }

    pub fn gain(&self) -> Result<f32> {
        Ok(gain_from_millibel(self.level()?))
    }

    pub fn set_mute(&self, mute: bool) -> Result<()> {
        check(unsafe { call!(self, SetMute(mute as SLboolean)) })
    }

    pub fn is_muted(&self) -> Result<bool> {
        let mut mute = SL_BOOLEAN_FALSE;
        check(unsafe { call!(self, GetMute(&mut mute)) })?;
        Ok(mute != SL_BOOLEAN_FALSE)
    }

    pub fn enable_stereo_position(&self, enable: bool) -> Result<()> {
        check(unsafe { call!(self, EnableStereoPosition(enable as SLboolean)) })
    }

    pub fn is_stereo_position_enabled(&self) -> Result<bool> {
        let mut enabled = SL_BOOLEAN_FALSE;
        check(unsafe { call!(self, IsEnabledStereoPosition(&mut enabled)) })?;
        Ok(enabled != SL_BOOLEAN_FALSE)
    }

    /// `-1000` is fully left, `1000` fully right.
    pub fn set_stereo_position(&self, position: SLpermille) -> Result<()> {
        if !(-1000..=1000).contains(&position) {
            return Err(Error::InvalidArgument("stereo position outside -1000..=1000"));
        }
        check(unsafe { call!(self, SetStereoPosition(position)) })
    }

    pub fn stereo_position(&self) -> Result<SLpermille> {
        let mut position = 0;
        check(unsafe { call!(self, GetStereoPosition(&mut position)) })?;
        Ok(position)
    }
}
