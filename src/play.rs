use std::ffi::c_void;
use std::time::Duration;

use bitflags::bitflags;
use sles::*;

use crate::interface::{call, Itf};
use crate::units::{from_millis, to_millis};
use crate::{check, Error, Result};

/// Playback control of an audio player (`SLPlayItf`).
pub type Play = Itf<SLPlayItf_>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayState {
    Stopped,
    Paused,
    Playing,
}

impl PlayState {
    pub fn from_raw(state: SLuint32) -> Option<PlayState> {
        match state {
            SL_PLAYSTATE_STOPPED => Some(PlayState::Stopped),
            SL_PLAYSTATE_PAUSED => Some(PlayState::Paused),
            SL_PLAYSTATE_PLAYING => Some(PlayState::Playing),
            _ => None,
        }
    }

    pub fn to_raw(self) -> SLuint32 {
        match self {
            PlayState::Stopped => SL_PLAYSTATE_STOPPED,
            PlayState::Paused => SL_PLAYSTATE_PAUSED,
            PlayState::Playing => SL_PLAYSTATE_PLAYING,
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct PlayEvents: SLuint32 {
        const HEAD_AT_END = SL_PLAYEVENT_HEADATEND;
        const HEAD_AT_MARKER = SL_PLAYEVENT_HEADATMARKER;
        const HEAD_AT_NEW_POS = SL_PLAYEVENT_HEADATNEWPOS;
        const HEAD_MOVING = SL_PLAYEVENT_HEADMOVING;
        const HEAD_STALLED = SL_PLAYEVENT_HEADSTALLED;
        const DURATION_UPDATED = SL_PLAYEVENT_DURATIONUPDATED;
    }
}

impl Itf<SLPlayItf_> {
    pub fn set_state(&self, state: PlayState) -> Result<()> {
        check(unsafe { call!(self, SetPlayState(state.to_raw())) })
    }

    pub fn state(&self) -> Result<PlayState> {
        let mut state = 0;
        check(unsafe { call!(self, GetPlayState(&mut state)) })?;

        PlayState::from_raw(state).ok_or(Error::UnexpectedValue(state, "play state"))
    }

    /// `None` while the duration is unknown.
    pub fn duration(&self) -> Result<Option<Duration>> {
        let mut ms = 0;
        check(unsafe { call!(self, GetDuration(&mut ms)) })?;
        Ok(from_millis(ms))
    }

    pub fn position(&self) -> Result<Duration> {
        let mut ms = 0;
        check(unsafe { call!(self, GetPosition(&mut ms)) })?;
        Ok(Duration::from_millis(ms as u64))
    }

    pub fn set_marker(&self, position: Duration) -> Result<()> {
        let ms = to_millis(position)?;
        check(unsafe { call!(self, SetMarkerPosition(ms)) })
    }

    pub fn clear_marker(&self) -> Result<()> {
        check(unsafe { call!(self, ClearMarkerPosition()) })
    }

    /// `None` if no marker is set.
    pub fn marker(&self) -> Result<Option<Duration>> {
        let mut ms = SL_TIME_UNKNOWN;
        match check(unsafe { call!(self, GetMarkerPosition(&mut ms)) }) {
            Ok(()) => Ok(from_millis(ms)),
            Err(Error::PreconditionsViolated) => Ok(None),
            Err(error) => Err(error),
        }
    }

    pub fn set_position_update_period(&self, period: Duration) -> Result<()> {
        let ms = to_millis(period)?;
        check(unsafe { call!(self, SetPositionUpdatePeriod(ms)) })
    }

    pub fn position_update_period(&self) -> Result<Duration> {
        let mut ms = 0;
        check(unsafe { call!(self, GetPositionUpdatePeriod(&mut ms)) })?;
        Ok(Duration::from_millis(ms as u64))
    }

    pub fn set_event_mask(&self, events: PlayEvents) -> Result<()> {
        check(unsafe { call!(self, SetCallbackEventsMask(events.bits())) })
    }

    /// Bits this crate does not know are dropped.
    pub fn event_mask(&self) -> Result<PlayEvents> {
        let mut events = 0;
        check(unsafe { call!(self, GetCallbackEventsMask(&mut events)) })?;
        Ok(PlayEvents::from_bits_truncate(events))
    }

    /// # Safety
    ///
    /// `context` is passed to `callback` as is and must stay valid until the
    /// callback is replaced or the player is destroyed. The callback runs on
    /// an implementation thread.
    pub unsafe fn register_callback(
        &self,
        callback: slPlayCallback,
        context: *mut c_void,
    ) -> Result<()> {
        check(call!(self, RegisterCallback(callback, context)))
    }
}
