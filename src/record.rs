use std::ffi::c_void;
use std::time::Duration;

use bitflags::bitflags;
use sles::*;

use crate::interface::{call, Itf};
use crate::units::{from_millis, to_millis};
use crate::{check, Error, Result};

/// Recording control of an audio recorder (`SLRecordItf`).
pub type Record = Itf<SLRecordItf_>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecordState {
    Stopped,
    Paused,
    Recording,
}

impl RecordState {
    pub fn from_raw(state: SLuint32) -> Option<RecordState> {
        match state {
            SL_RECORDSTATE_STOPPED => Some(RecordState::Stopped),
            SL_RECORDSTATE_PAUSED => Some(RecordState::Paused),
            SL_RECORDSTATE_RECORDING => Some(RecordState::Recording),
            _ => None,
        }
    }

    pub fn to_raw(self) -> SLuint32 {
        match self {
            RecordState::Stopped => SL_RECORDSTATE_STOPPED,
            RecordState::Paused => SL_RECORDSTATE_PAUSED,
            RecordState::Recording => SL_RECORDSTATE_RECORDING,
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct RecordEvents: SLuint32 {
        const HEAD_AT_LIMIT = SL_RECORDEVENT_HEADATLIMIT;
        const HEAD_AT_MARKER = SL_RECORDEVENT_HEADATMARKER;
        const HEAD_AT_NEW_POS = SL_RECORDEVENT_HEADATNEWPOS;
        const HEAD_MOVING = SL_RECORDEVENT_HEADMOVING;
        const HEAD_STALLED = SL_RECORDEVENT_HEADSTALLED;
        const BUFFER_FULL = SL_RECORDEVENT_BUFFER_FULL;
        const BUFFER_QUEUE_STARVED = SL_RECORDEVENT_BUFFERQUEUE_STARVED;
    }
}

impl Itf<SLRecordItf_> {
    pub fn set_state(&self, state: RecordState) -> Result<()> {
        check(unsafe { call!(self, SetRecordState(state.to_raw())) })
    }

    pub fn state(&self) -> Result<RecordState> {
        let mut state = 0;
        check(unsafe { call!(self, GetRecordState(&mut state)) })?;

        RecordState::from_raw(state).ok_or(Error::UnexpectedValue(state, "record state"))
    }

    /// Recording stops once `limit` has been captured.
    pub fn set_duration_limit(&self, limit: Duration) -> Result<()> {
        let ms = to_millis(limit)?;
        check(unsafe { call!(self, SetDurationLimit(ms)) })
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

    pub fn set_event_mask(&self, events: RecordEvents) -> Result<()> {
        check(unsafe { call!(self, SetCallbackEventsMask(events.bits())) })
    }

    pub fn event_mask(&self) -> Result<RecordEvents> {
        let mut events = 0;
        check(unsafe { call!(self, GetCallbackEventsMask(&mut events)) })?;
        Ok(RecordEvents::from_bits_truncate(events))
    }

    /// # Safety
    ///
    /// `context` is passed to `callback` as is and must stay valid until the
    /// callback is replaced or the recorder is destroyed.
    pub unsafe fn register_callback(
        &self,
        callback: slRecordCallback,
        context: *mut c_void,
    ) -> Result<()> {
        check(call!(self, RegisterCallback(callback, context)))
    }
}
