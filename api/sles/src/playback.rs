use std::ffi::c_void;

use crate::types::*;

pub type SLOutputMixItf = *const *const SLOutputMixItf_;

pub type slMixDeviceChangeCallback =
    Option<unsafe extern "C" fn(caller: SLOutputMixItf, pContext: *mut c_void)>;

#[repr(C)]
pub struct SLOutputMixItf_ {
    pub GetDestinationOutputDeviceIDs: Option<
        unsafe extern "C" fn(
            self_: SLOutputMixItf,
            pNumDevices: *mut SLint32,
            pDeviceIDs: *mut SLuint32,
        ) -> SLresult,
    >,
    pub RegisterDeviceChangeCallback: Option<
        unsafe extern "C" fn(
            self_: SLOutputMixItf,
            callback: slMixDeviceChangeCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub ReRoute: Option<
        unsafe extern "C" fn(
            self_: SLOutputMixItf,
            numOutputDevices: SLint32,
            pOutputDeviceIDs: *mut SLuint32,
        ) -> SLresult,
    >,
}

pub const SL_PLAYSTATE_STOPPED: SLuint32 = 0x00000001;
pub const SL_PLAYSTATE_PAUSED: SLuint32 = 0x00000002;
pub const SL_PLAYSTATE_PLAYING: SLuint32 = 0x00000003;

pub const SL_PLAYEVENT_HEADATEND: SLuint32 = 0x00000001;
pub const SL_PLAYEVENT_HEADATMARKER: SLuint32 = 0x00000002;
pub const SL_PLAYEVENT_HEADATNEWPOS: SLuint32 = 0x00000004;
pub const SL_PLAYEVENT_HEADMOVING: SLuint32 = 0x00000008;
pub const SL_PLAYEVENT_HEADSTALLED: SLuint32 = 0x00000010;
pub const SL_PLAYEVENT_DURATIONUPDATED: SLuint32 = 0x00000020;

pub const SL_TIME_UNKNOWN: SLmillisecond = 0xFFFFFFFF;

pub type SLPlayItf = *const *const SLPlayItf_;

pub type slPlayCallback =
    Option<unsafe extern "C" fn(caller: SLPlayItf, pContext: *mut c_void, event: SLuint32)>;

#[repr(C)]
pub struct SLPlayItf_ {
    pub SetPlayState: Option<unsafe extern "C" fn(self_: SLPlayItf, state: SLuint32) -> SLresult>,
    pub GetPlayState:
        Option<unsafe extern "C" fn(self_: SLPlayItf, pState: *mut SLuint32) -> SLresult>,
    pub GetDuration:
        Option<unsafe extern "C" fn(self_: SLPlayItf, pMsec: *mut SLmillisecond) -> SLresult>,
    pub GetPosition:
        Option<unsafe extern "C" fn(self_: SLPlayItf, pMsec: *mut SLmillisecond) -> SLresult>,
    pub RegisterCallback: Option<
        unsafe extern "C" fn(
            self_: SLPlayItf,
            callback: slPlayCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub SetCallbackEventsMask:
        Option<unsafe extern "C" fn(self_: SLPlayItf, eventFlags: SLuint32) -> SLresult>,
    pub GetCallbackEventsMask:
        Option<unsafe extern "C" fn(self_: SLPlayItf, pEventFlags: *mut SLuint32) -> SLresult>,
    pub SetMarkerPosition:
        Option<unsafe extern "C" fn(self_: SLPlayItf, mSec: SLmillisecond) -> SLresult>,
    pub ClearMarkerPosition: Option<unsafe extern "C" fn(self_: SLPlayItf) -> SLresult>,
    pub GetMarkerPosition:
        Option<unsafe extern "C" fn(self_: SLPlayItf, pMsec: *mut SLmillisecond) -> SLresult>,
    pub SetPositionUpdatePeriod:
        Option<unsafe extern "C" fn(self_: SLPlayItf, mSec: SLmillisecond) -> SLresult>,
    pub GetPositionUpdatePeriod:
        Option<unsafe extern "C" fn(self_: SLPlayItf, pMsec: *mut SLmillisecond) -> SLresult>,
}

pub const SL_PREFETCHEVENT_STATUSCHANGE: SLuint32 = 0x00000001;
pub const SL_PREFETCHEVENT_FILLLEVELCHANGE: SLuint32 = 0x00000002;
pub const SL_PREFETCHEVENT_ERROR: SLuint32 = 0x00000003;
pub const SL_PREFETCHEVENT_ERROR_UNRECOVERABLE: SLuint32 = 0x00000004;

pub const SL_PREFETCHSTATUS_UNDERFLOW: SLuint32 = 0x00000001;
pub const SL_PREFETCHSTATUS_SUFFICIENTDATA: SLuint32 = 0x00000002;
pub const SL_PREFETCHSTATUS_OVERFLOW: SLuint32 = 0x00000003;

pub type SLPrefetchStatusItf = *const *const SLPrefetchStatusItf_;

pub type slPrefetchCallback = Option<
    unsafe extern "C" fn(caller: SLPrefetchStatusItf, pContext: *mut c_void, event: SLuint32),
>;

#[repr(C)]
pub struct SLPrefetchStatusItf_ {
    pub GetPrefetchStatus: Option<
        unsafe extern "C" fn(self_: SLPrefetchStatusItf, pStatus: *mut SLuint32) -> SLresult,
    >,
    pub GetFillLevel: Option<
        unsafe extern "C" fn(self_: SLPrefetchStatusItf, pLevel: *mut SLpermille) -> SLresult,
    >,
    pub RegisterCallback: Option<
        unsafe extern "C" fn(
            self_: SLPrefetchStatusItf,
            callback: slPrefetchCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub SetCallbackEventsMask:
        Option<unsafe extern "C" fn(self_: SLPrefetchStatusItf, eventFlags: SLuint32) -> SLresult>,
    pub GetCallbackEventsMask: Option<
        unsafe extern "C" fn(self_: SLPrefetchStatusItf, pEventFlags: *mut SLuint32) -> SLresult,
    >,
    pub SetFillUpdatePeriod:
        Option<unsafe extern "C" fn(self_: SLPrefetchStatusItf, period: SLpermille) -> SLresult>,
    pub GetFillUpdatePeriod: Option<
        unsafe extern "C" fn(self_: SLPrefetchStatusItf, pPeriod: *mut SLpermille) -> SLresult,
    >,
    pub GetError: Option<
        unsafe extern "C" fn(self_: SLPrefetchStatusItf, pResult: *mut SLresult) -> SLresult,
    >,
}

pub const SL_RATEPROP_RESERVED1: SLuint32 = 0x00000001;
pub const SL_RATEPROP_RESERVED2: SLuint32 = 0x00000002;
pub const SL_RATEPROP_SILENTAUDIO: SLuint32 = 0x00000100;
pub const SL_RATEPROP_STAGGEREDAUDIO: SLuint32 = 0x00000200;
pub const SL_RATEPROP_NOPITCHCORAUDIO: SLuint32 = 0x00000400;
pub const SL_RATEPROP_PITCHCORAUDIO: SLuint32 = 0x00000800;

pub type SLPlaybackRateItf = *const *const SLPlaybackRateItf_;

#[repr(C)]
pub struct SLPlaybackRateItf_ {
    pub SetRate:
        Option<unsafe extern "C" fn(self_: SLPlaybackRateItf, rate: SLpermille) -> SLresult>,
    pub GetRate:
        Option<unsafe extern "C" fn(self_: SLPlaybackRateItf, pRate: *mut SLpermille) -> SLresult>,
    pub SetPropertyConstraints:
        Option<unsafe extern "C" fn(self_: SLPlaybackRateItf, constraints: SLuint32) -> SLresult>,
    pub GetProperties: Option<
        unsafe extern "C" fn(self_: SLPlaybackRateItf, pProperties: *mut SLuint32) -> SLresult,
    >,
    pub GetCapabilitiesOfRate: Option<
        unsafe extern "C" fn(
            self_: SLPlaybackRateItf,
            rate: SLpermille,
            pCapabilities: *mut SLuint32,
        ) -> SLresult,
    >,
    pub GetRateRange: Option<
        unsafe extern "C" fn(
            self_: SLPlaybackRateItf,
            index: SLuint8,
            pMinRate: *mut SLpermille,
            pMaxRate: *mut SLpermille,
            pStepSize: *mut SLpermille,
            pCapabilities: *mut SLuint32,
        ) -> SLresult,
    >,
}

pub const SL_SEEKMODE_FAST: SLuint32 = 0x0001;
pub const SL_SEEKMODE_ACCURATE: SLuint32 = 0x0002;

pub type SLSeekItf = *const *const SLSeekItf_;

#[repr(C)]
pub struct SLSeekItf_ {
    pub SetPosition: Option<
        unsafe extern "C" fn(self_: SLSeekItf, pos: SLmillisecond, seekMode: SLuint32) -> SLresult,
    >,
    pub SetLoop: Option<
        unsafe extern "C" fn(
            self_: SLSeekItf,
            loopEnable: SLboolean,
            startPos: SLmillisecond,
            endPos: SLmillisecond,
        ) -> SLresult,
    >,
    pub GetLoop: Option<
        unsafe extern "C" fn(
            self_: SLSeekItf,
            pLoopEnabled: *mut SLboolean,
            pStartPos: *mut SLmillisecond,
            pEndPos: *mut SLmillisecond,
        ) -> SLresult,
    >,
}
