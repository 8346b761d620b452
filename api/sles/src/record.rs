use std::ffi::c_void;

use crate::types::*;

pub const SL_RECORDSTATE_STOPPED: SLuint32 = 0x00000001;
pub const SL_RECORDSTATE_PAUSED: SLuint32 = 0x00000002;
pub const SL_RECORDSTATE_RECORDING: SLuint32 = 0x00000003;

pub const SL_RECORDEVENT_HEADATLIMIT: SLuint32 = 0x00000001;
pub const SL_RECORDEVENT_HEADATMARKER: SLuint32 = 0x00000002;
pub const SL_RECORDEVENT_HEADATNEWPOS: SLuint32 = 0x00000004;
pub const SL_RECORDEVENT_HEADMOVING: SLuint32 = 0x00000008;
pub const SL_RECORDEVENT_HEADSTALLED: SLuint32 = 0x00000010;
#[deprecated(note = "use SL_RECORDEVENT_BUFFER_FULL")]
pub const SL_RECORDEVENT_BUFFER_INSUFFICIENT: SLuint32 = 0x00000020;
pub const SL_RECORDEVENT_BUFFER_FULL: SLuint32 = 0x00000020;
pub const SL_RECORDEVENT_BUFFERQUEUE_STARVED: SLuint32 = 0x00000040;

pub type SLRecordItf = *const *const SLRecordItf_;

pub type slRecordCallback =
    Option<unsafe extern "C" fn(caller: SLRecordItf, pContext: *mut c_void, event: SLuint32)>;

#[repr(C)]
pub struct SLRecordItf_ {
    pub SetRecordState:
        Option<unsafe extern "C" fn(self_: SLRecordItf, state: SLuint32) -> SLresult>,
    pub GetRecordState:
        Option<unsafe extern "C" fn(self_: SLRecordItf, pState: *mut SLuint32) -> SLresult>,
    pub SetDurationLimit:
        Option<unsafe extern "C" fn(self_: SLRecordItf, msec: SLmillisecond) -> SLresult>,
    pub GetPosition:
        Option<unsafe extern "C" fn(self_: SLRecordItf, pMsec: *mut SLmillisecond) -> SLresult>,
    pub RegisterCallback: Option<
        unsafe extern "C" fn(
            self_: SLRecordItf,
            callback: slRecordCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub SetCallbackEventsMask:
        Option<unsafe extern "C" fn(self_: SLRecordItf, eventFlags: SLuint32) -> SLresult>,
    pub GetCallbackEventsMask:
        Option<unsafe extern "C" fn(self_: SLRecordItf, pEventFlags: *mut SLuint32) -> SLresult>,
    pub SetMarkerPosition:
        Option<unsafe extern "C" fn(self_: SLRecordItf, mSec: SLmillisecond) -> SLresult>,
    pub ClearMarkerPosition: Option<unsafe extern "C" fn(self_: SLRecordItf) -> SLresult>,
    pub GetMarkerPosition:
        Option<unsafe extern "C" fn(self_: SLRecordItf, pMsec: *mut SLmillisecond) -> SLresult>,
    pub SetPositionUpdatePeriod:
        Option<unsafe extern "C" fn(self_: SLRecordItf, mSec: SLmillisecond) -> SLresult>,
    pub GetPositionUpdatePeriod:
        Option<unsafe extern "C" fn(self_: SLRecordItf, pMsec: *mut SLmillisecond) -> SLresult>,
}
