use std::ffi::c_void;

use crate::types::*;

pub const SL_MIDIMESSAGETYPE_NOTE_ON_OFF: SLuint32 = 0x00000001;
pub const SL_MIDIMESSAGETYPE_POLY_PRESSURE: SLuint32 = 0x00000002;
pub const SL_MIDIMESSAGETYPE_CONTROL_CHANGE: SLuint32 = 0x00000003;
pub const SL_MIDIMESSAGETYPE_PROGRAM_CHANGE: SLuint32 = 0x00000004;
pub const SL_MIDIMESSAGETYPE_CHANNEL_PRESSURE: SLuint32 = 0x00000005;
pub const SL_MIDIMESSAGETYPE_PITCH_BEND: SLuint32 = 0x00000006;
pub const SL_MIDIMESSAGETYPE_SYSTEM_MESSAGE: SLuint32 = 0x00000007;

pub type SLMIDIMessageItf = *const *const SLMIDIMessageItf_;

pub type slMetaEventCallback = Option<
    unsafe extern "C" fn(
        caller: SLMIDIMessageItf,
        pContext: *mut c_void,
        type_: SLuint8,
        length: SLuint32,
        pData: *const SLuint8,
        tick: SLuint32,
        track: SLuint16,
    ),
>;

pub type slMIDIMessageCallback = Option<
    unsafe extern "C" fn(
        caller: SLMIDIMessageItf,
        pContext: *mut c_void,
        statusByte: SLuint8,
        length: SLuint32,
        pData: *const SLuint8,
        tick: SLuint32,
        track: SLuint16,
    ),
>;

#[repr(C)]
pub struct SLMIDIMessageItf_ {
    pub SendMessage: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMessageItf,
            pData: *const SLuint8,
            length: SLuint32,
        ) -> SLresult,
    >,
    pub RegisterMetaEventCallback: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMessageItf,
            callback: slMetaEventCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub RegisterMIDIMessageCallback: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMessageItf,
            callback: slMIDIMessageCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub AddMIDIMessageCallbackFilter:
        Option<unsafe extern "C" fn(self_: SLMIDIMessageItf, messageType: SLuint32) -> SLresult>,
    pub ClearMIDIMessageCallbackFilter:
        Option<unsafe extern "C" fn(self_: SLMIDIMessageItf) -> SLresult>,
}

pub type SLMIDIMuteSoloItf = *const *const SLMIDIMuteSoloItf_;

#[repr(C)]
pub struct SLMIDIMuteSoloItf_ {
    pub SetChannelMute: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMuteSoloItf,
            channel: SLuint8,
            mute: SLboolean,
        ) -> SLresult,
    >,
    pub GetChannelMute: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMuteSoloItf,
            channel: SLuint8,
            pMute: *mut SLboolean,
        ) -> SLresult,
    >,
    pub SetChannelSolo: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMuteSoloItf,
            channel: SLuint8,
            solo: SLboolean,
        ) -> SLresult,
    >,
    pub GetChannelSolo: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMuteSoloItf,
            channel: SLuint8,
            pSolo: *mut SLboolean,
        ) -> SLresult,
    >,
    pub GetTrackCount:
        Option<unsafe extern "C" fn(self_: SLMIDIMuteSoloItf, pCount: *mut SLuint16) -> SLresult>,
    pub SetTrackMute: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMuteSoloItf,
            track: SLuint16,
            mute: SLboolean,
        ) -> SLresult,
    >,
    pub GetTrackMute: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMuteSoloItf,
            track: SLuint16,
            pMute: *mut SLboolean,
        ) -> SLresult,
    >,
    pub SetTrackSolo: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMuteSoloItf,
            track: SLuint16,
            solo: SLboolean,
        ) -> SLresult,
    >,
    pub GetTrackSolo: Option<
        unsafe extern "C" fn(
            self_: SLMIDIMuteSoloItf,
            track: SLuint16,
            pSolo: *mut SLboolean,
        ) -> SLresult,
    >,
}

pub type SLMIDITempoItf = *const *const SLMIDITempoItf_;

#[repr(C)]
pub struct SLMIDITempoItf_ {
    pub SetTicksPerQuarterNote:
        Option<unsafe extern "C" fn(self_: SLMIDITempoItf, tpqn: SLuint32) -> SLresult>,
    pub GetTicksPerQuarterNote:
        Option<unsafe extern "C" fn(self_: SLMIDITempoItf, pTpqn: *mut SLuint32) -> SLresult>,
    pub SetMicrosecondsPerQuarterNote:
        Option<unsafe extern "C" fn(self_: SLMIDITempoItf, uspqn: SLmicrosecond) -> SLresult>,
    pub GetMicrosecondsPerQuarterNote:
        Option<unsafe extern "C" fn(self_: SLMIDITempoItf, uspqn: *mut SLmicrosecond) -> SLresult>,
}

pub type SLMIDITimeItf = *const *const SLMIDITimeItf_;

/// Positions and durations are in ticks.
#[repr(C)]
pub struct SLMIDITimeItf_ {
    pub GetDuration:
        Option<unsafe extern "C" fn(self_: SLMIDITimeItf, pDuration: *mut SLuint32) -> SLresult>,
    pub SetPosition:
        Option<unsafe extern "C" fn(self_: SLMIDITimeItf, position: SLuint32) -> SLresult>,
    pub GetPosition:
        Option<unsafe extern "C" fn(self_: SLMIDITimeItf, pPosition: *mut SLuint32) -> SLresult>,
    pub SetLoopPoints: Option<
        unsafe extern "C" fn(
            self_: SLMIDITimeItf,
            startTick: SLuint32,
            numTicks: SLuint32,
        ) -> SLresult,
    >,
    pub GetLoopPoints: Option<
        unsafe extern "C" fn(
            self_: SLMIDITimeItf,
            pStartTick: *mut SLuint32,
            pNumTicks: *mut SLuint32,
        ) -> SLresult,
    >,
}
