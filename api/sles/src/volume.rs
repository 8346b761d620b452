use crate::types::*;

pub type SLVolumeItf = *const *const SLVolumeItf_;

#[repr(C)]
pub struct SLVolumeItf_ {
    pub SetVolumeLevel:
        Option<unsafe extern "C" fn(self_: SLVolumeItf, level: SLmillibel) -> SLresult>,
    pub GetVolumeLevel:
        Option<unsafe extern "C" fn(self_: SLVolumeItf, pLevel: *mut SLmillibel) -> SLresult>,
    pub GetMaxVolumeLevel:
        Option<unsafe extern "C" fn(self_: SLVolumeItf, pMaxLevel: *mut SLmillibel) -> SLresult>,
    pub SetMute: Option<unsafe extern "C" fn(self_: SLVolumeItf, mute: SLboolean) -> SLresult>,
    pub GetMute:
        Option<unsafe extern "C" fn(self_: SLVolumeItf, pMute: *mut SLboolean) -> SLresult>,
    pub EnableStereoPosition:
        Option<unsafe extern "C" fn(self_: SLVolumeItf, enable: SLboolean) -> SLresult>,
    pub IsEnabledStereoPosition:
        Option<unsafe extern "C" fn(self_: SLVolumeItf, pEnable: *mut SLboolean) -> SLresult>,
    /// -1000 is hard left, 1000 hard right.
    pub SetStereoPosition:
        Option<unsafe extern "C" fn(self_: SLVolumeItf, stereoPosition: SLpermille) -> SLresult>,
    pub GetStereoPosition: Option<
        unsafe extern "C" fn(self_: SLVolumeItf, pStereoPosition: *mut SLpermille) -> SLresult,
    >,
}

pub type SLDeviceVolumeItf = *const *const SLDeviceVolumeItf_;

#[repr(C)]
pub struct SLDeviceVolumeItf_ {
    pub GetVolumeScale: Option<
        unsafe extern "C" fn(
            self_: SLDeviceVolumeItf,
            deviceID: SLuint32,
            pMinValue: *mut SLint32,
            pMaxValue: *mut SLint32,
            pIsMillibelScale: *mut SLboolean,
        ) -> SLresult,
    >,
    pub SetVolume: Option<
        unsafe extern "C" fn(
            self_: SLDeviceVolumeItf,
            deviceID: SLuint32,
            volume: SLint32,
        ) -> SLresult,
    >,
    pub GetVolume: Option<
        unsafe extern "C" fn(
            self_: SLDeviceVolumeItf,
            deviceID: SLuint32,
            pVolume: *mut SLint32,
        ) -> SLresult,
    >,
}

pub type SLMuteSoloItf = *const *const SLMuteSoloItf_;

#[repr(C)]
pub struct SLMuteSoloItf_ {
    pub SetChannelMute: Option<
        unsafe extern "C" fn(self_: SLMuteSoloItf, chan: SLuint8, mute: SLboolean) -> SLresult,
    >,
    pub GetChannelMute: Option<
        unsafe extern "C" fn(
            self_: SLMuteSoloItf,
            chan: SLuint8,
            pMute: *mut SLboolean,
        ) -> SLresult,
    >,
    pub SetChannelSolo: Option<
        unsafe extern "C" fn(self_: SLMuteSoloItf, chan: SLuint8, solo: SLboolean) -> SLresult,
    >,
    pub GetChannelSolo: Option<
        unsafe extern "C" fn(
            self_: SLMuteSoloItf,
            chan: SLuint8,
            pSolo: *mut SLboolean,
        ) -> SLresult,
    >,
    pub GetNumChannels:
        Option<unsafe extern "C" fn(self_: SLMuteSoloItf, pNumChannels: *mut SLuint8) -> SLresult>,
}
