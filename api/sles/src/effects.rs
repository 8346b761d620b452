use std::ffi::c_void;

use crate::types::*;

pub const SL_EQUALIZER_UNDEFINED: SLuint16 = 0xFFFF;

pub type SLEqualizerItf = *const *const SLEqualizerItf_;

#[repr(C)]
pub struct SLEqualizerItf_ {
    pub SetEnabled:
        Option<unsafe extern "C" fn(self_: SLEqualizerItf, enabled: SLboolean) -> SLresult>,
    pub IsEnabled:
        Option<unsafe extern "C" fn(self_: SLEqualizerItf, pEnabled: *mut SLboolean) -> SLresult>,
    pub GetNumberOfBands:
        Option<unsafe extern "C" fn(self_: SLEqualizerItf, pAmount: *mut SLuint16) -> SLresult>,
    pub GetBandLevelRange: Option<
        unsafe extern "C" fn(
            self_: SLEqualizerItf,
            pMin: *mut SLmillibel,
            pMax: *mut SLmillibel,
        ) -> SLresult,
    >,
    pub SetBandLevel: Option<
        unsafe extern "C" fn(self_: SLEqualizerItf, band: SLuint16, level: SLmillibel) -> SLresult,
    >,
    pub GetBandLevel: Option<
        unsafe extern "C" fn(
            self_: SLEqualizerItf,
            band: SLuint16,
            pLevel: *mut SLmillibel,
        ) -> SLresult,
    >,
    pub GetCenterFreq: Option<
        unsafe extern "C" fn(
            self_: SLEqualizerItf,
            band: SLuint16,
            pCenter: *mut SLmilliHertz,
        ) -> SLresult,
    >,
    pub GetBandFreqRange: Option<
        unsafe extern "C" fn(
            self_: SLEqualizerItf,
            band: SLuint16,
            pMin: *mut SLmilliHertz,
            pMax: *mut SLmilliHertz,
        ) -> SLresult,
    >,
    pub GetBand: Option<
        unsafe extern "C" fn(
            self_: SLEqualizerItf,
            frequency: SLmilliHertz,
            pBand: *mut SLuint16,
        ) -> SLresult,
    >,
    pub GetCurrentPreset:
        Option<unsafe extern "C" fn(self_: SLEqualizerItf, pPreset: *mut SLuint16) -> SLresult>,
    pub UsePreset: Option<unsafe extern "C" fn(self_: SLEqualizerItf, index: SLuint16) -> SLresult>,
    pub GetNumberOfPresets:
        Option<unsafe extern "C" fn(self_: SLEqualizerItf, pNumPresets: *mut SLuint16) -> SLresult>,
    pub GetPresetName: Option<
        unsafe extern "C" fn(
            self_: SLEqualizerItf,
            index: SLuint16,
            pSize: *mut SLuint16,
            pName: *mut SLchar,
        ) -> SLresult,
    >,
}

pub const SL_REVERBPRESET_NONE: SLuint16 = 0x0000;
pub const SL_REVERBPRESET_SMALLROOM: SLuint16 = 0x0001;
pub const SL_REVERBPRESET_MEDIUMROOM: SLuint16 = 0x0002;
pub const SL_REVERBPRESET_LARGEROOM: SLuint16 = 0x0003;
pub const SL_REVERBPRESET_MEDIUMHALL: SLuint16 = 0x0004;
pub const SL_REVERBPRESET_LARGEHALL: SLuint16 = 0x0005;
pub const SL_REVERBPRESET_PLATE: SLuint16 = 0x0006;

pub type SLPresetReverbItf = *const *const SLPresetReverbItf_;

#[repr(C)]
pub struct SLPresetReverbItf_ {
    pub SetPreset:
        Option<unsafe extern "C" fn(self_: SLPresetReverbItf, preset: SLuint16) -> SLresult>,
    pub GetPreset:
        Option<unsafe extern "C" fn(self_: SLPresetReverbItf, pPreset: *mut SLuint16) -> SLresult>,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SLEnvironmentalReverbSettings {
    pub roomLevel: SLmillibel,
    pub roomHFLevel: SLmillibel,
    pub decayTime: SLmillisecond,
    pub decayHFRatio: SLpermille,
    pub reflectionsLevel: SLmillibel,
    pub reflectionsDelay: SLmillisecond,
    pub reverbLevel: SLmillibel,
    pub reverbDelay: SLmillisecond,
    pub diffusion: SLpermille,
    pub density: SLpermille,
}

/// Positional initializer in the field order of the I3DL2 preset macros.
#[allow(clippy::too_many_arguments)]
const fn i3dl2(
    room_level: SLmillibel,
    room_hf_level: SLmillibel,
    decay_time: SLmillisecond,
    decay_hf_ratio: SLpermille,
    reflections_level: SLmillibel,
    reflections_delay: SLmillisecond,
    reverb_level: SLmillibel,
    reverb_delay: SLmillisecond,
    diffusion: SLpermille,
    density: SLpermille,
) -> SLEnvironmentalReverbSettings {
    SLEnvironmentalReverbSettings {
        roomLevel: room_level,
        roomHFLevel: room_hf_level,
        decayTime: decay_time,
        decayHFRatio: decay_hf_ratio,
        reflectionsLevel: reflections_level,
        reflectionsDelay: reflections_delay,
        reverbLevel: reverb_level,
        reverbDelay: reverb_delay,
        diffusion,
        density,
    }
}

#[rustfmt::skip]
mod i3dl2_presets {
    use super::*;

    pub const SL_I3DL2_ENVIRONMENT_PRESET_DEFAULT: SLEnvironmentalReverbSettings =
        i3dl2(SL_MILLIBEL_MIN, 0, 1000, 500, SL_MILLIBEL_MIN, 20, SL_MILLIBEL_MIN, 40, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_GENERIC: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -100, 1490, 830, -2602, 7, 200, 11, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_PADDEDCELL: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -6000, 170, 100, -1204, 1, 207, 2, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_ROOM: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -454, 400, 830, -1646, 2, 53, 3, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_BATHROOM: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -1200, 1490, 540, -370, 7, 1030, 11, 1000, 600);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_LIVINGROOM: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -6000, 500, 100, -1376, 3, -1104, 4, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_STONEROOM: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -300, 2310, 640, -711, 12, 83, 17, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_AUDITORIUM: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -476, 4320, 590, -789, 20, -289, 30, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_CONCERTHALL: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -500, 3920, 700, -1230, 20, -2, 29, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_CAVE: SLEnvironmentalReverbSettings =
        i3dl2(-1000, 0, 2910, 1300, -602, 15, -302, 22, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_ARENA: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -698, 7240, 330, -1166, 20, 16, 30, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_HANGAR: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -1000, 10050, 230, -602, 20, 198, 30, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_CARPETEDHALLWAY: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -4000, 300, 100, -1831, 2, -1630, 30, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_HALLWAY: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -300, 1490, 590, -1219, 7, 441, 11, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_STONECORRIDOR: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -237, 2700, 790, -1214, 13, 395, 20, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_ALLEY: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -270, 1490, 860, -1204, 7, -4, 11, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_FOREST: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -3300, 1490, 540, -2560, 162, -613, 88, 790, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_CITY: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -800, 1490, 670, -2273, 7, -2217, 11, 500, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_MOUNTAINS: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -2500, 1490, 210, -2780, 300, -2014, 100, 270, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_QUARRY: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -1000, 1490, 830, SL_MILLIBEL_MIN, 61, 500, 25, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_PLAIN: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -2000, 1490, 500, -2466, 179, -2514, 100, 210, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_PARKINGLOT: SLEnvironmentalReverbSettings =
        i3dl2(-1000, 0, 1650, 1500, -1363, 8, -1153, 12, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_SEWERPIPE: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -1000, 2810, 140, 429, 14, 648, 21, 800, 600);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_UNDERWATER: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -4000, 1490, 100, -449, 7, 1700, 11, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_SMALLROOM: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -600, 1100, 830, -400, 5, 500, 10, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_MEDIUMROOM: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -600, 1300, 830, -1000, 20, -200, 20, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_LARGEROOM: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -600, 1500, 830, -1600, 5, -1000, 40, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_MEDIUMHALL: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -600, 1800, 700, -1300, 15, -800, 30, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_LARGEHALL: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -600, 1800, 700, -2000, 30, -1400, 60, 1000, 1000);
    pub const SL_I3DL2_ENVIRONMENT_PRESET_PLATE: SLEnvironmentalReverbSettings =
        i3dl2(-1000, -200, 1300, 900, 0, 2, 0, 10, 1000, 750);
}

pub use i3dl2_presets::*;

pub type SLEnvironmentalReverbItf = *const *const SLEnvironmentalReverbItf_;

#[repr(C)]
pub struct SLEnvironmentalReverbItf_ {
    pub SetRoomLevel:
        Option<unsafe extern "C" fn(self_: SLEnvironmentalReverbItf, room: SLmillibel) -> SLresult>,
    pub GetRoomLevel: Option<
        unsafe extern "C" fn(self_: SLEnvironmentalReverbItf, pRoom: *mut SLmillibel) -> SLresult,
    >,
    pub SetRoomHFLevel: Option<
        unsafe extern "C" fn(self_: SLEnvironmentalReverbItf, roomHF: SLmillibel) -> SLresult,
    >,
    pub GetRoomHFLevel: Option<
        unsafe extern "C" fn(self_: SLEnvironmentalReverbItf, pRoomHF: *mut SLmillibel) -> SLresult,
    >,
    pub SetDecayTime: Option<
        unsafe extern "C" fn(self_: SLEnvironmentalReverbItf, decayTime: SLmillisecond) -> SLresult,
    >,
    pub GetDecayTime: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pDecayTime: *mut SLmillisecond,
        ) -> SLresult,
    >,
    pub SetDecayHFRatio: Option<
        unsafe extern "C" fn(self_: SLEnvironmentalReverbItf, decayHFRatio: SLpermille) -> SLresult,
    >,
    pub GetDecayHFRatio: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pDecayHFRatio: *mut SLpermille,
        ) -> SLresult,
    >,
    pub SetReflectionsLevel: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            reflectionsLevel: SLmillibel,
        ) -> SLresult,
    >,
    pub GetReflectionsLevel: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pReflectionsLevel: *mut SLmillibel,
        ) -> SLresult,
    >,
    pub SetReflectionsDelay: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            reflectionsDelay: SLmillisecond,
        ) -> SLresult,
    >,
    pub GetReflectionsDelay: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pReflectionsDelay: *mut SLmillisecond,
        ) -> SLresult,
    >,
    pub SetReverbLevel: Option<
        unsafe extern "C" fn(self_: SLEnvironmentalReverbItf, reverbLevel: SLmillibel) -> SLresult,
    >,
    pub GetReverbLevel: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pReverbLevel: *mut SLmillibel,
        ) -> SLresult,
    >,
    pub SetReverbDelay: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            reverbDelay: SLmillisecond,
        ) -> SLresult,
    >,
    pub GetReverbDelay: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pReverbDelay: *mut SLmillisecond,
        ) -> SLresult,
    >,
    pub SetDiffusion: Option<
        unsafe extern "C" fn(self_: SLEnvironmentalReverbItf, diffusion: SLpermille) -> SLresult,
    >,
    pub GetDiffusion: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pDiffusion: *mut SLpermille,
        ) -> SLresult,
    >,
    pub SetDensity: Option<
        unsafe extern "C" fn(self_: SLEnvironmentalReverbItf, density: SLpermille) -> SLresult,
    >,
    pub GetDensity: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pDensity: *mut SLpermille,
        ) -> SLresult,
    >,
    pub SetEnvironmentalReverbProperties: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pProperties: *const SLEnvironmentalReverbSettings,
        ) -> SLresult,
    >,
    pub GetEnvironmentalReverbProperties: Option<
        unsafe extern "C" fn(
            self_: SLEnvironmentalReverbItf,
            pProperties: *mut SLEnvironmentalReverbSettings,
        ) -> SLresult,
    >,
}

pub type SLEffectSendItf = *const *const SLEffectSendItf_;

/// `pAuxEffect` is the effect interface (e.g. an `SLEnvironmentalReverbItf`)
/// of an output mix.
#[repr(C)]
pub struct SLEffectSendItf_ {
    pub EnableEffectSend: Option<
        unsafe extern "C" fn(
            self_: SLEffectSendItf,
            pAuxEffect: *const c_void,
            enable: SLboolean,
            initialLevel: SLmillibel,
        ) -> SLresult,
    >,
    pub IsEnabled: Option<
        unsafe extern "C" fn(
            self_: SLEffectSendItf,
            pAuxEffect: *const c_void,
            pEnable: *mut SLboolean,
        ) -> SLresult,
    >,
    pub SetDirectLevel:
        Option<unsafe extern "C" fn(self_: SLEffectSendItf, directLevel: SLmillibel) -> SLresult>,
    pub GetDirectLevel: Option<
        unsafe extern "C" fn(self_: SLEffectSendItf, pDirectLevel: *mut SLmillibel) -> SLresult,
    >,
    pub SetSendLevel: Option<
        unsafe extern "C" fn(
            self_: SLEffectSendItf,
            pAuxEffect: *const c_void,
            sendLevel: SLmillibel,
        ) -> SLresult,
    >,
    pub GetSendLevel: Option<
        unsafe extern "C" fn(
            self_: SLEffectSendItf,
            pAuxEffect: *const c_void,
            pSendLevel: *mut SLmillibel,
        ) -> SLresult,
    >,
}

pub type SLBassBoostItf = *const *const SLBassBoostItf_;

#[repr(C)]
pub struct SLBassBoostItf_ {
    pub SetEnabled:
        Option<unsafe extern "C" fn(self_: SLBassBoostItf, enabled: SLboolean) -> SLresult>,
    pub IsEnabled:
        Option<unsafe extern "C" fn(self_: SLBassBoostItf, pEnabled: *mut SLboolean) -> SLresult>,
    pub SetStrength:
        Option<unsafe extern "C" fn(self_: SLBassBoostItf, strength: SLpermille) -> SLresult>,
    pub GetRoundedStrength:
        Option<unsafe extern "C" fn(self_: SLBassBoostItf, pStrength: *mut SLpermille) -> SLresult>,
    pub IsStrengthSupported:
        Option<unsafe extern "C" fn(self_: SLBassBoostItf, pSupported: *mut SLboolean) -> SLresult>,
}

pub type SLPitchItf = *const *const SLPitchItf_;

#[repr(C)]
pub struct SLPitchItf_ {
    pub SetPitch: Option<unsafe extern "C" fn(self_: SLPitchItf, pitch: SLpermille) -> SLresult>,
    pub GetPitch:
        Option<unsafe extern "C" fn(self_: SLPitchItf, pPitch: *mut SLpermille) -> SLresult>,
    pub GetPitchCapabilities: Option<
        unsafe extern "C" fn(
            self_: SLPitchItf,
            pMinPitch: *mut SLpermille,
            pMaxPitch: *mut SLpermille,
        ) -> SLresult,
    >,
}

pub type SLRatePitchItf = *const *const SLRatePitchItf_;

/// Rate changes on this interface also change pitch.
#[repr(C)]
pub struct SLRatePitchItf_ {
    pub SetRate: Option<unsafe extern "C" fn(self_: SLRatePitchItf, rate: SLpermille) -> SLresult>,
    pub GetRate:
        Option<unsafe extern "C" fn(self_: SLRatePitchItf, pRate: *mut SLpermille) -> SLresult>,
    pub GetRatePitchCapabilities: Option<
        unsafe extern "C" fn(
            self_: SLRatePitchItf,
            pMinRate: *mut SLpermille,
            pMaxRate: *mut SLpermille,
        ) -> SLresult,
    >,
}

pub type SLVirtualizerItf = *const *const SLVirtualizerItf_;

#[repr(C)]
pub struct SLVirtualizerItf_ {
    pub SetEnabled:
        Option<unsafe extern "C" fn(self_: SLVirtualizerItf, enabled: SLboolean) -> SLresult>,
    pub IsEnabled:
        Option<unsafe extern "C" fn(self_: SLVirtualizerItf, pEnabled: *mut SLboolean) -> SLresult>,
    pub SetStrength:
        Option<unsafe extern "C" fn(self_: SLVirtualizerItf, strength: SLpermille) -> SLresult>,
    pub GetRoundedStrength: Option<
        unsafe extern "C" fn(self_: SLVirtualizerItf, pStrength: *mut SLpermille) -> SLresult,
    >,
    pub IsStrengthSupported: Option<
        unsafe extern "C" fn(self_: SLVirtualizerItf, pSupported: *mut SLboolean) -> SLresult,
    >,
}

pub type SLVisualizationItf = *const *const SLVisualizationItf_;

/// `waveform` and `fft` are C arrays; their length is implementation defined.
pub type slVisualizationCallback = Option<
    unsafe extern "C" fn(
        pContext: *mut c_void,
        waveform: *const SLuint8,
        fft: *const SLuint8,
        samplerate: SLmilliHertz,
    ),
>;

#[repr(C)]
pub struct SLVisualizationItf_ {
    pub RegisterVisualizationCallback: Option<
        unsafe extern "C" fn(
            self_: SLVisualizationItf,
            callback: slVisualizationCallback,
            pContext: *mut c_void,
            rate: SLmilliHertz,
        ) -> SLresult,
    >,
    pub GetMaxRate: Option<
        unsafe extern "C" fn(self_: SLVisualizationItf, pRate: *mut SLmilliHertz) -> SLresult,
    >,
}
