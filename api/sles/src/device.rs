use std::ffi::c_void;

use crate::types::*;

pub const SL_DEFAULTDEVICEID_AUDIOINPUT: SLuint32 = 0xFFFFFFFF;
pub const SL_DEFAULTDEVICEID_AUDIOOUTPUT: SLuint32 = 0xFFFFFFFE;
pub const SL_DEFAULTDEVICEID_LED: SLuint32 = 0xFFFFFFFD;
pub const SL_DEFAULTDEVICEID_VIBRA: SLuint32 = 0xFFFFFFFC;
pub const SL_DEFAULTDEVICEID_RESERVED1: SLuint32 = 0xFFFFFFFB;

pub const SL_DEVCONNECTION_INTEGRATED: SLint16 = 0x0001;
pub const SL_DEVCONNECTION_ATTACHED_WIRED: SLint16 = 0x0100;
pub const SL_DEVCONNECTION_ATTACHED_WIRELESS: SLint16 = 0x0200;
pub const SL_DEVCONNECTION_NETWORK: SLint16 = 0x0400;

pub const SL_DEVLOCATION_HANDSET: SLint16 = 0x0001;
pub const SL_DEVLOCATION_HEADSET: SLint16 = 0x0002;
pub const SL_DEVLOCATION_CARKIT: SLint16 = 0x0003;
pub const SL_DEVLOCATION_DOCK: SLint16 = 0x0004;
pub const SL_DEVLOCATION_REMOTE: SLint16 = 0x0005;
#[deprecated(note = "use SL_DEVLOCATION_REMOTE")]
pub const SL_DEVLOCATION_RESLTE: SLint16 = 0x0005;

pub const SL_DEVSCOPE_UNKNOWN: SLint16 = 0x0001;
pub const SL_DEVSCOPE_ENVIRONMENT: SLint16 = 0x0002;
pub const SL_DEVSCOPE_USER: SLint16 = 0x0003;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLAudioInputDescriptor {
    pub pDeviceName: *mut SLchar,
    pub deviceNameLength: SLint16,
    pub deviceConnection: SLint16,
    pub deviceScope: SLint16,
    pub deviceLocation: SLint16,
    pub isForTelephony: SLboolean,
    pub minSampleRate: SLmilliHertz,
    pub maxSampleRate: SLmilliHertz,
    pub isFreqRangeContinuous: SLboolean,
    pub pSamplingRatesSupported: *mut SLmilliHertz,
    pub numOfSamplingRatesSupported: SLint16,
    pub maxChannels: SLint16,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLAudioOutputDescriptor {
    pub pDeviceName: *mut SLchar,
    pub deviceNameLength: SLint16,
    pub deviceConnection: SLint16,
    pub deviceScope: SLint16,
    pub deviceLocation: SLint16,
    pub isForTelephony: SLboolean,
    pub minSampleRate: SLmilliHertz,
    pub maxSampleRate: SLmilliHertz,
    pub isFreqRangeContinuous: SLboolean,
    pub pSamplingRatesSupported: *mut SLmilliHertz,
    pub numOfSamplingRatesSupported: SLint16,
    pub maxChannels: SLint16,
}

pub type SLAudioIODeviceCapabilitiesItf = *const *const SLAudioIODeviceCapabilitiesItf_;

pub type slAvailableAudioInputsChangedCallback = Option<
    unsafe extern "C" fn(
        caller: SLAudioIODeviceCapabilitiesItf,
        pContext: *mut c_void,
        deviceID: SLuint32,
        numInputs: SLuint32,
        isNew: SLboolean,
    ),
>;

pub type slAvailableAudioOutputsChangedCallback = Option<
    unsafe extern "C" fn(
        caller: SLAudioIODeviceCapabilitiesItf,
        pContext: *mut c_void,
        deviceID: SLuint32,
        numOutputs: SLuint32,
        isNew: SLboolean,
    ),
>;

pub type slDefaultDeviceIDMapChangedCallback = Option<
    unsafe extern "C" fn(
        caller: SLAudioIODeviceCapabilitiesItf,
        pContext: *mut c_void,
        isOutput: SLboolean,
        numDevices: SLuint32,
    ),
>;

#[repr(C)]
pub struct SLAudioIODeviceCapabilitiesItf_ {
    pub GetAvailableAudioInputs: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            pNumInputs: *mut SLuint32,
            pInputDeviceIDs: *mut SLuint32,
        ) -> SLresult,
    >,
    pub QueryAudioInputCapabilities: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            deviceId: SLuint32,
            pDescriptor: *mut SLAudioInputDescriptor,
        ) -> SLresult,
    >,
    pub RegisterAvailableAudioInputsChangedCallback: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            callback: slAvailableAudioInputsChangedCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub GetAvailableAudioOutputs: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            pNumOutputs: *mut SLuint32,
            pOutputDeviceIDs: *mut SLuint32,
        ) -> SLresult,
    >,
    pub QueryAudioOutputCapabilities: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            deviceId: SLuint32,
            pDescriptor: *mut SLAudioOutputDescriptor,
        ) -> SLresult,
    >,
    pub RegisterAvailableAudioOutputsChangedCallback: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            callback: slAvailableAudioOutputsChangedCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub RegisterDefaultDeviceIDMapChangedCallback: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            callback: slDefaultDeviceIDMapChangedCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub GetAssociatedAudioInputs: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            deviceId: SLuint32,
            pNumAudioInputs: *mut SLuint32,
            pAudioInputDeviceIDs: *mut SLuint32,
        ) -> SLresult,
    >,
    pub GetAssociatedAudioOutputs: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            deviceId: SLuint32,
            pNumAudioOutputs: *mut SLuint32,
            pAudioOutputDeviceIDs: *mut SLuint32,
        ) -> SLresult,
    >,
    pub GetDefaultAudioDevices: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            defaultDeviceID: SLuint32,
            pNumAudioDevices: *mut SLuint32,
            pAudioDeviceIDs: *mut SLuint32,
        ) -> SLresult,
    >,
    pub QuerySampleFormatsSupported: Option<
        unsafe extern "C" fn(
            self_: SLAudioIODeviceCapabilitiesItf,
            deviceId: SLuint32,
            samplingRate: SLmilliHertz,
            pSampleFormats: *mut SLint32,
            pNumOfSampleFormats: *mut SLuint32,
        ) -> SLresult,
    >,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SLLEDDescriptor {
    pub ledCount: SLuint8,
    pub primaryLED: SLuint8,
    pub colorMask: SLuint32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SLHSL {
    pub hue: SLmillidegree,
    pub saturation: SLpermille,
    pub lightness: SLpermille,
}

pub type SLLEDArrayItf = *const *const SLLEDArrayItf_;

#[repr(C)]
pub struct SLLEDArrayItf_ {
    pub ActivateLEDArray:
        Option<unsafe extern "C" fn(self_: SLLEDArrayItf, lightMask: SLuint32) -> SLresult>,
    pub IsLEDArrayActivated:
        Option<unsafe extern "C" fn(self_: SLLEDArrayItf, lightMask: *mut SLuint32) -> SLresult>,
    pub SetColor: Option<
        unsafe extern "C" fn(self_: SLLEDArrayItf, index: SLuint8, color: *const SLHSL) -> SLresult,
    >,
    pub GetColor: Option<
        unsafe extern "C" fn(self_: SLLEDArrayItf, index: SLuint8, color: *mut SLHSL) -> SLresult,
    >,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SLVibraDescriptor {
    pub supportsFrequency: SLboolean,
    pub supportsIntensity: SLboolean,
    pub minFrequency: SLmilliHertz,
    pub maxFrequency: SLmilliHertz,
}

pub type SLVibraItf = *const *const SLVibraItf_;

#[repr(C)]
pub struct SLVibraItf_ {
    pub Vibrate: Option<unsafe extern "C" fn(self_: SLVibraItf, vibrate: SLboolean) -> SLresult>,
    pub IsVibrating:
        Option<unsafe extern "C" fn(self_: SLVibraItf, pVibrating: *mut SLboolean) -> SLresult>,
    pub SetFrequency:
        Option<unsafe extern "C" fn(self_: SLVibraItf, frequency: SLmilliHertz) -> SLresult>,
    pub GetFrequency:
        Option<unsafe extern "C" fn(self_: SLVibraItf, pFrequency: *mut SLmilliHertz) -> SLresult>,
    pub SetIntensity:
        Option<unsafe extern "C" fn(self_: SLVibraItf, intensity: SLpermille) -> SLresult>,
    pub GetIntensity:
        Option<unsafe extern "C" fn(self_: SLVibraItf, pIntensity: *mut SLpermille) -> SLresult>,
}
