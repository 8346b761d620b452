use std::ffi::c_void;

use crate::data::{SLDataSink, SLDataSource};
use crate::device::{SLLEDDescriptor, SLVibraDescriptor};
use crate::object::SLObjectItf;
use crate::types::*;

pub type SLConfigExtensionsItf = *const *const SLConfigExtensionsItf_;

#[repr(C)]
pub struct SLConfigExtensionsItf_ {
    pub SetConfiguration: Option<
        unsafe extern "C" fn(
            self_: SLConfigExtensionsItf,
            pConfigKey: *const SLchar,
            valueSize: SLuint32,
            pConfigValue: *const c_void,
        ) -> SLresult,
    >,
    pub GetConfiguration: Option<
        unsafe extern "C" fn(
            self_: SLConfigExtensionsItf,
            pConfigKey: *const SLchar,
            pValueSize: *mut SLuint32,
            pConfigValue: *mut c_void,
        ) -> SLresult,
    >,
}

pub type SLEngineItf = *const *const SLEngineItf_;

/// Every `Create*` method takes `numInterfaces` entries in both
/// `pInterfaceIds` and `pInterfaceRequired`.
#[repr(C)]
pub struct SLEngineItf_ {
    pub CreateLEDDevice: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pDevice: *mut SLObjectItf,
            deviceID: SLuint32,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub CreateVibraDevice: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pDevice: *mut SLObjectItf,
            deviceID: SLuint32,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub CreateAudioPlayer: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pPlayer: *mut SLObjectItf,
            pAudioSrc: *const SLDataSource,
            pAudioSnk: *const SLDataSink,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub CreateAudioRecorder: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pRecorder: *mut SLObjectItf,
            pAudioSrc: *const SLDataSource,
            pAudioSnk: *const SLDataSink,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub CreateMidiPlayer: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pPlayer: *mut SLObjectItf,
            pMIDISrc: *const SLDataSource,
            pBankSrc: *const SLDataSource,
            pAudioOutput: *const SLDataSink,
            pVibra: *const SLDataSink,
            pLEDArray: *const SLDataSink,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub CreateListener: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pListener: *mut SLObjectItf,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub Create3DGroup: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pGroup: *mut SLObjectItf,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub CreateOutputMix: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pMix: *mut SLObjectItf,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub CreateMetadataExtractor: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pMetadataExtractor: *mut SLObjectItf,
            pDataSource: *const SLDataSource,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub CreateExtensionObject: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pObject: *mut SLObjectItf,
            pParameters: *mut c_void,
            objectID: SLuint32,
            numInterfaces: SLuint32,
            pInterfaceIds: *const SLInterfaceID,
            pInterfaceRequired: *const SLboolean,
        ) -> SLresult,
    >,
    pub QueryNumSupportedInterfaces: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            objectID: SLuint32,
            pNumSupportedInterfaces: *mut SLuint32,
        ) -> SLresult,
    >,
    pub QuerySupportedInterfaces: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            objectID: SLuint32,
            index: SLuint32,
            pInterfaceId: *mut SLInterfaceID,
        ) -> SLresult,
    >,
    pub QueryNumSupportedExtensions:
        Option<unsafe extern "C" fn(self_: SLEngineItf, pNumExtensions: *mut SLuint32) -> SLresult>,
    /// With a null `pExtensionName` only the length is written to
    /// `pNameLength`.
    pub QuerySupportedExtension: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            index: SLuint32,
            pExtensionName: *mut SLchar,
            pNameLength: *mut SLuint16,
        ) -> SLresult,
    >,
    pub IsExtensionSupported: Option<
        unsafe extern "C" fn(
            self_: SLEngineItf,
            pExtensionName: *const SLchar,
            pSupported: *mut SLboolean,
        ) -> SLresult,
    >,
}

pub type SLEngineCapabilitiesItf = *const *const SLEngineCapabilitiesItf_;

#[repr(C)]
pub struct SLEngineCapabilitiesItf_ {
    pub QuerySupportedProfiles: Option<
        unsafe extern "C" fn(
            self_: SLEngineCapabilitiesItf,
            pProfilesSupported: *mut SLuint16,
        ) -> SLresult,
    >,
    pub QueryAvailableVoices: Option<
        unsafe extern "C" fn(
            self_: SLEngineCapabilitiesItf,
            voiceType: SLuint16,
            pNumMaxVoices: *mut SLuint16,
            pIsAbsoluteMax: *mut SLboolean,
            pNumFreeVoices: *mut SLuint16,
        ) -> SLresult,
    >,
    pub QueryNumberOfMIDISynthesizers: Option<
        unsafe extern "C" fn(
            self_: SLEngineCapabilitiesItf,
            pNumMIDIsynthesizers: *mut SLuint16,
        ) -> SLresult,
    >,
    pub QueryAPIVersion: Option<
        unsafe extern "C" fn(
            self_: SLEngineCapabilitiesItf,
            pMajor: *mut SLuint16,
            pMinor: *mut SLuint16,
            pStep: *mut SLuint16,
        ) -> SLresult,
    >,
    pub QueryLEDCapabilities: Option<
        unsafe extern "C" fn(
            self_: SLEngineCapabilitiesItf,
            pIndex: *mut SLuint32,
            pLEDDeviceID: *mut SLuint32,
            pDescriptor: *mut SLLEDDescriptor,
        ) -> SLresult,
    >,
    pub QueryVibraCapabilities: Option<
        unsafe extern "C" fn(
            self_: SLEngineCapabilitiesItf,
            pIndex: *mut SLuint32,
            pVibraDeviceID: *mut SLuint32,
            pDescriptor: *mut SLVibraDescriptor,
        ) -> SLresult,
    >,
    pub IsThreadSafe: Option<
        unsafe extern "C" fn(
            self_: SLEngineCapabilitiesItf,
            pIsThreadSafe: *mut SLboolean,
        ) -> SLresult,
    >,
}

pub type SLThreadSyncItf = *const *const SLThreadSyncItf_;

#[repr(C)]
pub struct SLThreadSyncItf_ {
    pub EnterCriticalSection: Option<unsafe extern "C" fn(self_: SLThreadSyncItf) -> SLresult>,
    pub ExitCriticalSection: Option<unsafe extern "C" fn(self_: SLThreadSyncItf) -> SLresult>,
}

pub const SL_ENGINEOPTION_THREADSAFE: SLuint32 = 0x00000001;
pub const SL_ENGINEOPTION_LOSSOFCONTROL: SLuint32 = 0x00000002;
pub const SL_ENGINEOPTION_MAJORVERSION: SLuint32 = 0x00000003;
pub const SL_ENGINEOPTION_MINORVERSION: SLuint32 = 0x00000004;
pub const SL_ENGINEOPTION_STEPVERSION: SLuint32 = 0x00000005;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SLEngineOption {
    pub feature: SLuint32,
    pub data: SLuint32,
}

#[cfg_attr(any(target_os = "android", feature = "link"), link(name = "OpenSLES"))]
extern "C" {
    pub fn slCreateEngine(
        pEngine: *mut SLObjectItf,
        numOptions: SLuint32,
        pEngineOptions: *const SLEngineOption,
        numInterfaces: SLuint32,
        pInterfaceIds: *const SLInterfaceID,
        pInterfaceRequired: *const SLboolean,
    ) -> SLresult;

    pub fn slQueryNumSupportedEngineInterfaces(pNumSupportedInterfaces: *mut SLuint32) -> SLresult;

    pub fn slQuerySupportedEngineInterfaces(
        index: SLuint32,
        pInterfaceId: *mut SLInterfaceID,
    ) -> SLresult;
}
