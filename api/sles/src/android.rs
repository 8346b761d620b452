//! Android extensions from `OpenSLES_Android.h`.
//!
//! On Android `SL_IID_ANDROIDSIMPLEBUFFERQUEUE` and `SL_IID_BUFFERQUEUE`
//! resolve to the same interface when requested on an audio player.

use std::ffi::c_void;

use crate::platform::*;
use crate::types::*;

pub type SLAint64 = sl_int64_t;
pub type SLAuint64 = sl_uint64_t;

pub const SL_DATALOCATOR_ANDROIDFD: SLuint32 = 0x800007BC;
pub const SL_DATALOCATOR_ANDROIDSIMPLEBUFFERQUEUE: SLuint32 = 0x800007BD;
pub const SL_DATALOCATOR_ANDROIDBUFFERQUEUE: SLuint32 = 0x800007BE;

/// Passed as `length` to play from `offset` to the end of the file.
pub const SL_DATALOCATOR_ANDROIDFD_USE_FILE_SIZE: SLAint64 = 0xFFFFFFFFFFFFFFFFu64 as SLAint64;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_AndroidFD {
    pub locatorType: SLuint32,
    pub fd: SLint32,
    pub offset: SLAint64,
    pub length: SLAint64,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_AndroidSimpleBufferQueue {
    pub locatorType: SLuint32,
    pub numBuffers: SLuint32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_AndroidBufferQueue {
    pub locatorType: SLuint32,
    pub numBuffers: SLuint32,
}

pub const SL_ANDROID_DATAFORMAT_PCM_EX: SLuint32 = 0x00000004;

pub const SL_ANDROID_PCM_REPRESENTATION_SIGNED_INT: SLuint32 = 0x00000001;
pub const SL_ANDROID_PCM_REPRESENTATION_UNSIGNED_INT: SLuint32 = 0x00000002;
pub const SL_ANDROID_PCM_REPRESENTATION_FLOAT: SLuint32 = 0x00000003;

/// Same leading layout as [`SLDataFormat_PCM`](crate::SLDataFormat_PCM) with a
/// trailing sample representation.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SLAndroidDataFormat_PCM_EX {
    pub formatType: SLuint32,
    pub numChannels: SLuint32,
    pub sampleRate: SLuint32,
    pub bitsPerSample: SLuint32,
    pub containerSize: SLuint32,
    pub channelMask: SLuint32,
    pub endianness: SLuint32,
    pub representation: SLuint32,
}

pub type SLAndroidSimpleBufferQueueItf = *const *const SLAndroidSimpleBufferQueueItf_;

pub type slAndroidSimpleBufferQueueCallback =
    Option<unsafe extern "C" fn(caller: SLAndroidSimpleBufferQueueItf, pContext: *mut c_void)>;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SLAndroidSimpleBufferQueueState {
    pub count: SLuint32,
    pub index: SLuint32,
}

#[repr(C)]
pub struct SLAndroidSimpleBufferQueueItf_ {
    pub Enqueue: Option<
        unsafe extern "C" fn(
            self_: SLAndroidSimpleBufferQueueItf,
            pBuffer: *const c_void,
            size: SLuint32,
        ) -> SLresult,
    >,
    pub Clear: Option<unsafe extern "C" fn(self_: SLAndroidSimpleBufferQueueItf) -> SLresult>,
    pub GetState: Option<
        unsafe extern "C" fn(
            self_: SLAndroidSimpleBufferQueueItf,
            pState: *mut SLAndroidSimpleBufferQueueState,
        ) -> SLresult,
    >,
    pub RegisterCallback: Option<
        unsafe extern "C" fn(
            self_: SLAndroidSimpleBufferQueueItf,
            callback: slAndroidSimpleBufferQueueCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
}

pub const SL_ANDROID_KEY_STREAM_TYPE: &[u8] = b"androidPlaybackStreamType\0";
pub const SL_ANDROID_KEY_RECORDING_PRESET: &[u8] = b"androidRecordingPreset\0";
pub const SL_ANDROID_KEY_PERFORMANCE_MODE: &[u8] = b"androidPerformanceMode\0";

pub const SL_ANDROID_STREAM_VOICE: SLint32 = 0x00000000;
pub const SL_ANDROID_STREAM_SYSTEM: SLint32 = 0x00000001;
pub const SL_ANDROID_STREAM_RING: SLint32 = 0x00000002;
pub const SL_ANDROID_STREAM_MEDIA: SLint32 = 0x00000003;
pub const SL_ANDROID_STREAM_ALARM: SLint32 = 0x00000004;
pub const SL_ANDROID_STREAM_NOTIFICATION: SLint32 = 0x00000005;

pub const SL_ANDROID_RECORDING_PRESET_NONE: SLuint32 = 0x00000000;
pub const SL_ANDROID_RECORDING_PRESET_GENERIC: SLuint32 = 0x00000001;
pub const SL_ANDROID_RECORDING_PRESET_CAMCORDER: SLuint32 = 0x00000002;
pub const SL_ANDROID_RECORDING_PRESET_VOICE_RECOGNITION: SLuint32 = 0x00000003;
pub const SL_ANDROID_RECORDING_PRESET_VOICE_COMMUNICATION: SLuint32 = 0x00000004;
pub const SL_ANDROID_RECORDING_PRESET_UNPROCESSED: SLuint32 = 0x00000005;

pub const SL_ANDROID_PERFORMANCE_NONE: SLuint32 = 0x00000000;
pub const SL_ANDROID_PERFORMANCE_LATENCY: SLuint32 = 0x00000001;
pub const SL_ANDROID_PERFORMANCE_LATENCY_EFFECTS: SLuint32 = 0x00000002;
pub const SL_ANDROID_PERFORMANCE_POWER_SAVING: SLuint32 = 0x00000003;

pub const SL_ANDROID_JAVA_PROXY_ROUTING: SLuint32 = 0x0001;

pub type SLAndroidConfigurationItf = *const *const SLAndroidConfigurationItf_;

/// `AcquireJavaProxy` and `ReleaseJavaProxy` exist from API level 24; the
/// proxy object is a JNI `jobject`.
#[repr(C)]
pub struct SLAndroidConfigurationItf_ {
    pub SetConfiguration: Option<
        unsafe extern "C" fn(
            self_: SLAndroidConfigurationItf,
            configKey: *const SLchar,
            pConfigValue: *const c_void,
            valueSize: SLuint32,
        ) -> SLresult,
    >,
    pub GetConfiguration: Option<
        unsafe extern "C" fn(
            self_: SLAndroidConfigurationItf,
            configKey: *const SLchar,
            pValueSize: *mut SLuint32,
            pConfigValue: *mut c_void,
        ) -> SLresult,
    >,
    pub AcquireJavaProxy: Option<
        unsafe extern "C" fn(
            self_: SLAndroidConfigurationItf,
            proxyType: SLuint32,
            pProxyObj: *mut *mut c_void,
        ) -> SLresult,
    >,
    pub ReleaseJavaProxy: Option<
        unsafe extern "C" fn(self_: SLAndroidConfigurationItf, proxyType: SLuint32) -> SLresult,
    >,
}

#[cfg_attr(any(target_os = "android", feature = "link"), link(name = "OpenSLES"))]
extern "C" {
    pub static SL_IID_ANDROIDSIMPLEBUFFERQUEUE: SLInterfaceID;
    pub static SL_IID_ANDROIDCONFIGURATION: SLInterfaceID;
}
