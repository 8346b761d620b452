use std::ffi::c_void;

use crate::object::SLObjectItf;
use crate::types::*;

pub const SL_DATALOCATOR_NULL: SLuint32 = 0x00000000;
pub const SL_DATALOCATOR_URI: SLuint32 = 0x00000001;
pub const SL_DATALOCATOR_ADDRESS: SLuint32 = 0x00000002;
pub const SL_DATALOCATOR_IODEVICE: SLuint32 = 0x00000003;
pub const SL_DATALOCATOR_OUTPUTMIX: SLuint32 = 0x00000004;
pub const SL_DATALOCATOR_RESERVED5: SLuint32 = 0x00000005;
pub const SL_DATALOCATOR_BUFFERQUEUE: SLuint32 = 0x00000006;
pub const SL_DATALOCATOR_MIDIBUFFERQUEUE: SLuint32 = 0x00000007;
pub const SL_DATALOCATOR_MEDIAOBJECT: SLuint32 = 0x00000008;
pub const SL_DATALOCATOR_CONTENTPIPE: SLuint32 = 0x00000009;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_URI {
    pub locatorType: SLuint32,
    pub pURI: *const SLchar,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_Address {
    pub locatorType: SLuint32,
    pub pAddress: *mut c_void,
    pub length: SLuint32,
}

pub const SL_IODEVICE_AUDIOINPUT: SLuint32 = 0x00000001;
pub const SL_IODEVICE_LEDARRAY: SLuint32 = 0x00000002;
pub const SL_IODEVICE_VIBRA: SLuint32 = 0x00000003;
pub const SL_IODEVICE_RESERVED4: SLuint32 = 0x00000004;
pub const SL_IODEVICE_RESERVED5: SLuint32 = 0x00000005;
pub const SL_IODEVICE_AUDIOOUTPUT: SLuint32 = 0x00000006;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_IODevice {
    pub locatorType: SLuint32,
    pub deviceType: SLuint32,
    pub deviceID: SLuint32,
    pub device: SLObjectItf,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_OutputMix {
    pub locatorType: SLuint32,
    pub outputMix: SLObjectItf,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_BufferQueue {
    pub locatorType: SLuint32,
    pub numBuffers: SLuint32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_ContentPipe {
    pub locatorType: SLuint32,
    pub pContentPipe: *mut c_void,
    pub pURI: *const SLchar,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_MIDIBufferQueue {
    pub locatorType: SLuint32,
    /// Ticks per quarter note.
    pub tpqn: SLuint32,
    pub numBuffers: SLuint32,
}

pub const SL_DATAFORMAT_MIME: SLuint32 = 0x00000001;
pub const SL_DATAFORMAT_PCM: SLuint32 = 0x00000002;
pub const SL_DATAFORMAT_RESERVED3: SLuint32 = 0x00000003;
pub const SL_DATAFORMAT_PCM_EX: SLuint32 = 0x00000004;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataFormat_MIME {
    pub formatType: SLuint32,
    pub pMimeType: *const SLchar,
    pub containerType: SLuint32,
}

pub const SL_BYTEORDER_BIGENDIAN: SLuint32 = 0x00000001;
pub const SL_BYTEORDER_LITTLEENDIAN: SLuint32 = 0x00000002;

#[cfg(target_endian = "big")]
pub const SL_BYTEORDER_NATIVE: SLuint32 = SL_BYTEORDER_BIGENDIAN;
#[cfg(not(target_endian = "big"))]
pub const SL_BYTEORDER_NATIVE: SLuint32 = SL_BYTEORDER_LITTLEENDIAN;

pub const SL_CONTAINERTYPE_UNSPECIFIED: SLuint32 = 0x00000001;
pub const SL_CONTAINERTYPE_RAW: SLuint32 = 0x00000002;
pub const SL_CONTAINERTYPE_ASF: SLuint32 = 0x00000003;
pub const SL_CONTAINERTYPE_AVI: SLuint32 = 0x00000004;
pub const SL_CONTAINERTYPE_BMP: SLuint32 = 0x00000005;
pub const SL_CONTAINERTYPE_JPG: SLuint32 = 0x00000006;
pub const SL_CONTAINERTYPE_JPG2000: SLuint32 = 0x00000007;
pub const SL_CONTAINERTYPE_M4A: SLuint32 = 0x00000008;
pub const SL_CONTAINERTYPE_MP3: SLuint32 = 0x00000009;
pub const SL_CONTAINERTYPE_MP4: SLuint32 = 0x0000000A;
pub const SL_CONTAINERTYPE_MPEG_ES: SLuint32 = 0x0000000B;
pub const SL_CONTAINERTYPE_MPEG_PS: SLuint32 = 0x0000000C;
pub const SL_CONTAINERTYPE_MPEG_TS: SLuint32 = 0x0000000D;
pub const SL_CONTAINERTYPE_QT: SLuint32 = 0x0000000E;
pub const SL_CONTAINERTYPE_WAV: SLuint32 = 0x0000000F;
pub const SL_CONTAINERTYPE_XMF_0: SLuint32 = 0x00000010;
pub const SL_CONTAINERTYPE_XMF_1: SLuint32 = 0x00000011;
pub const SL_CONTAINERTYPE_XMF_2: SLuint32 = 0x00000012;
pub const SL_CONTAINERTYPE_XMF_3: SLuint32 = 0x00000013;
pub const SL_CONTAINERTYPE_XMF_GENERIC: SLuint32 = 0x00000014;
pub const SL_CONTAINERTYPE_AMR: SLuint32 = 0x00000015;
pub const SL_CONTAINERTYPE_AAC: SLuint32 = 0x00000016;
pub const SL_CONTAINERTYPE_3GPP: SLuint32 = 0x00000017;
pub const SL_CONTAINERTYPE_3GA: SLuint32 = 0x00000018;
pub const SL_CONTAINERTYPE_RM: SLuint32 = 0x00000019;
pub const SL_CONTAINERTYPE_DMF: SLuint32 = 0x0000001A;
pub const SL_CONTAINERTYPE_SMF: SLuint32 = 0x0000001B;
pub const SL_CONTAINERTYPE_MOBILE_DLS: SLuint32 = 0x0000001C;
pub const SL_CONTAINERTYPE_OGG: SLuint32 = 0x0000001D;

/// Deprecated in 1.1 in favor of [`SLDataFormat_PCM_EX`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SLDataFormat_PCM {
    pub formatType: SLuint32,
    pub numChannels: SLuint32,
    /// In milliHertz, despite the name.
    pub samplesPerSec: SLuint32,
    pub bitsPerSample: SLuint32,
    pub containerSize: SLuint32,
    pub channelMask: SLuint32,
    pub endianness: SLuint32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SLDataFormat_PCM_EX {
    pub formatType: SLuint32,
    pub numChannels: SLuint32,
    pub sampleRate: SLmilliHertz,
    pub bitsPerSample: SLuint32,
    pub containerSize: SLuint32,
    pub channelMask: SLuint32,
    pub endianness: SLuint32,
    pub representation: SLuint32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_MediaObject {
    pub locatorType: SLuint32,
    pub mediaObject: SLObjectItf,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataLocator_Null {
    pub locatorType: SLuint32,
}

/// `pLocator` points at one of the `SLDataLocator_*` structs and `pFormat`
/// at one of the `SLDataFormat_*` structs (or is null), discriminated by
/// their leading type field.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataSource {
    pub pLocator: *mut c_void,
    pub pFormat: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLDataSink {
    pub pLocator: *mut c_void,
    pub pFormat: *mut c_void,
}
