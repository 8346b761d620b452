use std::fmt;

use crate::platform::*;

pub const KHRONOS_TITLE: &[u8] = b"KhronosTitle\0";
pub const KHRONOS_ALBUM: &[u8] = b"KhronosAlbum\0";
pub const KHRONOS_TRACK_NUMBER: &[u8] = b"KhronosTrackNumber\0";
pub const KHRONOS_ARTIST: &[u8] = b"KhronosArtist\0";
pub const KHRONOS_GENRE: &[u8] = b"KhronosGenre\0";
pub const KHRONOS_YEAR: &[u8] = b"KhronosYear\0";
pub const KHRONOS_COMMENT: &[u8] = b"KhronosComment\0";
pub const KHRONOS_ARTIST_URL: &[u8] = b"KhronosArtistURL\0";
pub const KHRONOS_CONTENT_URL: &[u8] = b"KhronosContentURL\0";
pub const KHRONOS_RATING: &[u8] = b"KhronosRating\0";
pub const KHRONOS_ALBUM_ART: &[u8] = b"KhronosAlbumArt\0";
pub const KHRONOS_COPYRIGHT: &[u8] = b"KhronosCopyright\0";

/// UTF-8 code unit.
pub type SLchar = sl_char_t;
pub type SLint8 = sl_int8_t;
pub type SLuint8 = sl_uint8_t;
pub type SLint16 = sl_int16_t;
pub type SLuint16 = sl_uint16_t;
pub type SLint32 = sl_int32_t;
pub type SLuint32 = sl_uint32_t;
pub type SLfloat32 = sl_float32_t;
/// Spelled this way in `OpenSLES.h`.
pub type Slfloat64 = sl_float64_t;
pub type SLfloat64 = sl_float64_t;

pub type SLboolean = SLuint32;
pub const SL_BOOLEAN_FALSE: SLboolean = 0x00000000;
pub const SL_BOOLEAN_TRUE: SLboolean = 0x00000001;

pub type SLmillibel = SLint16;
pub type SLmillisecond = SLuint32;
pub type SLmilliHertz = SLuint32;
pub type SLmillimeter = SLint32;
pub type SLmillidegree = SLint32;
pub type SLpermille = SLint16;
pub type SLmicrosecond = SLuint32;
pub type SLresult = SLuint32;

pub const SL_MILLIBEL_MAX: SLmillibel = 0x7FFF;
pub const SL_MILLIBEL_MIN: SLmillibel = -SL_MILLIBEL_MAX - 1;

pub const SL_MILLIHERTZ_MAX: SLmilliHertz = 0xFFFFFFFF;
pub const SL_MILLIMETER_MAX: SLmillimeter = 0x7FFFFFFF;

/// Interface ID, laid out as a UUID.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SLInterfaceID_ {
    pub time_low: SLuint32,
    pub time_mid: SLuint16,
    pub time_hi_and_version: SLuint16,
    pub clock_seq: SLuint16,
    pub node: [SLuint8; 6],
}

pub type SLInterfaceID = *const SLInterfaceID_;

impl fmt::Display for SLInterfaceID_ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-",
            self.time_low, self.time_mid, self.time_hi_and_version, self.clock_seq
        )?;
        for byte in self.node {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

pub const SL_OBJECTID_ENGINE: SLuint32 = 0x00001001;
pub const SL_OBJECTID_LEDDEVICE: SLuint32 = 0x00001002;
pub const SL_OBJECTID_VIBRADEVICE: SLuint32 = 0x00001003;
pub const SL_OBJECTID_AUDIOPLAYER: SLuint32 = 0x00001004;
pub const SL_OBJECTID_AUDIORECORDER: SLuint32 = 0x00001005;
pub const SL_OBJECTID_MIDIPLAYER: SLuint32 = 0x00001006;
pub const SL_OBJECTID_LISTENER: SLuint32 = 0x00001007;
pub const SL_OBJECTID_3DGROUP: SLuint32 = 0x00001008;
pub const SL_OBJECTID_OUTPUTMIX: SLuint32 = 0x00001009;
pub const SL_OBJECTID_METADATAEXTRACTOR: SLuint32 = 0x0000100A;

pub const SL_PROFILES_PHONE: SLuint16 = 0x0001;
pub const SL_PROFILES_MUSIC: SLuint16 = 0x0002;
pub const SL_PROFILES_GAME: SLuint16 = 0x0004;

pub const SL_VOICETYPE_2D_AUDIO: SLuint16 = 0x0001;
pub const SL_VOICETYPE_MIDI: SLuint16 = 0x0002;
pub const SL_VOICETYPE_3D_AUDIO: SLuint16 = 0x0004;
pub const SL_VOICETYPE_3D_MIDIOUTPUT: SLuint16 = 0x0008;

pub const SL_PRIORITY_LOWEST: SLuint32 = 0xFFFFFFFF;
pub const SL_PRIORITY_VERYLOW: SLuint32 = 0xE0000000;
pub const SL_PRIORITY_LOW: SLuint32 = 0xC0000000;
pub const SL_PRIORITY_BELOWNORMAL: SLuint32 = 0xA0000000;
pub const SL_PRIORITY_NORMAL: SLuint32 = 0x7FFFFFFF;
pub const SL_PRIORITY_ABOVENORMAL: SLuint32 = 0x60000000;
pub const SL_PRIORITY_HIGH: SLuint32 = 0x40000000;
pub const SL_PRIORITY_VERYHIGH: SLuint32 = 0x20000000;
pub const SL_PRIORITY_HIGHEST: SLuint32 = 0x00000000;

pub const SL_PCM_REPRESENTATION_SIGNED_INT: SLuint32 = 0x00000001;
pub const SL_PCM_REPRESENTATION_UNSIGNED_INT: SLuint32 = 0x00000002;
pub const SL_PCM_REPRESENTATION_FLOAT: SLuint32 = 0x00000003;

pub const SL_PCMSAMPLEFORMAT_FIXED_8: SLuint32 = 0x0008;
pub const SL_PCMSAMPLEFORMAT_FIXED_16: SLuint32 = 0x0010;
pub const SL_PCMSAMPLEFORMAT_FIXED_20: SLuint32 = 0x0014;
pub const SL_PCMSAMPLEFORMAT_FIXED_24: SLuint32 = 0x0018;
pub const SL_PCMSAMPLEFORMAT_FIXED_28: SLuint32 = 0x001C;
pub const SL_PCMSAMPLEFORMAT_FIXED_32: SLuint32 = 0x0020;
pub const SL_PCMSAMPLEFORMAT_FIXED_64: SLuint32 = 0x0040;

/// Sampling rates in milliHertz.
pub const SL_SAMPLINGRATE_8: SLmilliHertz = 8000000;
pub const SL_SAMPLINGRATE_11_025: SLmilliHertz = 11025000;
pub const SL_SAMPLINGRATE_12: SLmilliHertz = 12000000;
pub const SL_SAMPLINGRATE_16: SLmilliHertz = 16000000;
pub const SL_SAMPLINGRATE_22_05: SLmilliHertz = 22050000;
pub const SL_SAMPLINGRATE_24: SLmilliHertz = 24000000;
pub const SL_SAMPLINGRATE_32: SLmilliHertz = 32000000;
pub const SL_SAMPLINGRATE_44_1: SLmilliHertz = 44100000;
pub const SL_SAMPLINGRATE_48: SLmilliHertz = 48000000;
pub const SL_SAMPLINGRATE_64: SLmilliHertz = 64000000;
pub const SL_SAMPLINGRATE_88_2: SLmilliHertz = 88200000;
pub const SL_SAMPLINGRATE_96: SLmilliHertz = 96000000;
pub const SL_SAMPLINGRATE_192: SLmilliHertz = 192000000;

pub const SL_SPEAKER_FRONT_LEFT: SLuint32 = 0x00000001;
pub const SL_SPEAKER_FRONT_RIGHT: SLuint32 = 0x00000002;
pub const SL_SPEAKER_FRONT_CENTER: SLuint32 = 0x00000004;
pub const SL_SPEAKER_LOW_FREQUENCY: SLuint32 = 0x00000008;
pub const SL_SPEAKER_BACK_LEFT: SLuint32 = 0x00000010;
pub const SL_SPEAKER_BACK_RIGHT: SLuint32 = 0x00000020;
pub const SL_SPEAKER_FRONT_LEFT_OF_CENTER: SLuint32 = 0x00000040;
pub const SL_SPEAKER_FRONT_RIGHT_OF_CENTER: SLuint32 = 0x00000080;
pub const SL_SPEAKER_BACK_CENTER: SLuint32 = 0x00000100;
pub const SL_SPEAKER_SIDE_LEFT: SLuint32 = 0x00000200;
pub const SL_SPEAKER_SIDE_RIGHT: SLuint32 = 0x00000400;
pub const SL_SPEAKER_TOP_CENTER: SLuint32 = 0x00000800;
pub const SL_SPEAKER_TOP_FRONT_LEFT: SLuint32 = 0x00001000;
pub const SL_SPEAKER_TOP_FRONT_CENTER: SLuint32 = 0x00002000;
pub const SL_SPEAKER_TOP_FRONT_RIGHT: SLuint32 = 0x00004000;
pub const SL_SPEAKER_TOP_BACK_LEFT: SLuint32 = 0x00008000;
pub const SL_SPEAKER_TOP_BACK_CENTER: SLuint32 = 0x00010000;
pub const SL_SPEAKER_TOP_BACK_RIGHT: SLuint32 = 0x00020000;

pub const SL_RESULT_SUCCESS: SLresult = 0x00000000;
pub const SL_RESULT_PRECONDITIONS_VIOLATED: SLresult = 0x00000001;
pub const SL_RESULT_PARAMETER_INVALID: SLresult = 0x00000002;
pub const SL_RESULT_MEMORY_FAILURE: SLresult = 0x00000003;
pub const SL_RESULT_RESOURCE_ERROR: SLresult = 0x00000004;
pub const SL_RESULT_RESOURCE_LOST: SLresult = 0x00000005;
pub const SL_RESULT_IO_ERROR: SLresult = 0x00000006;
pub const SL_RESULT_BUFFER_INSUFFICIENT: SLresult = 0x00000007;
pub const SL_RESULT_CONTENT_CORRUPTED: SLresult = 0x00000008;
pub const SL_RESULT_CONTENT_UNSUPPORTED: SLresult = 0x00000009;
pub const SL_RESULT_CONTENT_NOT_FOUND: SLresult = 0x0000000A;
pub const SL_RESULT_PERMISSION_DENIED: SLresult = 0x0000000B;
pub const SL_RESULT_FEATURE_UNSUPPORTED: SLresult = 0x0000000C;
pub const SL_RESULT_INTERNAL_ERROR: SLresult = 0x0000000D;
pub const SL_RESULT_UNKNOWN_ERROR: SLresult = 0x0000000E;
pub const SL_RESULT_OPERATION_ABORTED: SLresult = 0x0000000F;
pub const SL_RESULT_CONTROL_LOST: SLresult = 0x00000010;
pub const SL_RESULT_READONLY: SLresult = 0x00000011;
pub const SL_RESULT_ENGINEOPTION_UNSUPPORTED: SLresult = 0x00000012;
pub const SL_RESULT_SOURCE_SINK_INCOMPATIBLE: SLresult = 0x00000013;

pub const SL_OBJECT_STATE_UNREALIZED: SLuint32 = 0x00000001;
pub const SL_OBJECT_STATE_REALIZED: SLuint32 = 0x00000002;
pub const SL_OBJECT_STATE_SUSPENDED: SLuint32 = 0x00000003;

pub const SL_OBJECT_EVENT_RUNTIME_ERROR: SLuint32 = 0x00000001;
pub const SL_OBJECT_EVENT_ASYNC_TERMINATION: SLuint32 = 0x00000002;
pub const SL_OBJECT_EVENT_RESOURCES_LOST: SLuint32 = 0x00000003;
pub const SL_OBJECT_EVENT_RESOURCES_AVAILABLE: SLuint32 = 0x00000004;
pub const SL_OBJECT_EVENT_ITF_CONTROL_TAKEN: SLuint32 = 0x00000005;
pub const SL_OBJECT_EVENT_ITF_CONTROL_RETURNED: SLuint32 = 0x00000006;
pub const SL_OBJECT_EVENT_ITF_PARAMETERS_CHANGED: SLuint32 = 0x00000007;
