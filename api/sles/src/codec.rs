use crate::types::*;

pub const SL_AUDIOSTREAMFORMAT_UNDEFINED: SLuint32 = 0x00000000;

pub const SL_RATECONTROLMODE_CONSTANTBITRATE: SLuint32 = 0x00000001;
pub const SL_RATECONTROLMODE_VARIABLEBITRATE: SLuint32 = 0x00000002;

pub const SL_AUDIOCODEC_PCM: SLuint32 = 0x00000001;
pub const SL_AUDIOCODEC_MP3: SLuint32 = 0x00000002;
pub const SL_AUDIOCODEC_AMR: SLuint32 = 0x00000003;
pub const SL_AUDIOCODEC_AMRWB: SLuint32 = 0x00000004;
pub const SL_AUDIOCODEC_AMRWBPLUS: SLuint32 = 0x00000005;
pub const SL_AUDIOCODEC_AAC: SLuint32 = 0x00000006;
pub const SL_AUDIOCODEC_WMA: SLuint32 = 0x00000007;
pub const SL_AUDIOCODEC_REAL: SLuint32 = 0x00000008;
pub const SL_AUDIOCODEC_VORBIS: SLuint32 = 0x00000009;

// PCM
pub const SL_AUDIOPROFILE_PCM: SLuint32 = 0x00000001;

// MP3
pub const SL_AUDIOPROFILE_MPEG1_L3: SLuint32 = 0x00000001;
pub const SL_AUDIOPROFILE_MPEG2_L3: SLuint32 = 0x00000002;
pub const SL_AUDIOPROFILE_MPEG25_L3: SLuint32 = 0x00000003;

pub const SL_AUDIOCHANMODE_MP3_MONO: SLuint32 = 0x00000001;
pub const SL_AUDIOCHANMODE_MP3_STEREO: SLuint32 = 0x00000002;
pub const SL_AUDIOCHANMODE_MP3_JOINTSTEREO: SLuint32 = 0x00000003;
pub const SL_AUDIOCHANMODE_MP3_DUAL: SLuint32 = 0x00000004;

// AMR
pub const SL_AUDIOPROFILE_AMR: SLuint32 = 0x00000001;

pub const SL_AUDIOSTREAMFORMAT_CONFORMANCE: SLuint32 = 0x00000001;
pub const SL_AUDIOSTREAMFORMAT_IF1: SLuint32 = 0x00000002;
pub const SL_AUDIOSTREAMFORMAT_IF2: SLuint32 = 0x00000003;
pub const SL_AUDIOSTREAMFORMAT_FSF: SLuint32 = 0x00000004;
pub const SL_AUDIOSTREAMFORMAT_RTPPAYLOAD: SLuint32 = 0x00000005;
pub const SL_AUDIOSTREAMFORMAT_ITU: SLuint32 = 0x00000006;

// AMR-WB, AMR-WB+
pub const SL_AUDIOPROFILE_AMRWB: SLuint32 = 0x00000001;
pub const SL_AUDIOPROFILE_AMRWBPLUS: SLuint32 = 0x00000001;

// AAC
pub const SL_AUDIOPROFILE_AAC_AAC: SLuint32 = 0x00000001;

pub const SL_AUDIOMODE_AAC_MAIN: SLuint32 = 0x00000001;
pub const SL_AUDIOMODE_AAC_LC: SLuint32 = 0x00000002;
pub const SL_AUDIOMODE_AAC_SSR: SLuint32 = 0x00000003;
pub const SL_AUDIOMODE_AAC_LTP: SLuint32 = 0x00000004;
pub const SL_AUDIOMODE_AAC_HE: SLuint32 = 0x00000005;
pub const SL_AUDIOMODE_AAC_SCALABLE: SLuint32 = 0x00000006;
pub const SL_AUDIOMODE_AAC_ERLC: SLuint32 = 0x00000007;
pub const SL_AUDIOMODE_AAC_LD: SLuint32 = 0x00000008;
pub const SL_AUDIOMODE_AAC_HE_PS: SLuint32 = 0x00000009;
pub const SL_AUDIOMODE_AAC_HE_MPS: SLuint32 = 0x0000000A;

pub const SL_AUDIOSTREAMFORMAT_MP2ADTS: SLuint32 = 0x00000001;
pub const SL_AUDIOSTREAMFORMAT_MP4ADTS: SLuint32 = 0x00000002;
pub const SL_AUDIOSTREAMFORMAT_MP4LOAS: SLuint32 = 0x00000003;
pub const SL_AUDIOSTREAMFORMAT_MP4LATM: SLuint32 = 0x00000004;
pub const SL_AUDIOSTREAMFORMAT_ADIF: SLuint32 = 0x00000005;
pub const SL_AUDIOSTREAMFORMAT_MP4FF: SLuint32 = 0x00000006;
pub const SL_AUDIOSTREAMFORMAT_RAW: SLuint32 = 0x00000007;

// WMA
pub const SL_AUDIOPROFILE_WMA7: SLuint32 = 0x00000001;
pub const SL_AUDIOPROFILE_WMA8: SLuint32 = 0x00000002;
pub const SL_AUDIOPROFILE_WMA9: SLuint32 = 0x00000003;
pub const SL_AUDIOPROFILE_WMA10: SLuint32 = 0x00000004;

pub const SL_AUDIOMODE_WMA_LEVEL1: SLuint32 = 0x00000001;
pub const SL_AUDIOMODE_WMA_LEVEL2: SLuint32 = 0x00000002;
pub const SL_AUDIOMODE_WMA_LEVEL3: SLuint32 = 0x00000003;
pub const SL_AUDIOMODE_WMA_LEVEL4: SLuint32 = 0x00000004;
pub const SL_AUDIOMODE_WMAPRO_LEVELM0: SLuint32 = 0x00000005;
pub const SL_AUDIOMODE_WMAPRO_LEVELM1: SLuint32 = 0x00000006;
pub const SL_AUDIOMODE_WMAPRO_LEVELM2: SLuint32 = 0x00000007;
pub const SL_AUDIOMODE_WMAPRO_LEVELM3: SLuint32 = 0x00000008;

// RealAudio
pub const SL_AUDIOPROFILE_REALAUDIO: SLuint32 = 0x00000001;

pub const SL_AUDIOMODE_REALAUDIO_G2: SLuint32 = 0x00000001;
pub const SL_AUDIOMODE_REALAUDIO_8: SLuint32 = 0x00000002;
pub const SL_AUDIOMODE_REALAUDIO_10: SLuint32 = 0x00000003;
pub const SL_AUDIOMODE_REALAUDIO_SURROUND: SLuint32 = 0x00000004;

/// Sample rates and bit rates are either a continuous `min..=max` range or
/// the discrete list behind `pSampleRatesSupported`/`pBitratesSupported`.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLAudioCodecDescriptor {
    pub maxChannels: SLuint32,
    pub minBitsPerSample: SLuint32,
    pub maxBitsPerSample: SLuint32,
    pub minSampleRate: SLmilliHertz,
    pub maxSampleRate: SLmilliHertz,
    pub isFreqRangeContinuous: SLboolean,
    pub pSampleRatesSupported: *mut SLmilliHertz,
    pub numSampleRatesSupported: SLuint32,
    pub minBitRate: SLuint32,
    pub maxBitRate: SLuint32,
    pub isBitrateRangeContinuous: SLboolean,
    pub pBitratesSupported: *mut SLuint32,
    pub numBitratesSupported: SLuint32,
    pub profileSetting: SLuint32,
    pub modeSetting: SLuint32,
    pub streamFormat: SLuint32,
}

pub type SLAudioDecoderCapabilitiesItf = *const *const SLAudioDecoderCapabilitiesItf_;

#[repr(C)]
pub struct SLAudioDecoderCapabilitiesItf_ {
    pub GetAudioDecoders: Option<
        unsafe extern "C" fn(
            self_: SLAudioDecoderCapabilitiesItf,
            pNumDecoders: *mut SLuint32,
            pDecoderIds: *mut SLuint32,
        ) -> SLresult,
    >,
    pub GetAudioDecoderCapabilities: Option<
        unsafe extern "C" fn(
            self_: SLAudioDecoderCapabilitiesItf,
            decoderId: SLuint32,
            pIndex: *mut SLuint32,
            pDescriptor: *mut SLAudioCodecDescriptor,
        ) -> SLresult,
    >,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SLAudioEncoderSettings {
    pub encoderId: SLuint32,
    pub channelsIn: SLuint32,
    pub channelsOut: SLuint32,
    pub sampleRate: SLmilliHertz,
    pub bitRate: SLuint32,
    pub bitsPerSample: SLuint32,
    pub rateControl: SLuint32,
    pub profileSetting: SLuint32,
    pub levelSetting: SLuint32,
    pub channelMode: SLuint32,
    pub streamFormat: SLuint32,
    pub encodeOptions: SLuint32,
    pub blockAlignment: SLuint32,
}

pub type SLAudioEncoderCapabilitiesItf = *const *const SLAudioEncoderCapabilitiesItf_;

#[repr(C)]
pub struct SLAudioEncoderCapabilitiesItf_ {
    pub GetAudioEncoders: Option<
        unsafe extern "C" fn(
            self_: SLAudioEncoderCapabilitiesItf,
            pNumEncoders: *mut SLuint32,
            pEncoderIds: *mut SLuint32,
        ) -> SLresult,
    >,
    pub GetAudioEncoderCapabilities: Option<
        unsafe extern "C" fn(
            self_: SLAudioEncoderCapabilitiesItf,
            encoderId: SLuint32,
            pIndex: *mut SLuint32,
            pDescriptor: *mut SLAudioCodecDescriptor,
        ) -> SLresult,
    >,
}

pub type SLAudioEncoderItf = *const *const SLAudioEncoderItf_;

#[repr(C)]
pub struct SLAudioEncoderItf_ {
    pub SetEncoderSettings: Option<
        unsafe extern "C" fn(
            self_: SLAudioEncoderItf,
            pSettings: *mut SLAudioEncoderSettings,
        ) -> SLresult,
    >,
    pub GetEncoderSettings: Option<
        unsafe extern "C" fn(
            self_: SLAudioEncoderItf,
            pSettings: *mut SLAudioEncoderSettings,
        ) -> SLresult,
    >,
}
