use bitflags::bitflags;
use sles::*;

use crate::{Error, Result};

bitflags! {
    /// Speaker positions of a PCM channel mask (`SL_SPEAKER_*`).
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Speakers: SLuint32 {
        const FRONT_LEFT = SL_SPEAKER_FRONT_LEFT;
        const FRONT_RIGHT = SL_SPEAKER_FRONT_RIGHT;
        const FRONT_CENTER = SL_SPEAKER_FRONT_CENTER;
        const LOW_FREQUENCY = SL_SPEAKER_LOW_FREQUENCY;
        const BACK_LEFT = SL_SPEAKER_BACK_LEFT;
        const BACK_RIGHT = SL_SPEAKER_BACK_RIGHT;
        const FRONT_LEFT_OF_CENTER = SL_SPEAKER_FRONT_LEFT_OF_CENTER;
        const FRONT_RIGHT_OF_CENTER = SL_SPEAKER_FRONT_RIGHT_OF_CENTER;
        const BACK_CENTER = SL_SPEAKER_BACK_CENTER;
        const SIDE_LEFT = SL_SPEAKER_SIDE_LEFT;
        const SIDE_RIGHT = SL_SPEAKER_SIDE_RIGHT;
        const TOP_CENTER = SL_SPEAKER_TOP_CENTER;
        const TOP_FRONT_LEFT = SL_SPEAKER_TOP_FRONT_LEFT;
        const TOP_FRONT_CENTER = SL_SPEAKER_TOP_FRONT_CENTER;
        const TOP_FRONT_RIGHT = SL_SPEAKER_TOP_FRONT_RIGHT;
        const TOP_BACK_LEFT = SL_SPEAKER_TOP_BACK_LEFT;
        const TOP_BACK_CENTER = SL_SPEAKER_TOP_BACK_CENTER;
        const TOP_BACK_RIGHT = SL_SPEAKER_TOP_BACK_RIGHT;

        const MONO = Self::FRONT_CENTER.bits();
        const STEREO = Self::FRONT_LEFT.bits() | Self::FRONT_RIGHT.bits();
        const QUAD = Self::STEREO.bits() | Self::BACK_LEFT.bits() | Self::BACK_RIGHT.bits();
        const SURROUND_5_1 = Self::QUAD.bits()
            | Self::FRONT_CENTER.bits()
            | Self::LOW_FREQUENCY.bits();
        const SURROUND_7_1 = Self::SURROUND_5_1.bits()
            | Self::SIDE_LEFT.bits()
            | Self::SIDE_RIGHT.bits();
    }
}

impl Speakers {
    /// One channel per speaker position.
    pub fn channels(&self) -> u32 {
        self.bits().count_ones()
    }

    /// The conventional layout for a channel count, if there is one.
    pub fn for_channels(channels: u32) -> Option<Speakers> {
        match channels {
            1 => Some(Speakers::MONO),
            2 => Some(Speakers::STEREO),
            4 => Some(Speakers::QUAD),
            6 => Some(Speakers::SURROUND_5_1),
            8 => Some(Speakers::SURROUND_7_1),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SampleFormat {
    U8,
    I16,
    I24,
    I32,
    F32,
    F64,
}

impl SampleFormat {
    pub fn bits(self) -> SLuint32 {
        match self {
            SampleFormat::U8 => SL_PCMSAMPLEFORMAT_FIXED_8,
            SampleFormat::I16 => SL_PCMSAMPLEFORMAT_FIXED_16,
            SampleFormat::I24 => SL_PCMSAMPLEFORMAT_FIXED_24,
            SampleFormat::I32 | SampleFormat::F32 => SL_PCMSAMPLEFORMAT_FIXED_32,
            SampleFormat::F64 => SL_PCMSAMPLEFORMAT_FIXED_64,
        }
    }

    /// `SL_PCM_REPRESENTATION_*`.
    pub fn representation(self) -> SLuint32 {
        match self {
            SampleFormat::U8 => SL_PCM_REPRESENTATION_UNSIGNED_INT,
            SampleFormat::I16 | SampleFormat::I24 | SampleFormat::I32 => {
                SL_PCM_REPRESENTATION_SIGNED_INT
            }
            SampleFormat::F32 | SampleFormat::F64 => SL_PCM_REPRESENTATION_FLOAT,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, SampleFormat::F32 | SampleFormat::F64)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    pub fn native() -> ByteOrder {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    pub fn to_raw(self) -> SLuint32 {
        match self {
            ByteOrder::BigEndian => SL_BYTEORDER_BIGENDIAN,
            ByteOrder::LittleEndian => SL_BYTEORDER_LITTLEENDIAN,
        }
    }
}

/// Converts Hertz to the milliHertz used by sample rate fields.
pub fn millihertz(hz: u32) -> Result<SLmilliHertz> {
    hz.checked_mul(1000)
        .ok_or(Error::InvalidArgument("sample rate does not fit in milliHertz"))
}

/// Interleaved PCM stream description.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PcmFormat {
    pub speakers: Speakers,
    /// In Hertz.
    pub sample_rate: u32,
    pub sample: SampleFormat,
    pub byte_order: ByteOrder,
}

impl PcmFormat {
    pub fn new(speakers: Speakers, sample_rate: u32, sample: SampleFormat) -> PcmFormat {
        PcmFormat {
            speakers,
            sample_rate,
            sample,
            byte_order: ByteOrder::native(),
        }
    }

    pub fn channels(&self) -> u32 {
        self.speakers.channels()
    }

    /// Bytes per interleaved frame.
    pub fn frame_size(&self) -> usize {
        self.channels() as usize * self.sample.bits() as usize / 8
    }

    fn validate(&self) -> Result<SLmilliHertz> {
        if self.speakers.is_empty() {
            return Err(Error::InvalidArgument("channel mask is empty"));
        }
        millihertz(self.sample_rate)
    }

    /// The OpenSL ES 1.0 format. Only integer samples can be described.
    pub fn to_pcm(&self) -> Result<SLDataFormat_PCM> {
        let sample_rate = self.validate()?;
        if self.sample.is_float() {
            return Err(Error::InvalidArgument("SLDataFormat_PCM cannot describe float samples"));
        }

        Ok(SLDataFormat_PCM {
            formatType: SL_DATAFORMAT_PCM,
            numChannels: self.channels(),
            samplesPerSec: sample_rate,
            bitsPerSample: self.sample.bits(),
            containerSize: self.sample.bits(),
            channelMask: self.speakers.bits(),
            endianness: self.byte_order.to_raw(),
        })
    }

    pub fn to_pcm_ex(&self) -> Result<SLDataFormat_PCM_EX> {
        let sample_rate = self.validate()?;

        Ok(SLDataFormat_PCM_EX {
            formatType: SL_DATAFORMAT_PCM_EX,
            numChannels: self.channels(),
            sampleRate: sample_rate,
            bitsPerSample: self.sample.bits(),
            containerSize: self.sample.bits(),
            channelMask: self.speakers.bits(),
            endianness: self.byte_order.to_raw(),
            representation: self.sample.representation(),
        })
    }

    /// The Android extended format, which also carries float samples.
    #[cfg(any(target_os = "android", feature = "android"))]
    pub fn to_android_pcm_ex(&self) -> Result<SLAndroidDataFormat_PCM_EX> {
        let sample_rate = self.validate()?;
        let representation = match self.sample.representation() {
            SL_PCM_REPRESENTATION_SIGNED_INT => SL_ANDROID_PCM_REPRESENTATION_SIGNED_INT,
            SL_PCM_REPRESENTATION_UNSIGNED_INT => SL_ANDROID_PCM_REPRESENTATION_UNSIGNED_INT,
            _ => SL_ANDROID_PCM_REPRESENTATION_FLOAT,
        };

        Ok(SLAndroidDataFormat_PCM_EX {
            formatType: SL_ANDROID_DATAFORMAT_PCM_EX,
            numChannels: self.channels(),
            sampleRate: sample_rate,
            bitsPerSample: self.sample.bits(),
            containerSize: self.sample.bits(),
            channelMask: self.speakers.bits(),
            endianness: self.byte_order.to_raw(),
            representation,
        })
    }
}
