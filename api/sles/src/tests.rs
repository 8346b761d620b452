use std::mem::{offset_of, size_of};

use super::*;

fn slots<T>() -> usize {
    assert_eq!(size_of::<T>() % size_of::<usize>(), 0);
    size_of::<T>() / size_of::<usize>()
}

#[test]
fn platform_widths() {
    assert_eq!(size_of::<SLchar>(), 1);
    assert_eq!(size_of::<SLint16>(), 2);
    assert_eq!(size_of::<SLuint32>(), 4);
    assert_eq!(size_of::<SLfloat32>(), 4);
    assert_eq!(size_of::<SLfloat64>(), 8);
    assert_eq!(size_of::<SLboolean>(), 4);
    assert_eq!(size_of::<SLmillibel>(), 2);
    assert_eq!(size_of::<SLpermille>(), 2);
    assert_eq!(size_of::<SLresult>(), 4);
}

#[test]
fn limits() {
    assert_eq!(SL_MILLIBEL_MAX, 32767);
    assert_eq!(SL_MILLIBEL_MIN, -32768);
    assert_eq!(SL_MILLIHERTZ_MAX, u32::MAX);
    assert_eq!(SL_MILLIMETER_MAX, i32::MAX);
    assert_eq!(SL_TIME_UNKNOWN, u32::MAX);
    assert_eq!(SL_EQUALIZER_UNDEFINED, u16::MAX);
}

#[test]
fn result_codes() {
    assert_eq!(SL_RESULT_SUCCESS, 0);
    assert_eq!(SL_RESULT_PARAMETER_INVALID, 2);
    assert_eq!(SL_RESULT_CONTENT_NOT_FOUND, 0x0A);
    assert_eq!(SL_RESULT_FEATURE_UNSUPPORTED, 0x0C);
    assert_eq!(SL_RESULT_SOURCE_SINK_INCOMPATIBLE, 0x13);
}

#[test]
fn byte_order() {
    if cfg!(target_endian = "little") {
        assert_eq!(SL_BYTEORDER_NATIVE, SL_BYTEORDER_LITTLEENDIAN);
    } else {
        assert_eq!(SL_BYTEORDER_NATIVE, SL_BYTEORDER_BIGENDIAN);
    }
}

#[test]
fn khronos_keys_are_nul_terminated() {
    for key in [KHRONOS_TITLE, KHRONOS_ALBUM_ART, KHRONOS_COPYRIGHT] {
        assert_eq!(key.last(), Some(&0));
        assert!(!key[..key.len() - 1].contains(&0));
    }
}

#[test]
fn interface_id() {
    assert_eq!(size_of::<SLInterfaceID_>(), 16);

    let iid = SLInterfaceID_ {
        time_low: 0x8d97c260,
        time_mid: 0xddd4,
        time_hi_and_version: 0x11db,
        clock_seq: 0x958f,
        node: [0x00, 0x02, 0xa5, 0xd5, 0xc5, 0x1b],
    };
    assert_eq!(iid.to_string(), "8d97c260-ddd4-11db-958f-0002a5d5c51b");
}

#[test]
fn data_layout() {
    assert_eq!(size_of::<SLDataFormat_PCM>(), 28);
    assert_eq!(offset_of!(SLDataFormat_PCM, channelMask), 20);
    assert_eq!(size_of::<SLDataFormat_PCM_EX>(), 32);
    assert_eq!(offset_of!(SLDataFormat_PCM_EX, representation), 28);

    assert_eq!(size_of::<SLDataSource>(), 2 * size_of::<usize>());
    assert_eq!(size_of::<SLDataSink>(), 2 * size_of::<usize>());
    assert_eq!(offset_of!(SLDataLocator_OutputMix, outputMix), size_of::<usize>());
    assert_eq!(size_of::<SLDataLocator_BufferQueue>(), 8);
}

#[test]
fn struct_layout() {
    assert_eq!(size_of::<SLHSL>(), 8);
    assert_eq!(size_of::<SLLEDDescriptor>(), 8);
    assert_eq!(offset_of!(SLLEDDescriptor, colorMask), 4);
    assert_eq!(size_of::<SLVibraDescriptor>(), 16);
    assert_eq!(size_of::<SLVec3D>(), 12);
    assert_eq!(size_of::<SLBufferQueueState>(), 8);
    assert_eq!(size_of::<SLEngineOption>(), 8);
    assert_eq!(size_of::<SLMetadataInfo>(), 28);
    assert_eq!(offset_of!(SLMetadataInfo, data), 24);
    assert_eq!(size_of::<SLAudioEncoderSettings>(), 52);
}

#[test]
fn reverb_settings_layout() {
    assert_eq!(size_of::<SLEnvironmentalReverbSettings>(), 28);
    assert_eq!(offset_of!(SLEnvironmentalReverbSettings, roomHFLevel), 2);
    assert_eq!(offset_of!(SLEnvironmentalReverbSettings, decayTime), 4);
    assert_eq!(offset_of!(SLEnvironmentalReverbSettings, decayHFRatio), 8);
    assert_eq!(offset_of!(SLEnvironmentalReverbSettings, reflectionsLevel), 10);
    assert_eq!(offset_of!(SLEnvironmentalReverbSettings, reflectionsDelay), 12);
    assert_eq!(offset_of!(SLEnvironmentalReverbSettings, reverbLevel), 16);
    assert_eq!(offset_of!(SLEnvironmentalReverbSettings, reverbDelay), 20);
    assert_eq!(offset_of!(SLEnvironmentalReverbSettings, diffusion), 24);
    assert_eq!(offset_of!(SLEnvironmentalReverbSettings, density), 26);
}

#[test]
fn reverb_presets() {
    let default = SL_I3DL2_ENVIRONMENT_PRESET_DEFAULT;
    assert_eq!(default.roomLevel, SL_MILLIBEL_MIN);
    assert_eq!(default.reflectionsLevel, SL_MILLIBEL_MIN);
    assert_eq!(default.reverbLevel, SL_MILLIBEL_MIN);
    assert_eq!(default.decayTime, 1000);

    let quarry = SL_I3DL2_ENVIRONMENT_PRESET_QUARRY;
    assert_eq!(quarry.reflectionsLevel, SL_MILLIBEL_MIN);
    assert_eq!(quarry.reflectionsDelay, 61);

    assert_eq!(
        SL_I3DL2_ENVIRONMENT_PRESET_PLATE,
        SLEnvironmentalReverbSettings {
            roomLevel: -1000,
            roomHFLevel: -200,
            decayTime: 1300,
            decayHFRatio: 900,
            reflectionsLevel: 0,
            reflectionsDelay: 2,
            reverbLevel: 0,
            reverbDelay: 10,
            diffusion: 1000,
            density: 750,
        }
    );
}

#[test]
fn vtable_slots() {
    assert_eq!(slots::<SLObjectItf_>(), 10);
    assert_eq!(slots::<SLEngineItf_>(), 15);
    assert_eq!(slots::<SLEngineCapabilitiesItf_>(), 7);
    assert_eq!(slots::<SLPlayItf_>(), 12);
    assert_eq!(slots::<SLRecordItf_>(), 12);
    assert_eq!(slots::<SLPrefetchStatusItf_>(), 8);
    assert_eq!(slots::<SLBufferQueueItf_>(), 6);
    assert_eq!(slots::<SLAudioIODeviceCapabilitiesItf_>(), 11);
    assert_eq!(slots::<SLMetadataExtractionItf_>(), 7);
    assert_eq!(slots::<SLEqualizerItf_>(), 13);
    assert_eq!(slots::<SLEnvironmentalReverbItf_>(), 22);
    assert_eq!(slots::<SL3DLocationItf_>(), 8);
    assert_eq!(slots::<SL3DSourceItf_>(), 14);
    assert_eq!(slots::<SLMIDIMuteSoloItf_>(), 9);
    assert_eq!(slots::<SLVolumeItf_>(), 9);
    assert_eq!(slots::<SLThreadSyncItf_>(), 2);
}

#[test]
fn vtable_order() {
    assert_eq!(offset_of!(SLObjectItf_, Realize), 0);
    assert_eq!(offset_of!(SLObjectItf_, GetInterface), 3 * size_of::<usize>());
    assert_eq!(offset_of!(SLObjectItf_, Destroy), 6 * size_of::<usize>());
    assert_eq!(offset_of!(SLEngineItf_, CreateAudioPlayer), 2 * size_of::<usize>());
    assert_eq!(offset_of!(SLEngineItf_, CreateOutputMix), 7 * size_of::<usize>());
    assert_eq!(offset_of!(SLPlayItf_, RegisterCallback), 4 * size_of::<usize>());
}

#[cfg(any(target_os = "android", feature = "android"))]
#[test]
fn android_layout() {
    assert_eq!(size_of::<SLAndroidDataFormat_PCM_EX>(), 32);
    assert_eq!(size_of::<SLDataLocator_AndroidSimpleBufferQueue>(), 8);
    assert_eq!(offset_of!(SLDataLocator_AndroidFD, offset), 8);
    assert_eq!(size_of::<SLAndroidSimpleBufferQueueState>(), 8);
    assert_eq!(slots::<SLAndroidSimpleBufferQueueItf_>(), 4);
    assert_eq!(SL_DATALOCATOR_ANDROIDFD_USE_FILE_SIZE, -1);
    assert_eq!(SL_ANDROID_KEY_PERFORMANCE_MODE, b"androidPerformanceMode\0");
}
