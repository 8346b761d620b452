//! Interface IDs exported by the OpenSL ES library.
//!
//! Each symbol points at an [`SLInterfaceID_`] owned by the implementation.

use crate::types::*;

#[cfg_attr(any(target_os = "android", feature = "link"), link(name = "OpenSLES"))]
extern "C" {
    pub static SL_IID_NULL: SLInterfaceID;
    pub static SL_IID_OBJECT: SLInterfaceID;
    pub static SL_IID_AUDIOIODEVICECAPABILITIES: SLInterfaceID;
    pub static SL_IID_LED: SLInterfaceID;
    pub static SL_IID_VIBRA: SLInterfaceID;
    pub static SL_IID_METADATAEXTRACTION: SLInterfaceID;
    pub static SL_IID_METADATAMESSAGE: SLInterfaceID;
    pub static SL_IID_METADATATRAVERSAL: SLInterfaceID;
    pub static SL_IID_DYNAMICSOURCE: SLInterfaceID;
    pub static SL_IID_DYNAMICSOURCESINKCHANGE: SLInterfaceID;
    pub static SL_IID_OUTPUTMIX: SLInterfaceID;
    pub static SL_IID_PLAY: SLInterfaceID;
    pub static SL_IID_PREFETCHSTATUS: SLInterfaceID;
    pub static SL_IID_PLAYBACKRATE: SLInterfaceID;
    pub static SL_IID_SEEK: SLInterfaceID;
    pub static SL_IID_RECORD: SLInterfaceID;
    pub static SL_IID_EQUALIZER: SLInterfaceID;
    pub static SL_IID_VOLUME: SLInterfaceID;
    pub static SL_IID_DEVICEVOLUME: SLInterfaceID;
    pub static SL_IID_BUFFERQUEUE: SLInterfaceID;
    pub static SL_IID_CONFIGEXTENSION: SLInterfaceID;
    pub static SL_IID_PRESETREVERB: SLInterfaceID;
    pub static SL_IID_ENVIRONMENTALREVERB: SLInterfaceID;
    pub static SL_IID_EFFECTSEND: SLInterfaceID;
    pub static SL_IID_3DGROUPING: SLInterfaceID;
    pub static SL_IID_3DHINT: SLInterfaceID;
    pub static SL_IID_3DCOMMIT: SLInterfaceID;
    pub static SL_IID_3DLOCATION: SLInterfaceID;
    pub static SL_IID_3DDOPPLER: SLInterfaceID;
    pub static SL_IID_3DSOURCE: SLInterfaceID;
    pub static SL_IID_3DMACROSCOPIC: SLInterfaceID;
    pub static SL_IID_MUTESOLO: SLInterfaceID;
    pub static SL_IID_DYNAMICINTERFACEMANAGEMENT: SLInterfaceID;
    pub static SL_IID_MIDIMESSAGE: SLInterfaceID;
    pub static SL_IID_MIDIMUTESOLO: SLInterfaceID;
    pub static SL_IID_MIDITEMPO: SLInterfaceID;
    pub static SL_IID_MIDITIME: SLInterfaceID;
    pub static SL_IID_AUDIODECODERCAPABILITIES: SLInterfaceID;
    pub static SL_IID_AUDIOENCODERCAPABILITIES: SLInterfaceID;
    pub static SL_IID_AUDIOENCODER: SLInterfaceID;
    pub static SL_IID_BASSBOOST: SLInterfaceID;
    pub static SL_IID_PITCH: SLInterfaceID;
    pub static SL_IID_RATEPITCH: SLInterfaceID;
    pub static SL_IID_VIRTUALIZER: SLInterfaceID;
    pub static SL_IID_VISUALIZATION: SLInterfaceID;
    pub static SL_IID_ENGINE: SLInterfaceID;
    pub static SL_IID_ENGINECAPABILITIES: SLInterfaceID;
    pub static SL_IID_THREADSYNC: SLInterfaceID;
}
