use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use sles::*;

/// A vtable type with an interface ID exported by the library.
///
/// # Safety
///
/// `iid()` must identify an interface whose vtable has exactly the layout of
/// `Self`. Handles obtained through [`Object::interface`](crate::Object::interface)
/// are cast to `Self` on that basis.
pub unsafe trait Interface {
    fn iid() -> SLInterfaceID;
}

macro_rules! interfaces {
    ($($(#[$attr:meta])* $vtable:ident => $iid:ident,)*) => {
        $(
            $(#[$attr])*
            unsafe impl Interface for $vtable {
                fn iid() -> SLInterfaceID {
                    unsafe { $iid }
                }
            }
        )*
    };
}

interfaces! {
    SLObjectItf_ => SL_IID_OBJECT,
    SLAudioIODeviceCapabilitiesItf_ => SL_IID_AUDIOIODEVICECAPABILITIES,
    SLLEDArrayItf_ => SL_IID_LED,
    SLVibraItf_ => SL_IID_VIBRA,
    SLMetadataExtractionItf_ => SL_IID_METADATAEXTRACTION,
    SLMetadataMessageItf_ => SL_IID_METADATAMESSAGE,
    SLMetadataTraversalItf_ => SL_IID_METADATATRAVERSAL,
    SLDynamicSourceItf_ => SL_IID_DYNAMICSOURCE,
    SLDynamicSourceSinkChangeItf_ => SL_IID_DYNAMICSOURCESINKCHANGE,
    SLOutputMixItf_ => SL_IID_OUTPUTMIX,
    SLPlayItf_ => SL_IID_PLAY,
    SLPrefetchStatusItf_ => SL_IID_PREFETCHSTATUS,
    SLPlaybackRateItf_ => SL_IID_PLAYBACKRATE,
    SLSeekItf_ => SL_IID_SEEK,
    SLRecordItf_ => SL_IID_RECORD,
    SLEqualizerItf_ => SL_IID_EQUALIZER,
    SLVolumeItf_ => SL_IID_VOLUME,
    SLDeviceVolumeItf_ => SL_IID_DEVICEVOLUME,
    SLBufferQueueItf_ => SL_IID_BUFFERQUEUE,
    SLConfigExtensionsItf_ => SL_IID_CONFIGEXTENSION,
    SLPresetReverbItf_ => SL_IID_PRESETREVERB,
    SLEnvironmentalReverbItf_ => SL_IID_ENVIRONMENTALREVERB,
    SLEffectSendItf_ => SL_IID_EFFECTSEND,
    SL3DGroupingItf_ => SL_IID_3DGROUPING,
    SL3DHintItf_ => SL_IID_3DHINT,
    SL3DCommitItf_ => SL_IID_3DCOMMIT,
    SL3DLocationItf_ => SL_IID_3DLOCATION,
    SL3DDopplerItf_ => SL_IID_3DDOPPLER,
    SL3DSourceItf_ => SL_IID_3DSOURCE,
    SL3DMacroscopicItf_ => SL_IID_3DMACROSCOPIC,
    SLMuteSoloItf_ => SL_IID_MUTESOLO,
    SLDynamicInterfaceManagementItf_ => SL_IID_DYNAMICINTERFACEMANAGEMENT,
    SLMIDIMessageItf_ => SL_IID_MIDIMESSAGE,
    SLMIDIMuteSoloItf_ => SL_IID_MIDIMUTESOLO,
    SLMIDITempoItf_ => SL_IID_MIDITEMPO,
    SLMIDITimeItf_ => SL_IID_MIDITIME,
    SLAudioDecoderCapabilitiesItf_ => SL_IID_AUDIODECODERCAPABILITIES,
    SLAudioEncoderCapabilitiesItf_ => SL_IID_AUDIOENCODERCAPABILITIES,
    SLAudioEncoderItf_ => SL_IID_AUDIOENCODER,
    SLBassBoostItf_ => SL_IID_BASSBOOST,
    SLPitchItf_ => SL_IID_PITCH,
    SLRatePitchItf_ => SL_IID_RATEPITCH,
    SLVirtualizerItf_ => SL_IID_VIRTUALIZER,
    SLVisualizationItf_ => SL_IID_VISUALIZATION,
    SLEngineItf_ => SL_IID_ENGINE,
    SLEngineCapabilitiesItf_ => SL_IID_ENGINECAPABILITIES,
    SLThreadSyncItf_ => SL_IID_THREADSYNC,
    #[cfg(any(target_os = "android", feature = "android"))]
    SLAndroidSimpleBufferQueueItf_ => SL_IID_ANDROIDSIMPLEBUFFERQUEUE,
    #[cfg(any(target_os = "android", feature = "android"))]
    SLAndroidConfigurationItf_ => SL_IID_ANDROIDCONFIGURATION,
}

/// A non-null OpenSL ES interface pointer (`SL*Itf`).
///
/// Handles are plain copies of the pointer. They stay valid until the owning
/// object is destroyed.
#[repr(transparent)]
pub struct Itf<T> {
    ptr: NonNull<*const T>,
    _marker: PhantomData<*const T>,
}

impl<T> Itf<T> {
    /// # Safety
    ///
    /// `raw` must be null or point to a vtable pointer of type `T` that stays
    /// valid for as long as the handle (and any copy of it) is used.
    pub unsafe fn from_raw(raw: *const *const T) -> Option<Itf<T>> {
        NonNull::new(raw as *mut *const T).map(|ptr| Itf {
            ptr,
            _marker: PhantomData,
        })
    }

    pub fn as_raw(&self) -> *const *const T {
        self.ptr.as_ptr()
    }

    pub(crate) fn vtable(&self) -> &T {
        unsafe { &**self.ptr.as_ptr() }
    }
}

impl<T> Clone for Itf<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Itf<T> {}

impl<T> PartialEq for Itf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for Itf<T> {}

impl<T> fmt::Debug for Itf<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Itf").field(&self.ptr).finish()
    }
}

/// Calls a vtable method, passing the interface as `self`.
///
/// A null slot returns `Error::MissingMethod` from the enclosing function.
macro_rules! call {
    ($itf:expr, $method:ident($($arg:expr),* $(,)?)) => {{
        let itf = $itf;
        let method = itf
            .vtable()
            .$method
            .ok_or($crate::Error::MissingMethod(stringify!($method)))?;
        method(itf.as_raw(), $($arg),*)
    }};
}

pub(crate) use call;
