use std::ffi::CString;
use std::ptr;

use log::{debug, trace};
use sles::*;

use crate::interface::{call, Interface, Itf};
use crate::object::{describe_iid, Object};
use crate::{check, Error, Result};

/// Interfaces to expose on a new object.
///
/// Creation calls take the IDs and the required flags as two arrays of the
/// same length; this keeps them paired.
#[derive(Clone, Default, Debug)]
pub struct InterfaceRequest {
    ids: Vec<SLInterfaceID>,
    required: Vec<SLboolean>,
}

impl InterfaceRequest {
    pub fn new() -> InterfaceRequest {
        InterfaceRequest::default()
    }

    /// Creation fails if `T` cannot be provided.
    pub fn require<T: Interface>(self) -> InterfaceRequest {
        self.with_id(T::iid(), true)
    }

    /// `T` is exposed if the implementation supports it.
    pub fn request<T: Interface>(self) -> InterfaceRequest {
        self.with_id(T::iid(), false)
    }

    pub fn with_id(mut self, iid: SLInterfaceID, required: bool) -> InterfaceRequest {
        self.ids.push(iid);
        self.required.push(required as SLboolean);
        self
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[SLInterfaceID] {
        &self.ids
    }

    pub fn required(&self) -> &[SLboolean] {
        &self.required
    }

    /// `(numInterfaces, pInterfaceIds, pInterfaceRequired)`.
    pub(crate) fn raw(&self) -> Result<(SLuint32, *const SLInterfaceID, *const SLboolean)> {
        if self.is_empty() {
            return Ok((0, ptr::null(), ptr::null()));
        }

        let count = SLuint32::try_from(self.ids.len())
            .map_err(|_| Error::InvalidArgument("too many interfaces"))?;
        Ok((count, self.ids.as_ptr(), self.required.as_ptr()))
    }
}

/// Options passed to [`create_engine`].
#[derive(Clone, Default, Debug)]
pub struct EngineOptions {
    options: Vec<SLEngineOption>,
}

impl EngineOptions {
    pub fn new() -> EngineOptions {
        EngineOptions::default()
    }

    pub fn thread_safe(self, thread_safe: bool) -> EngineOptions {
        self.with(SL_ENGINEOPTION_THREADSAFE, thread_safe as SLuint32)
    }

    pub fn loss_of_control(self, enabled: bool) -> EngineOptions {
        self.with(SL_ENGINEOPTION_LOSSOFCONTROL, enabled as SLuint32)
    }

    /// Requests a specific API version, e.g. `(1, 1, 0)`.
    pub fn version(self, major: SLuint32, minor: SLuint32, step: SLuint32) -> EngineOptions {
        self.with(SL_ENGINEOPTION_MAJORVERSION, major)
            .with(SL_ENGINEOPTION_MINORVERSION, minor)
            .with(SL_ENGINEOPTION_STEPVERSION, step)
    }

    pub fn with(mut self, feature: SLuint32, data: SLuint32) -> EngineOptions {
        self.options.push(SLEngineOption { feature, data });
        self
    }

    pub fn as_slice(&self) -> &[SLEngineOption] {
        &self.options
    }
}

/// Creates an engine object. It still has to be realized.
pub fn create_engine(options: &EngineOptions, interfaces: &InterfaceRequest) -> Result<Object> {
    trace!(
        "slCreateEngine: options {:?}, {} interface(s)",
        options.as_slice(),
        interfaces.len()
    );

    let num_options = SLuint32::try_from(options.options.len())
        .map_err(|_| Error::InvalidArgument("too many engine options"))?;
    let options_ptr = if options.options.is_empty() {
        ptr::null()
    } else {
        options.options.as_ptr()
    };
    let (count, ids, required) = interfaces.raw()?;

    let mut engine = ptr::null();
    let result =
        unsafe { slCreateEngine(&mut engine, num_options, options_ptr, count, ids, required) };
    created("slCreateEngine", result, engine)
}

/// Interfaces that can be requested on an engine object.
pub fn supported_engine_interfaces() -> Result<Vec<SLInterfaceID>> {
    let mut count = 0;
    check(unsafe { slQueryNumSupportedEngineInterfaces(&mut count) })?;

    let mut iids = Vec::with_capacity(count as usize);
    for index in 0..count {
        let mut iid = ptr::null();
        check(unsafe { slQuerySupportedEngineInterfaces(index, &mut iid) })?;
        iids.push(iid);
    }

    Ok(iids)
}

fn created(what: &str, result: SLresult, raw: SLObjectItf) -> Result<Object> {
    if let Err(error) = check(result) {
        debug!("{what} failed: {error}");
        return Err(error);
    }

    unsafe { Itf::from_raw(raw) }.ok_or(Error::InternalError)
}

/// The engine interface (`SLEngineItf`).
pub type Engine = Itf<SLEngineItf_>;

impl Itf<SLEngineItf_> {
    pub fn create_output_mix(&self, interfaces: &InterfaceRequest) -> Result<Object> {
        let (count, ids, required) = interfaces.raw()?;
        let mut mix = ptr::null();
        let result = unsafe { call!(self, CreateOutputMix(&mut mix, count, ids, required)) };
        created("CreateOutputMix", result, mix)
    }

    /// # Safety
    ///
    /// The locator and format pointers in `source` and `sink` must point to
    /// structs matching their type tags.
    pub unsafe fn create_audio_player(
        &self,
        source: &SLDataSource,
        sink: &SLDataSink,
        interfaces: &InterfaceRequest,
    ) -> Result<Object> {
        let (count, ids, required) = interfaces.raw()?;
        let mut player = ptr::null();
        let result =
            call!(self, CreateAudioPlayer(&mut player, source, sink, count, ids, required));
        created("CreateAudioPlayer", result, player)
    }

    /// # Safety
    ///
    /// The locator and format pointers in `source` and `sink` must point to
    /// structs matching their type tags.
    pub unsafe fn create_audio_recorder(
        &self,
        source: &SLDataSource,
        sink: &SLDataSink,
        interfaces: &InterfaceRequest,
    ) -> Result<Object> {
        let (count, ids, required) = interfaces.raw()?;
        let mut recorder = ptr::null();
        let result =
            call!(self, CreateAudioRecorder(&mut recorder, source, sink, count, ids, required));
        created("CreateAudioRecorder", result, recorder)
    }

    pub fn create_listener(&self, interfaces: &InterfaceRequest) -> Result<Object> {
        let (count, ids, required) = interfaces.raw()?;
        let mut listener = ptr::null();
        let result = unsafe { call!(self, CreateListener(&mut listener, count, ids, required)) };
        created("CreateListener", result, listener)
    }

    pub fn create_3d_group(&self, interfaces: &InterfaceRequest) -> Result<Object> {
        let (count, ids, required) = interfaces.raw()?;
        let mut group = ptr::null();
        let result = unsafe { call!(self, Create3DGroup(&mut group, count, ids, required)) };
        created("Create3DGroup", result, group)
    }

    /// Interfaces supported by objects of type `object_id` (`SL_OBJECTID_*`).
    pub fn supported_interfaces(&self, object_id: SLuint32) -> Result<Vec<SLInterfaceID>> {
        let mut count = 0;
        check(unsafe { call!(self, QueryNumSupportedInterfaces(object_id, &mut count)) })?;

        let mut iids = Vec::with_capacity(count as usize);
        for index in 0..count {
            let mut iid = ptr::null();
            check(unsafe { call!(self, QuerySupportedInterfaces(object_id, index, &mut iid)) })?;
            trace!("object {object_id:#x} supports {}", describe_iid(iid));
            iids.push(iid);
        }

        Ok(iids)
    }

    pub fn extensions(&self) -> Result<Vec<String>> {
        let mut count = 0;
        check(unsafe { call!(self, QueryNumSupportedExtensions(&mut count)) })?;

        let mut names = Vec::with_capacity(count as usize);
        for index in 0..count {
            let mut len: SLuint16 = 0;
            check(unsafe {
                call!(self, QuerySupportedExtension(index, ptr::null_mut(), &mut len))
            })?;

            len = len.saturating_add(1);
            let mut buf = vec![0 as SLchar; len as usize];
            check(unsafe {
                call!(self, QuerySupportedExtension(index, buf.as_mut_ptr(), &mut len))
            })?;

            buf.truncate(len as usize);
            if let Some(nul) = buf.iter().position(|&c| c == 0) {
                buf.truncate(nul);
            }
            names.push(String::from_utf8_lossy(&buf).into_owned());
        }

        Ok(names)
    }

    pub fn is_extension_supported(&self, name: &str) -> Result<bool> {
        let name = CString::new(name)
            .map_err(|_| Error::InvalidArgument("extension name contains a NUL byte"))?;

        let mut supported = SL_BOOLEAN_FALSE;
        check(unsafe {
            call!(self, IsExtensionSupported(name.as_ptr() as *const SLchar, &mut supported))
        })?;
        Ok(supported != SL_BOOLEAN_FALSE)
    }
}
