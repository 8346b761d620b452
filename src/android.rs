use std::ffi::{c_void, CString};
use std::mem;

use sles::*;

use crate::buffer_queue::buffer_size;
use crate::interface::{call, Itf};
use crate::{check, Error, Result};

/// Android's simple buffer queue (`SLAndroidSimpleBufferQueueItf`).
pub type SimpleBufferQueue = Itf<SLAndroidSimpleBufferQueueItf_>;

impl Itf<SLAndroidSimpleBufferQueueItf_> {
    /// # Safety
    ///
    /// The queue keeps a pointer to `buffer`; it must stay alive and unmodified
    /// until the callback reports it consumed or the queue is cleared.
    pub unsafe fn enqueue(&self, buffer: &[u8]) -> Result<()> {
        let size = buffer_size(buffer)?;
        check(call!(self, Enqueue(buffer.as_ptr() as *const c_void, size)))
    }

    pub fn clear(&self) -> Result<()> {
        check(unsafe { call!(self, Clear()) })
    }

    pub fn state(&self) -> Result<SLAndroidSimpleBufferQueueState> {
        let mut state = SLAndroidSimpleBufferQueueState::default();
        check(unsafe { call!(self, GetState(&mut state)) })?;
        Ok(state)
    }

    /// The callback fires once per consumed buffer.
    ///
    /// # Safety
    ///
    /// `context` is passed to `callback` as is and must stay valid until the
    /// callback is replaced or the player is destroyed.
    pub unsafe fn register_callback(
        &self,
        callback: slAndroidSimpleBufferQueueCallback,
        context: *mut c_void,
    ) -> Result<()> {
        check(call!(self, RegisterCallback(callback, context)))
    }
}

/// Android object configuration (`SLAndroidConfigurationItf`).
///
/// Configuration has to happen before the object is realized.
pub type AndroidConfiguration = Itf<SLAndroidConfigurationItf_>;

impl Itf<SLAndroidConfigurationItf_> {
    /// Sets a 32-bit configuration value such as
    /// `SL_ANDROID_KEY_PERFORMANCE_MODE`.
    pub fn set_u32(&self, key: &[u8], value: SLuint32) -> Result<()> {
        let key = config_key(key)?;
        check(unsafe {
            call!(
                self,
                SetConfiguration(
                    key.as_ptr() as *const SLchar,
                    &value as *const SLuint32 as *const c_void,
                    mem::size_of::<SLuint32>() as SLuint32,
                )
            )
        })
    }

    pub fn u32(&self, key: &[u8]) -> Result<SLuint32> {
        let key = config_key(key)?;
        let mut value: SLuint32 = 0;
        let mut size = mem::size_of::<SLuint32>() as SLuint32;
        check(unsafe {
            call!(
                self,
                GetConfiguration(
                    key.as_ptr() as *const SLchar,
                    &mut size,
                    &mut value as *mut SLuint32 as *mut c_void,
                )
            )
        })?;
        Ok(value)
    }
}

/// Accepts keys with or without a trailing NUL.
fn config_key(key: &[u8]) -> Result<CString> {
    let key = key.strip_suffix(b"\0").unwrap_or(key);
    CString::new(key).map_err(|_| Error::InvalidArgument("configuration key contains a NUL byte"))
}
