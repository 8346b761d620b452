use std::ffi::c_void;

use bitflags::bitflags;
use sles::*;

use crate::interface::{call, Itf};
use crate::{check, Error, Result};

/// The OpenSL ES buffer queue of a player (`SLBufferQueueItf`).
pub type BufferQueue = Itf<SLBufferQueueItf_>;

pub(crate) fn buffer_size(buffer: &[u8]) -> Result<SLuint32> {
    SLuint32::try_from(buffer.len()).map_err(|_| Error::InvalidArgument("buffer too large"))
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct BufferQueueEvents: SLuint32 {
        const PROCESSED = SL_BUFFERQUEUEEVENT_PROCESSED;
        const UNREALIZED = SL_BUFFERQUEUEEVENT_UNREALIZED;
        const CLEARED = SL_BUFFERQUEUEEVENT_CLEARED;
        const STOPPED = SL_BUFFERQUEUEEVENT_STOPPED;
        const ERROR = SL_BUFFERQUEUEEVENT_ERROR;
        const CONTENT_END = SL_BUFFERQUEUEEVENT_CONTENT_END;
    }
}

impl Itf<SLBufferQueueItf_> {
    /// Appends a buffer to the queue.
    ///
    /// # Safety
    ///
    /// The queue keeps a pointer to `buffer`; it must stay alive and unmodified
    /// until the implementation reports it processed or the queue is cleared.
    pub unsafe fn enqueue(&self, buffer: &[u8], is_last: bool) -> Result<()> {
        let size = buffer_size(buffer)?;
        check(call!(
            self,
            Enqueue(buffer.as_ptr() as *const c_void, size, is_last as SLboolean)
        ))
    }

    /// Drops all queued buffers.
    pub fn clear(&self) -> Result<()> {
        check(unsafe { call!(self, Clear()) })
    }

    pub fn state(&self) -> Result<SLBufferQueueState> {
        let mut state = SLBufferQueueState::default();
        check(unsafe { call!(self, GetState(&mut state)) })?;
        Ok(state)
    }

    pub fn set_event_mask(&self, events: BufferQueueEvents) -> Result<()> {
        check(unsafe { call!(self, SetCallbackEventsMask(events.bits())) })
    }

    /// Bits this crate does not know are dropped.
    pub fn event_mask(&self) -> Result<BufferQueueEvents> {
        let mut events = 0;
        check(unsafe { call!(self, GetCallbackEventsMask(&mut events)) })?;
        Ok(BufferQueueEvents::from_bits_truncate(events))
    }

    /// # Safety
    ///
    /// `context` is passed to `callback` as is and must stay valid until the
    /// callback is replaced or the player is destroyed.
    pub unsafe fn register_callback(
        &self,
        callback: slBufferQueueCallback,
        context: *mut c_void,
    ) -> Result<()> {
        check(call!(self, RegisterCallback(callback, context)))
    }
}
