use std::ffi::c_void;

use crate::types::*;

pub const SL_BUFFERQUEUEEVENT_PROCESSED: SLuint32 = 0x00000001;
pub const SL_BUFFERQUEUEEVENT_UNREALIZED: SLuint32 = 0x00000002;
pub const SL_BUFFERQUEUEEVENT_CLEARED: SLuint32 = 0x00000004;
pub const SL_BUFFERQUEUEEVENT_STOPPED: SLuint32 = 0x00000008;
pub const SL_BUFFERQUEUEEVENT_ERROR: SLuint32 = 0x00000010;
pub const SL_BUFFERQUEUEEVENT_CONTENT_END: SLuint32 = 0x00000020;

pub type SLBufferQueueItf = *const *const SLBufferQueueItf_;

pub type slBufferQueueCallback = Option<
    unsafe extern "C" fn(
        caller: SLBufferQueueItf,
        eventFlags: SLuint32,
        pBuffer: *const c_void,
        bufferSize: SLuint32,
        dataUsed: SLuint32,
        pContext: *mut c_void,
    ),
>;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SLBufferQueueState {
    /// Buffers currently queued.
    pub count: SLuint32,
    /// Running count of buffers played or recorded since creation.
    pub index: SLuint32,
}

#[repr(C)]
pub struct SLBufferQueueItf_ {
    pub Enqueue: Option<
        unsafe extern "C" fn(
            self_: SLBufferQueueItf,
            pBuffer: *const c_void,
            size: SLuint32,
            isLastBuffer: SLboolean,
        ) -> SLresult,
    >,
    pub Clear: Option<unsafe extern "C" fn(self_: SLBufferQueueItf) -> SLresult>,
    pub GetState: Option<
        unsafe extern "C" fn(self_: SLBufferQueueItf, pState: *mut SLBufferQueueState) -> SLresult,
    >,
    pub RegisterCallback: Option<
        unsafe extern "C" fn(
            self_: SLBufferQueueItf,
            callback: slBufferQueueCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub SetCallbackEventsMask:
        Option<unsafe extern "C" fn(self_: SLBufferQueueItf, eventFlags: SLuint32) -> SLresult>,
    pub GetCallbackEventsMask: Option<
        unsafe extern "C" fn(self_: SLBufferQueueItf, pEventFlags: *mut SLuint32) -> SLresult,
    >,
}
