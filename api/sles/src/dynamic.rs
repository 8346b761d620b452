use std::ffi::c_void;

use crate::data::{SLDataSink, SLDataSource};
use crate::types::*;

pub type SLDynamicSourceItf = *const *const SLDynamicSourceItf_;

#[repr(C)]
pub struct SLDynamicSourceItf_ {
    pub SetSource: Option<
        unsafe extern "C" fn(
            self_: SLDynamicSourceItf,
            pDataSource: *const SLDataSource,
        ) -> SLresult,
    >,
}

pub type SLDynamicSourceSinkChangeItf = *const *const SLDynamicSourceSinkChangeItf_;

pub type slSourceChangeCallback = Option<
    unsafe extern "C" fn(
        caller: SLDynamicSourceSinkChangeItf,
        pContext: *mut c_void,
        resultCode: SLuint32,
        pExistingDataSource: *const SLDataSource,
        pNewDataSource: *const SLDataSource,
    ),
>;

/// The sink arguments are declared as `SLDataSource` in `OpenSLES.h`. Both
/// structs share one layout.
pub type slSinkChangeCallback = Option<
    unsafe extern "C" fn(
        caller: SLDynamicSourceSinkChangeItf,
        pContext: *mut c_void,
        resultCode: SLuint32,
        pExistingDataSink: *const SLDataSource,
        pNewDataSink: *const SLDataSource,
    ),
>;

#[repr(C)]
pub struct SLDynamicSourceSinkChangeItf_ {
    pub ChangeSource: Option<
        unsafe extern "C" fn(
            self_: SLDynamicSourceSinkChangeItf,
            pExistingDataSource: *const SLDataSource,
            pNewDataSource: *const SLDataSource,
            async_: SLboolean,
        ) -> SLresult,
    >,
    pub ChangeSink: Option<
        unsafe extern "C" fn(
            self_: SLDynamicSourceSinkChangeItf,
            pExistingDataSink: *const SLDataSink,
            pNewDataSink: *const SLDataSink,
            async_: SLboolean,
        ) -> SLresult,
    >,
    pub RegisterSourceChangeCallback: Option<
        unsafe extern "C" fn(
            self_: SLDynamicSourceSinkChangeItf,
            callback: slSourceChangeCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub RegisterSinkChangeCallback: Option<
        unsafe extern "C" fn(
            self_: SLDynamicSourceSinkChangeItf,
            callback: slSinkChangeCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
}

pub const SL_DYNAMIC_ITF_EVENT_RUNTIME_ERROR: SLuint32 = 0x00000001;
pub const SL_DYNAMIC_ITF_EVENT_ASYNC_TERMINATION: SLuint32 = 0x00000002;
pub const SL_DYNAMIC_ITF_EVENT_RESOURCES_LOST: SLuint32 = 0x00000003;
pub const SL_DYNAMIC_ITF_EVENT_RESOURCES_LOST_PERMANENTLY: SLuint32 = 0x00000004;
pub const SL_DYNAMIC_ITF_EVENT_RESOURCES_AVAILABLE: SLuint32 = 0x00000005;

pub type SLDynamicInterfaceManagementItf = *const *const SLDynamicInterfaceManagementItf_;

pub type slDynamicInterfaceManagementCallback = Option<
    unsafe extern "C" fn(
        caller: SLDynamicInterfaceManagementItf,
        pContext: *mut c_void,
        event: SLuint32,
        result: SLresult,
        iid: SLInterfaceID,
    ),
>;

#[repr(C)]
pub struct SLDynamicInterfaceManagementItf_ {
    pub AddInterface: Option<
        unsafe extern "C" fn(
            self_: SLDynamicInterfaceManagementItf,
            iid: SLInterfaceID,
            async_: SLboolean,
        ) -> SLresult,
    >,
    pub RemoveInterface: Option<
        unsafe extern "C" fn(
            self_: SLDynamicInterfaceManagementItf,
            iid: SLInterfaceID,
        ) -> SLresult,
    >,
    pub ResumeInterface: Option<
        unsafe extern "C" fn(
            self_: SLDynamicInterfaceManagementItf,
            iid: SLInterfaceID,
            async_: SLboolean,
        ) -> SLresult,
    >,
    pub RegisterCallback: Option<
        unsafe extern "C" fn(
            self_: SLDynamicInterfaceManagementItf,
            callback: slDynamicInterfaceManagementCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
}
