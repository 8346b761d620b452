use std::ffi::c_void;

use crate::types::*;

pub type SLObjectItf = *const *const SLObjectItf_;

pub type slObjectCallback = Option<
    unsafe extern "C" fn(
        caller: SLObjectItf,
        pContext: *const c_void,
        event: SLuint32,
        result: SLresult,
        param: SLuint32,
        pInterface: *mut c_void,
    ),
>;

#[repr(C)]
pub struct SLObjectItf_ {
    pub Realize: Option<unsafe extern "C" fn(self_: SLObjectItf, async_: SLboolean) -> SLresult>,
    pub Resume: Option<unsafe extern "C" fn(self_: SLObjectItf, async_: SLboolean) -> SLresult>,
    pub GetState:
        Option<unsafe extern "C" fn(self_: SLObjectItf, pState: *mut SLuint32) -> SLresult>,
    /// `pInterface` receives the interface pointer, i.e. it is a `*mut SL*Itf`.
    pub GetInterface: Option<
        unsafe extern "C" fn(
            self_: SLObjectItf,
            iid: SLInterfaceID,
            pInterface: *mut c_void,
        ) -> SLresult,
    >,
    pub RegisterCallback: Option<
        unsafe extern "C" fn(
            self_: SLObjectItf,
            callback: slObjectCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
    pub AbortAsyncOperation: Option<unsafe extern "C" fn(self_: SLObjectItf)>,
    pub Destroy: Option<unsafe extern "C" fn(self_: SLObjectItf)>,
    pub SetPriority:
        Option<unsafe extern "C" fn(self_: SLObjectItf, priority: SLuint32) -> SLresult>,
    pub GetPriority:
        Option<unsafe extern "C" fn(self_: SLObjectItf, pPriority: *mut SLuint32) -> SLresult>,
    pub SetLossOfControlInterfaces: Option<
        unsafe extern "C" fn(
            self_: SLObjectItf,
            numInterfaces: SLuint16,
            pInterfaceIDs: *const SLInterfaceID,
            enabled: SLboolean,
        ) -> SLresult,
    >,
}
