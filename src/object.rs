use std::ffi::c_void;
use std::ptr;

use log::debug;
use sles::*;

use crate::interface::{call, Interface, Itf};
use crate::{check, Error, Result};

/// An OpenSL ES object (`SLObjectItf`).
pub type Object = Itf<SLObjectItf_>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObjectState {
    Unrealized,
    Realized,
    Suspended,
}

impl ObjectState {
    pub fn from_raw(state: SLuint32) -> Option<ObjectState> {
        match state {
            SL_OBJECT_STATE_UNREALIZED => Some(ObjectState::Unrealized),
            SL_OBJECT_STATE_REALIZED => Some(ObjectState::Realized),
            SL_OBJECT_STATE_SUSPENDED => Some(ObjectState::Suspended),
            _ => None,
        }
    }

    pub fn to_raw(self) -> SLuint32 {
        match self {
            ObjectState::Unrealized => SL_OBJECT_STATE_UNREALIZED,
            ObjectState::Realized => SL_OBJECT_STATE_REALIZED,
            ObjectState::Suspended => SL_OBJECT_STATE_SUSPENDED,
        }
    }
}

impl Itf<SLObjectItf_> {
    /// Allocates the object's resources, blocking until done.
    pub fn realize(&self) -> Result<()> {
        check(unsafe { call!(self, Realize(SL_BOOLEAN_FALSE)) })
    }

    /// Starts realization; completion is reported through the object callback.
    pub fn realize_async(&self) -> Result<()> {
        check(unsafe { call!(self, Realize(SL_BOOLEAN_TRUE)) })
    }

    /// Brings a suspended object back to the realized state.
    pub fn resume(&self) -> Result<()> {
        check(unsafe { call!(self, Resume(SL_BOOLEAN_FALSE)) })
    }

    pub fn state(&self) -> Result<ObjectState> {
        let mut state = 0;
        check(unsafe { call!(self, GetState(&mut state)) })?;

        ObjectState::from_raw(state).ok_or(Error::UnexpectedValue(state, "object state"))
    }

    /// Looks up the interface `T` exposed by this object.
    pub fn interface<T: Interface>(&self) -> Result<Itf<T>> {
        unsafe { self.interface_by_id(T::iid()) }
    }

    /// # Safety
    ///
    /// `iid` must identify an interface whose vtable type is `T`.
    pub unsafe fn interface_by_id<T>(&self, iid: SLInterfaceID) -> Result<Itf<T>> {
        let mut raw: *const *const T = ptr::null();
        let result = call!(self, GetInterface(iid, &mut raw as *mut _ as *mut c_void));
        if let Err(error) = check(result) {
            debug!("GetInterface({}) failed: {error}", describe_iid(iid));
            return Err(error);
        }

        Itf::from_raw(raw).ok_or(Error::InternalError)
    }

    pub fn set_priority(&self, priority: SLuint32) -> Result<()> {
        check(unsafe { call!(self, SetPriority(priority)) })
    }

    pub fn priority(&self) -> Result<SLuint32> {
        let mut priority = 0;
        check(unsafe { call!(self, GetPriority(&mut priority)) })?;
        Ok(priority)
    }

    /// Marks the given interfaces as (not) reporting loss of control.
    pub fn set_loss_of_control_interfaces(
        &self,
        iids: &[SLInterfaceID],
        enabled: bool,
    ) -> Result<()> {
        let count = SLuint16::try_from(iids.len())
            .map_err(|_| Error::InvalidArgument("too many interface IDs"))?;

        check(unsafe {
            call!(self, SetLossOfControlInterfaces(count, iids.as_ptr(), enabled as SLboolean))
        })
    }

    pub fn abort_async_operation(&self) -> Result<()> {
        unsafe { call!(self, AbortAsyncOperation()) };
        Ok(())
    }

    /// # Safety
    ///
    /// `context` is passed to `callback` as is and must stay valid until the
    /// callback is replaced or the object is destroyed.
    pub unsafe fn register_callback(
        &self,
        callback: slObjectCallback,
        context: *mut c_void,
    ) -> Result<()> {
        check(call!(self, RegisterCallback(callback, context)))
    }

    /// Destroys the object and every interface obtained from it.
    ///
    /// # Safety
    ///
    /// No handle derived from this object may be used afterwards, including
    /// copies of `self`.
    pub unsafe fn destroy(self) -> Result<()> {
        call!(self, Destroy());
        Ok(())
    }
}

pub(crate) fn describe_iid(iid: SLInterfaceID) -> String {
    match unsafe { iid.as_ref() } {
        Some(iid) => iid.to_string(),
        None => "null".to_string(),
    }
}
