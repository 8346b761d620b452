//! Typed access to OpenSL ES 1.1.
//!
//! Interface handles ([`Itf`]) wrap the raw `SL*Itf` pointers from [`sys`]
//! and turn result codes into [`Error`]s. Object lifetimes stay manual: an
//! object lives until `destroy` is called on it.
//!
//! ```ignore
//! use opensles::{create_engine, Engine, EngineOptions, InterfaceRequest};
//!
//! let engine_object = create_engine(&EngineOptions::new(), &InterfaceRequest::new())?;
//! engine_object.realize()?;
//! let engine: Engine = engine_object.interface()?;
//! let mix = engine.create_output_mix(&InterfaceRequest::new())?;
//! mix.realize()?;
//! ```

pub use sles as sys;

mod buffer_queue;
mod engine;
mod error;
mod format;
mod interface;
mod object;
mod play;
mod record;
mod units;
mod volume;

#[cfg(any(target_os = "android", feature = "android"))]
mod android;

#[cfg(test)]
mod tests;

pub use buffer_queue::{BufferQueue, BufferQueueEvents};
pub use engine::{
    create_engine, supported_engine_interfaces, Engine, EngineOptions, InterfaceRequest,
};
pub use error::{check, Error, Result};
pub use format::{millihertz, ByteOrder, PcmFormat, SampleFormat, Speakers};
pub use interface::{Interface, Itf};
pub use object::{Object, ObjectState};
pub use play::{Play, PlayEvents, PlayState};
pub use record::{Record, RecordEvents, RecordState};
pub use units::{gain_from_millibel, millibel_from_gain};
pub use volume::Volume;

#[cfg(any(target_os = "android", feature = "android"))]
pub use android::{AndroidConfiguration, SimpleBufferQueue};
