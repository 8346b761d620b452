//! Raw declarations for OpenSL ES 1.1 (`OpenSLES.h`, `OpenSLES_Platform.h`)
//! and the Android extensions in `OpenSLES_Android.h`.
//!
//! Names follow the C headers. Interfaces are pointers to pointers to
//! vtables of nullable function pointers, and keyword parameters carry a
//! trailing underscore (`self_`, `async_`, `type_`).

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]

mod buffer_queue;
mod codec;
mod data;
mod device;
mod dynamic;
mod effects;
mod engine;
mod iid;
mod metadata;
mod midi;
mod object;
mod platform;
mod playback;
mod record;
mod spatial;
mod types;
mod volume;

#[cfg(any(target_os = "android", feature = "android"))]
mod android;

#[cfg(test)]
mod tests;

pub use buffer_queue::*;
pub use codec::*;
pub use data::*;
pub use device::*;
pub use dynamic::*;
pub use effects::*;
pub use engine::*;
pub use iid::*;
pub use metadata::*;
pub use midi::*;
pub use object::*;
pub use platform::*;
pub use playback::*;
pub use record::*;
pub use spatial::*;
pub use types::*;
pub use volume::*;

#[cfg(any(target_os = "android", feature = "android"))]
pub use android::*;
