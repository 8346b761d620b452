//! Base types of `OpenSLES_Platform.h`.
//!
//! The Khronos header leaves these to the platform. The widths here are the
//! ones every shipping implementation uses: 32-bit integers are exactly 32
//! bits wide regardless of the size of C `long`, and text is UTF-8 bytes.

pub type sl_char_t = u8;
pub type sl_uint8_t = u8;
pub type sl_int8_t = i8;
pub type sl_uint16_t = u16;
pub type sl_int16_t = i16;
pub type sl_uint32_t = u32;
pub type sl_int32_t = i32;
pub type sl_float32_t = f32;
pub type sl_float64_t = f64;

/// Only referenced by the Android extension types.
pub type sl_int64_t = i64;
pub type sl_uint64_t = u64;
