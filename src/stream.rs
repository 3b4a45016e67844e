//! Stream command identifiers of the command-submission layer.
//!
//! These only name things. Nothing here waits on or writes stream values.

use std::fmt;
use enum_primitive::FromPrimitive;
use crate::error::{Error, Result};

enum_from_primitive! {
    /// Command types of stream wait, write and batch commands.
    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum StreamCommandType {
        WaitValue = pal_sys::ROCCLR_COMMAND_STREAM_WAIT_VALUE as isize,
        WriteValue = pal_sys::ROCCLR_COMMAND_STREAM_WRITE_VALUE as isize,
        BatchStream = pal_sys::ROCCLR_COMMAND_BATCH_STREAM as isize,
    }
}

enum_from_primitive! {
    /// Condition of a stream wait-value command.
    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum StreamWaitCondition {
        Gte = pal_sys::ROCCLR_STREAM_WAIT_VALUE_GTE as isize,
        Eq = pal_sys::ROCCLR_STREAM_WAIT_VALUE_EQ as isize,
        And = pal_sys::ROCCLR_STREAM_WAIT_VALUE_AND as isize,
        Nor = pal_sys::ROCCLR_STREAM_WAIT_VALUE_NOR as isize,
    }
}

enum_from_primitive! {
    /// GL context sharing property keys.
    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum GlSharingProperty {
        GlContextKhr = pal_sys::ROCCLR_HIP_GL_CONTEXT_KHR as isize,
        GlxDisplayKhr = pal_sys::ROCCLR_HIP_GLX_DISPLAY_KHR as isize,
        WglHdcKhr = pal_sys::ROCCLR_HIP_WGL_HDC_KHR as isize,
    }
}

macro_rules! impl_raw_code {
    ($ty:ident, $kind:expr, { $($variant:ident => $name:expr),+ $(,)* }) => {
        impl $ty {
            /// Converts a raw identifier, rejecting unknown codes.
            pub fn from_raw(code: u32) -> Result<$ty> {
                $ty::from_u32(code).ok_or(Error::UnknownCode { kind: $kind, code })
            }

            pub fn as_raw(self) -> u32 {
                self as u32
            }

            /// The symbolic name of the identifier.
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

impl_raw_code!(StreamCommandType, "stream command type", {
    WaitValue => "ROCCLR_COMMAND_STREAM_WAIT_VALUE",
    WriteValue => "ROCCLR_COMMAND_STREAM_WRITE_VALUE",
    BatchStream => "ROCCLR_COMMAND_BATCH_STREAM",
});

impl_raw_code!(StreamWaitCondition, "stream wait condition", {
    Gte => "ROCCLR_STREAM_WAIT_VALUE_GTE",
    Eq => "ROCCLR_STREAM_WAIT_VALUE_EQ",
    And => "ROCCLR_STREAM_WAIT_VALUE_AND",
    Nor => "ROCCLR_STREAM_WAIT_VALUE_NOR",
});

impl_raw_code!(GlSharingProperty, "GL sharing property", {
    GlContextKhr => "ROCCLR_HIP_GL_CONTEXT_KHR",
    GlxDisplayKhr => "ROCCLR_HIP_GLX_DISPLAY_KHR",
    WglHdcKhr => "ROCCLR_HIP_WGL_HDC_KHR",
});
