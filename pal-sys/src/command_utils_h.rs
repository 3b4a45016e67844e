//! Command type identifiers shared with the command-submission layer.

#![allow(non_camel_case_types)]

use libc::c_uint;

pub type rocclr_command_type = c_uint;
pub type rocclr_stream_wait_condition = c_uint;
pub type rocclr_gl_context_property = c_uint;

// Placeholder command types for stream wait/write commands. They live above
// the range used by `cl_command_type`.
pub const ROCCLR_COMMAND_STREAM_WAIT_VALUE: rocclr_command_type = 0x4501;
pub const ROCCLR_COMMAND_STREAM_WRITE_VALUE: rocclr_command_type = 0x4502;
pub const ROCCLR_COMMAND_BATCH_STREAM: rocclr_command_type = 0x4503;

// Stream wait-value conditions
pub const ROCCLR_STREAM_WAIT_VALUE_GTE: rocclr_stream_wait_condition = 0x0;
pub const ROCCLR_STREAM_WAIT_VALUE_EQ: rocclr_stream_wait_condition = 0x1;
pub const ROCCLR_STREAM_WAIT_VALUE_AND: rocclr_stream_wait_condition = 0x2;
pub const ROCCLR_STREAM_WAIT_VALUE_NOR: rocclr_stream_wait_condition = 0x3;

// GL context sharing properties (HIP side of `cl_khr_gl_sharing`)
pub const ROCCLR_HIP_GL_CONTEXT_KHR: rocclr_gl_context_property = 0x2100;
pub const ROCCLR_HIP_GLX_DISPLAY_KHR: rocclr_gl_context_property = 0x2101;
pub const ROCCLR_HIP_WGL_HDC_KHR: rocclr_gl_context_property = 0x2102;
