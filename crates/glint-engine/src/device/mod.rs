//! GPU device + surface management.
//!
//! Responsible for creating the wgpu instance/adapter/device/queue,
//! configuring the swapchain surface, and acquiring/submitting frames.

mod gpu;

pub(crate) use gpu::{Gpu, SurfaceErrorAction};
