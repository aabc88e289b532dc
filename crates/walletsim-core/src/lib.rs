//! Device logic for the hardware wallet simulator.
//!
//! Everything here is allocation-free and host-agnostic: front ends forward
//! button events into [`app::DeviceApp`] and draw whatever
//! [`render::DeviceView`] describes.

#![cfg_attr(not(test), no_std)]

pub mod address;
pub mod app;
pub mod input;
pub mod render;
pub mod settings;
pub mod text_policy;
pub mod wallet;
