//! Tests run against mock devices and extensions. Nothing here needs a GPU
//! or a graphics driver.
//!
//! Matching against a real `ID3D11Device` is only reachable on Windows with
//! the driver installed and is not covered.

#![allow(dead_code)]

mod config;
