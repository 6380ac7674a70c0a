//! 2D tracking camera toolkit for Bevy.
//!
//! Three cooperating pieces drive a camera once per frame: weighted focal
//! points blend into a single target pose, axis-aligned walls push the view
//! rectangle out of blocked regions, and a trauma ledger renders impacts
//! into noise-driven shake. `TrackingCameraPlugin` wires them together;
//! `CameraDebugPlugin` adds an optional tuning overlay.

pub mod components;
pub mod events;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
