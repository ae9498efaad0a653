//! Session orchestration and access gating.

pub mod controller;
pub mod gate;
