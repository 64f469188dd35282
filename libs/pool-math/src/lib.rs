#![no_std]

pub mod full_math;
pub mod share_math;

pub use full_math::*;
pub use share_math::*;
