#![no_std]

pub mod fee_math;
pub mod rate_math;

pub use fee_math::*;
pub use rate_math::*;
