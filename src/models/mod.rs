//! Data models

mod company;
mod employee;

pub use company::*;
pub use employee::*;
