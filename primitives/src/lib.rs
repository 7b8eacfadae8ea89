#![cfg_attr(not(feature = "std"), no_std)]

pub mod authority;
pub mod fees;
pub mod keeper;
pub mod roles;

pub use authority::*;
pub use fees::*;
pub use keeper::*;
pub use roles::*;
