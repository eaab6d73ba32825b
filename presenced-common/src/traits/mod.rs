// File: presenced-common/src/traits/mod.rs
pub mod presence_traits;
