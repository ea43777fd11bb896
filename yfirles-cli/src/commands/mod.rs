//! Command implementations

pub mod check;

pub use check::CheckArgs;
