pub mod captures;
pub mod check;
pub mod pattern_loader;
pub mod run_common;
pub mod tree;

pub use run_common::PatternArgs;
