//! Look and feel of the Learner's Point site.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
