//! Library side of the `foodmap` binary.

pub mod logging;
pub mod pipeline;
