//! Interaction graph representation and algorithms module

pub mod algorithms;
pub mod builder;
pub mod interaction;

pub use builder::InteractionGraphBuilder;
pub use interaction::InteractionGraph;
