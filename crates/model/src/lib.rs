pub mod automl;
pub mod pipeline;
pub mod project;
pub mod pubsub;
pub mod spec;
