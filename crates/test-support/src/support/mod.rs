pub mod generators;
pub mod tracers;
