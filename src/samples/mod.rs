//! Sample card numbers for tests, demos and benchmarks.

pub mod generator;

pub use generator::SampleGenerator;
