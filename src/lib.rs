// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - terminal output
pub mod rendering;

// Re-exports for convenience
pub use application::Simulation;
pub use domain::{Cell, Grid, Pattern, presets};
