/// Request and response models
pub mod models;
/// Service traits and implementations
pub mod services;
