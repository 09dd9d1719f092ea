//! Business logic services
//!
//! Services validate requests and coordinate between the HTTP layer
//! and the calculation engine.

pub mod wizard;

pub use wizard::WizardService;
