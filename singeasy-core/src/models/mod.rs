pub mod artifact;
pub mod device;
pub mod error;
pub mod state;
