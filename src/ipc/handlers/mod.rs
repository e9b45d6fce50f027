pub mod batch;
pub mod core;
pub mod identity;
pub mod marks;
pub mod progress;
pub mod results;
