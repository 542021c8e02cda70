pub mod results;
pub mod sensors;
pub mod system;
