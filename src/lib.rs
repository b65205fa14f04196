pub mod command;
pub mod retracer;
pub mod session;
