// Instance files on disk
mod instance_io;

pub use instance_io::{load_instance, save_instance};
