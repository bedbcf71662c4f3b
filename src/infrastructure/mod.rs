pub mod directories;
pub mod logging;
