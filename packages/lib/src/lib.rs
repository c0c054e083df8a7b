mod attr;
pub mod container;
mod utils;
