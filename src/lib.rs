pub mod cli;
pub mod commands;
pub mod pileup;
pub mod render;
pub mod utils;
