pub mod config;
pub mod format;
pub mod replay;
pub mod run;
