pub mod blueprint;
pub mod cli;

// Re-export commonly used items
pub use blueprint::Blueprint;
pub use cli::CliArgs;
