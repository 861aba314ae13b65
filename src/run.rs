mod cli;

pub use cli::as_cli;
