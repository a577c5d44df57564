//! # docfind
//!
//! Thin binary over the `docfind` library. All argument handling, rendering
//! and process exit codes live in `cli`.

mod cli;

fn main() {
    cli::init_output();
    if let Err(e) = cli::commands::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
