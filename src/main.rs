//! # Greeter
//!
//! Simple command line greeter written in Rust.
//!
//! Reads one line from standard input, trims surrounding whitespace and
//! prints a greeting for the given name. An empty or whitespace-only line
//! falls back to the default name.

use std::io;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::{debug, error};

mod greeting;

fn read_name() -> Result<String> {
    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .context("Reading from stdin failed!")?;
    debug!("Read {} bytes from stdin.", bytes_read);
    Ok(greeting::resolve_name(&input).to_string())
}

fn run_greeter() -> Result<String> {
    let name = read_name()?;
    debug!("Greeting name: {}", name);
    Ok(greeting::greet(&name))
}

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env).init();
}

fn main() {
    logger_init();
    match run_greeter() {
        Ok(greeting) => println!("{greeting}"),
        Err(err_msg) => {
            error!("Error: {}", err_msg);
            std::process::exit(1);
        }
    }
}
