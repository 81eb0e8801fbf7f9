// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declares a few arguments, resolves them from the process and prints how to
//! rerun with the same values.
//!
//! To run this example:
//! ```bash
//! export BINDARG_USER="someone"
//! cargo run --example rerun -- -h localhost -p 1234 --debug
//! ```

use bindargs::prelude::*;

arg_struct! {
    #[derive(Debug)]
    struct Args {
        host: String => "long:host,short:h",
        user: String,
        port: u16 => "short:p",
        debug: bool,
        tags: Vec<String>,
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut service = ArgService::new();
    service.bind::<Args>()?;
    service.resolve_from_process()?;

    for arg in service.registry() {
        println!(
            "args: {} => {} ({})",
            arg.long_name(),
            arg.origin(),
            arg.value()?
        );
    }

    let args: Args = service.extract()?;
    println!("args: {:?}", args);

    for arg in service.registry() {
        println!("- {}", arg);
    }

    let program = std::env::args().next().unwrap_or_else(|| "rerun".to_string());
    println!("To rerun, run: {} {}", program, service);
    Ok(())
}
