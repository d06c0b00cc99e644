// SPDX-License-Identifier: MPL-2.0

//! Interactive terminal front end for the calculator core.
//!
//! Demonstrates the UI collaborator contract: key characters are mapped
//! through `Symbol::from_char`, fed to the calculator, and the display
//! is rendered from the read accessors while a history subscription
//! prints each completed step as it happens.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example interactive
//! ```
//!
//! Type calculator keys and press Enter to apply them; Enter on its own
//! evaluates. Extra commands:
//!
//! - `hist`  - print the full history log
//! - `quit`  - exit
//!
//! Example session:
//!
//! ```text
//! > 5:3
//! input: 5:3    total: 0:00:00
//! > =
//! ------------------------
//! 0:05:30
//! input:        total: 0:05:30
//! > +1:0=
//! 0:06:30 = 0:05:30 + 0:01:00
//! input:        total: 0:06:30
//! ```
//!
//! Set `RUST_LOG=chronosum=debug` to watch the state transitions.

use std::io::{self, BufRead, Write};

use chronosum::{Calculator, Symbol};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut calc = Calculator::new();

    // Print each completed step as soon as it lands in the log.
    calc.on_history_appended(|entry| {
        println!("{entry}");
    });

    println!("chronosum interactive calculator");
    println!("keys: 0-9 : + - =   commands: hist, quit");
    println!();

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout();

    print!("> ");
    stdout.flush()?;

    for line in stdin.lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            "quit" | "q" => break,
            "hist" => {
                for rendered in calc.history().lines() {
                    println!("{rendered}");
                }
            }
            // Enter on its own evaluates.
            "" => {
                if let Err(e) = calc.equals() {
                    eprintln!("error: {e}");
                }
            }
            keys => {
                for c in keys.chars() {
                    match Symbol::from_char(c) {
                        Ok(symbol) => {
                            if let Err(e) = calc.apply(symbol) {
                                eprintln!("error: {e}");
                            }
                        }
                        Err(e) => eprintln!("ignored: {e}"),
                    }
                }
            }
        }

        println!("input: {:<12} total: {}", calc.pending_input(), calc.total());
        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
