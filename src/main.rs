//! `metri_rust` (metri) - Personal health/fitness metric tracker
//!
//! Records timestamped numeric measurements in a local `SQLite` file.
//! Local-only design: no daemon, no network interface, no background processes.

use metri_rust::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
