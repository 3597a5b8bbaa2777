//! `helpdesk` (hd) - Single-operator helpdesk ticket tracker
//!
//! Tickets live in one local JSON snapshot. No server, no accounts.

use helpdesk::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
