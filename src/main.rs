//! hourbank main entrypoint.

use hourbank::run;
use hourbank::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
