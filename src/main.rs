//! eldlog main entrypoint.

use eldlog::run;
use eldlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
