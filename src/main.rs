//! rAppearance main entrypoint.

use rappearance::run;
use rappearance::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
