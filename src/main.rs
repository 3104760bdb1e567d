//! hiasify main entrypoint.

use hiasify::run;
use hiasify::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
