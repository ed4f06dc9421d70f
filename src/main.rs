use std::io;
use std::process;

use teller::run;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(stdin.lock(), stdout.lock()) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
