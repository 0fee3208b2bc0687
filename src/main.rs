//! bikeshare main entrypoint.

use bikeshare::errors::AppError;
use bikeshare::run;
use bikeshare::ui::messages;
use std::io;

fn main() {
    println!();
    match run() {
        Ok(()) => {}
        Err(AppError::InputClosed) => {
            println!("\nInput closed, goodbye.");
        }
        Err(e) => {
            let _ = messages::error(&mut io::stderr(), format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
