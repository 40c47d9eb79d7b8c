use std::process;

fn main() {
    if let Err(e) = pling::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
