//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = cruise_track_cli::run() {
        eprintln!("cruise-track: {err}");
        std::process::exit(1);
    }
}
