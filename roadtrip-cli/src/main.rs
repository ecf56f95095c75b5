//! Entry point for the `roadtrip` command.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = roadtrip_cli::run() {
        eprintln!("roadtrip: {err}");
        std::process::exit(1);
    }
}
