//! Entry point for the `ruteo` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = ruteo_server::run() {
        eprintln!("ruteo: {err}");
        std::process::exit(1);
    }
}
