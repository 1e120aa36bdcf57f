//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::init();
    if let Err(err) = scentmatch_cli::run() {
        eprintln!("scentmatch: {err}");
        std::process::exit(1);
    }
}
