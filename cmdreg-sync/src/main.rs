//! Binary entrypoint for `cmdreg-sync`.

mod app;

fn main() {
    if let Err(err) = app::run() {
        eprintln!("failed to start cmdreg-sync: {err}");
        std::process::exit(1);
    }
}
