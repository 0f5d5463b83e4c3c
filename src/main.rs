mod app;
mod artifact;
mod config;
mod correlator;
mod display;
mod lifecycle;
mod local_logger;
mod prelude;
mod scanner;
mod snapshot;

fn main() {
    let res = crate::app::run();
    if let Err(err) = res {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
