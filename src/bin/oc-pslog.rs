// src/bin/oc-pslog.rs
use logging::SubscriberConfig;

fn main() {
    if let Err(err) = logging::init(SubscriberConfig::default()) {
        eprintln!("failed to initialize logging: {err}");
    }
    match launcher::run() {
        // The report goes to the parent's own stdout, untouched by the
        // child's redirection. The parent exits 0 even when the child
        // failed; only fork/wait failures are fatal here.
        Ok(outcome) => println!("{outcome}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
