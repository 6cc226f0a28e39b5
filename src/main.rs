use umbra::{Options, Viewer};

fn main() {
    env_logger::init();

    // Optional argument: path to a TOML options file
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(opts) => {
                log::info!("Loaded options from {path}");
                Some(opts)
            }
            Err(e) => {
                log::error!("Failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut builder = Viewer::builder();
    if let Some(opts) = options {
        builder = builder.with_options(opts);
    }

    if let Err(e) = builder.build().run() {
        log::error!("viewer exited with error: {e}");
        std::process::exit(1);
    }
}
