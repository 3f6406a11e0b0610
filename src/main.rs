//! conan-pin - install a Conan package with original dependencies

use conan_pin::cli::Cli;
use conan_pin::{commands, logging};

fn main() {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    if let Err(e) = commands::install::run(&cli) {
        eprintln!("Error: {e}");
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("Help: {help}");
        }
        std::process::exit(e.exit_code());
    }
}
