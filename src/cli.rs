//! CLI definitions using clap derive API

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

use crate::conan::{DEFAULT_CONAN_PROGRAM, PackageReference};

/// Conan's spelling of the profile flag, which clap cannot declare as a short
const CONAN_PROFILE_FLAG: &str = "-pr";

/// conan-pin - install a Conan package with its original dependencies
///
/// Finds the binary matching your profile on a remote, reads the dependency
/// versions it was built with and installs it with those versions pinned.
#[derive(Parser, Debug)]
#[command(
    name = "conan-pin",
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install a Conan package with original dependencies",
    long_about = "Install a Conan package so that its dependencies match the exact versions \
                  recorded when the binary was built, instead of whatever a plain \
                  `conan install` would resolve today.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  conan-pin my_app/1.2.3@user/channel -r myremote -pr ../myprofiles/mac\n    \
                  conan-pin my_app/1.2.3@user/channel -o my_option1=False -o my_option2=True \
                  -s build_type=Release -s arch=x86_64 -r myremote -pr ../myprofiles/mac\n    \
                  conan-pin my_app/1.2.3@user/channel -r myremote -pr linux --dry-run"
)]
pub struct Cli {
    /// Conan package reference in format name/version@user/channel
    #[arg(value_name = "REFERENCE")]
    pub reference: PackageReference,

    /// Conan remote
    #[arg(long, short = 'r')]
    pub remote: String,

    /// Conan profile filename to install the package for (also -pr)
    #[arg(long, short = 'p')]
    pub profile: PathBuf,

    /// Conan package option, key=value (repeatable)
    #[arg(long = "options", short = 'o', value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Conan package setting, key=value (repeatable, wins over options)
    #[arg(long = "settings", short = 's', value_name = "KEY=VALUE")]
    pub settings: Vec<String>,

    /// Conan executable to run
    #[arg(long, env = "CONAN_PIN_CONAN", default_value = DEFAULT_CONAN_PROGRAM)]
    pub conan: PathBuf,

    /// Directory for conan_search.json and conaninfo.txt
    #[arg(long, env = "CONAN_PIN_ARTIFACTS_DIR", default_value = ".")]
    pub artifacts_dir: PathBuf,

    /// Resolve and download the build info, but only print the install command
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug diagnostics on stderr
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Parse the process arguments, accepting Conan's `-pr` spelling
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Like [`Cli::try_parse_from`], accepting Conan's `-pr` spelling
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite `-pr X`, `-pr=X` and `-prX` to `--profile` forms.
///
/// Arguments after `--` are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if positional_only {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                positional_only = true;
                return arg;
            }
            match text.strip_prefix(CONAN_PROFILE_FLAG) {
                Some("") => OsString::from("--profile"),
                Some(rest) => {
                    let value = rest.strip_prefix('=').unwrap_or(rest);
                    OsString::from(format!("--profile={value}"))
                }
                None => arg,
            }
        })
        .collect()
}
