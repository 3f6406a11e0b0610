//! Typed `conan` invocations
//!
//! Each variant maps to exactly one subcommand line. Building the argument
//! list here keeps flag spelling in a single place.

use std::path::PathBuf;

use super::reference::{FullReference, PackageReference};

/// Name of the build-info report stored next to every binary package
pub const BUILD_INFO_REMOTE_FILE: &str = "conaninfo.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConanCommand {
    /// `conan search -q <query> -r <remote> -j <json_path> <reference>`
    Search {
        reference: PackageReference,
        remote: String,
        query: String,
        json_path: PathBuf,
    },
    /// `conan get -r <remote> <reference:package_id> <file>`, contents on stdout
    Get {
        reference: FullReference,
        remote: String,
        file: String,
    },
    /// `conan install -r <remote> -pr <profile> [--require-override <dep>]... [-o ..]... [-s ..]... <reference>`
    Install {
        reference: PackageReference,
        remote: String,
        profile: PathBuf,
        require_overrides: Vec<String>,
        options: Vec<String>,
        settings: Vec<String>,
    },
}

impl ConanCommand {
    pub fn subcommand(&self) -> &'static str {
        match self {
            ConanCommand::Search { .. } => "search",
            ConanCommand::Get { .. } => "get",
            ConanCommand::Install { .. } => "install",
        }
    }

    /// Arguments following the `conan` executable, subcommand first
    pub fn to_cli_args(&self) -> Vec<String> {
        let mut args = vec![self.subcommand().to_string()];

        match self {
            ConanCommand::Search {
                reference,
                remote,
                query,
                json_path,
            } => {
                if !query.is_empty() {
                    args.extend(["-q".to_string(), query.clone()]);
                }
                args.extend([
                    "-r".to_string(),
                    remote.clone(),
                    "-j".to_string(),
                    json_path.display().to_string(),
                    reference.to_string(),
                ]);
            }
            ConanCommand::Get {
                reference,
                remote,
                file,
            } => {
                args.extend([
                    "-r".to_string(),
                    remote.clone(),
                    reference.to_string(),
                    file.clone(),
                ]);
            }
            ConanCommand::Install {
                reference,
                remote,
                profile,
                require_overrides,
                options,
                settings,
            } => {
                args.extend([
                    "-r".to_string(),
                    remote.clone(),
                    "-pr".to_string(),
                    profile.display().to_string(),
                ]);
                push_flagged(&mut args, "--require-override", require_overrides);
                push_flagged(&mut args, "-o", options);
                push_flagged(&mut args, "-s", settings);
                args.push(reference.to_string());
            }
        }

        args
    }
}

fn push_flagged(args: &mut Vec<String>, flag: &str, values: &[String]) {
    for value in values {
        args.push(flag.to_string());
        args.push(value.clone());
    }
}
