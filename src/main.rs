//! credstore - Entry Point
//!
//! Command line front end for the flat-file credential store.

use std::env;
use std::process::ExitCode;

use log::info;

use credstore::{AuthConfig, CredentialStore, sign_in, sign_up};

const USAGE: &str = "usage: credstore signup <username> <email> <password>\n       credstore signin <username> <password>";

fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AuthConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let store = CredentialStore::new(&config.credentials_file);
    info!("using credentials file {}", store.path().display());

    let args: Vec<String> = env::args().skip(1).collect();
    let outcome = match args.as_slice() {
        [cmd, username, email, password] if cmd == "signup" => {
            sign_up(&store, &config, username, email, password)
                .map(|()| format!("Account created for {username} - you can now sign in"))
        }
        [cmd, username, password] if cmd == "signin" => sign_in(&store, username, password)
            .map(|result| format!("Welcome, {}! <{}>", result.username, result.email)),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
