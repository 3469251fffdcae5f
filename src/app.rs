pub mod config;
mod logging;

use std::{path::Path, process::ExitCode};

use config::Config;
use tracing::warn;

use crate::{error::UpdateError, updater};

pub struct Request {
    pub file_path: String,
    pub section: String,
    pub key: String,
    pub value: String,
}

pub struct CliApp {
    config: Config,
    request: Request,
}

impl CliApp {
    pub fn new(request: Request) -> Self {
        let (config, errors) = Config::load();
        logging::init(&config.log_level);
        errors.iter().for_each(|error| warn!("{error}"));

        Self { config, request }
    }

    pub fn run(&self) -> ExitCode {
        let Request {
            file_path,
            section,
            key,
            value,
        } = &self.request;
        let result = updater::update(Path::new(file_path), section, key, value, &self.config);

        println!("{}", report(file_path, &result));
        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        }
    }
}

fn report(file_path: &str, result: &Result<(), UpdateError>) -> String {
    match result {
        Ok(()) => format!("Successfully updated {file_path}"),
        Err(error) => format!("Error updating {file_path}: {error}"),
    }
}
