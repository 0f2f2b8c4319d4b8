//! Paths command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::load_config;
use crate::path::{last_segment, list_option_paths};
use crate::schema::FieldSchema;

use super::{read_options, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the paths command
pub fn run_paths(input: &Path, config: Option<&Path>) -> ExitCode {
    let config = match load_config(config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let options = match read_options(input) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let schema = FieldSchema::with_overrides(config.fields.clone());
    for path in list_option_paths(&options, &config.walk.pass_through_key) {
        let kind = schema.classify(last_segment(&path));
        println!("{}\t{}", path, kind);
    }

    ExitCode::from(EXIT_SUCCESS)
}
