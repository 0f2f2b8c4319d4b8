//! Normalize command implementation

use serde_json::{Map, Value};
use std::path::Path;
use std::process::ExitCode;

use crate::assets::AssetSource;
use crate::config::{load_config, merge_cli_overrides, CliOverrides, Platform, ValidationLevel};
use crate::processor::Services;

use super::{read_options, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Arguments of `navopts normalize`
pub struct NormalizeArgs<'a> {
    pub input: &'a Path,
    pub command: &'a str,
    pub defaults: bool,
    pub config: Option<&'a Path>,
    pub platform: Option<Platform>,
    pub pass_through_key: Option<String>,
    pub assets: Option<&'a Path>,
    pub lazy_components: bool,
    pub strict: bool,
    pub output: Option<&'a Path>,
    pub show_props: bool,
}

fn read_assets(path: &Path) -> Result<Vec<AssetSource>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("Invalid asset list '{}': {}", path.display(), e))
}

/// Execute the normalize command
pub fn run_normalize(args: NormalizeArgs<'_>) -> ExitCode {
    let mut config = match load_config(args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let overrides = CliOverrides {
        pass_through_key: args.pass_through_key,
        platform: args.platform,
        deprecation_level: args.strict.then_some(ValidationLevel::Error),
        lazy_components: args.lazy_components.then_some(true),
    };
    merge_cli_overrides(&mut config, &overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("Error: {}", error);
        }
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let mut options = match read_options(args.input) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut services = Services::from_config(&config);
    tracing::debug!(
        platform = ?services.colors.platform(),
        command = args.command,
        "normalizing {}",
        args.input.display()
    );
    if let Some(path) = args.assets {
        match read_assets(path) {
            Ok(assets) => {
                for asset in assets {
                    services.assets.register(asset);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }

    let result = if args.defaults {
        services.processor().process_default_options(args.command, &mut options)
    } else {
        services.processor().process_options(args.command, &mut options)
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    let document = if args.show_props {
        let props: Map<String, Value> =
            services.props.iter().map(|(id, props)| (id.clone(), props.clone())).collect();
        let mut document = Map::new();
        document.insert("options".to_string(), Value::Object(options));
        document.insert("props".to_string(), Value::Object(props));
        Value::Object(document)
    } else {
        Value::Object(options)
    };

    let text = match serde_json::to_string_pretty(&document) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    match args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, format!("{}\n", text)) {
                eprintln!("Error: Cannot write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
        None => println!("{}", text),
    }

    let warnings = services.deprecations.take_warnings();
    for warning in &warnings {
        eprintln!("Warning: {}", warning.message);
    }
    if args.strict && !warnings.is_empty() {
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(EXIT_SUCCESS)
}
