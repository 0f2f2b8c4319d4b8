//! navopts - Options normalization for cross-platform navigation renderers
//!
//! Screen and layout options arrive in a loose, author-friendly shape: CSS
//! color strings, bundled image handles, legacy shorthands and inline
//! component props. This library rewrites them in place into the canonical
//! shape native renderers consume:
//! - Resolve colors and images into native values
//! - Assign component ids and move `passProps` out of band
//! - Expand legacy shorthands and report them as deprecated
//! - Run per-path processors registered by the host
//!
//! ```
//! use navopts::Services;
//! use serde_json::json;
//!
//! let mut services = Services::default();
//! let mut options = json!({ "topBar": { "searchBar": true } });
//! services
//!     .processor()
//!     .process_options("push", options.as_object_mut().unwrap())
//!     .unwrap();
//! assert_eq!(options["topBar"]["searchBar"]["visible"], json!(true));
//! ```

pub mod assets;
pub mod cli;
pub mod color;
pub mod config;
pub mod deprecations;
pub mod error;
pub mod ids;
pub mod path;
pub mod processor;
pub mod registry;
pub mod schema;
pub mod store;
pub mod transforms;

pub use error::{NormalizeError, Result};
pub use processor::{Collaborators, OptionsProcessor, Services};
