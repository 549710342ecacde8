pub mod bootstrap;
pub mod loader;
pub mod schema;

pub use bootstrap::{bootstrap, bootstrap_with, build_registry};
pub use loader::{
    find_all_config_files, load_config, load_config_from_file, resolve_config, ConfigFormat,
    ResolvedConfig,
};
pub use schema::EmitterConfig;
