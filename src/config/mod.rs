mod loader;
mod model;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{Config, DEFAULT_FILES, StrategyConfig};
