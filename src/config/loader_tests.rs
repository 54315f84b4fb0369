use std::collections::HashMap;
use std::io::{Error, ErrorKind};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file(
            "/my/project/.stringray.toml",
            "[decider]\nkind = \"noCritical\"\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.decider.kind, "noCritical");
    assert_eq!(config.checker.kind, "grammar");
}

#[test]
fn load_from_explicit_path() {
    let fs = MockFileSystem::new().with_file("/cfg/ci.toml", "files = [\"**/*.md\"]\n");

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg/ci.toml"))
        .unwrap();

    assert_eq!(config.files, vec!["**/*.md"]);
}

#[test]
fn missing_explicit_path_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();

    assert!(
        matches!(err, StringRayError::FileRead { ref path, .. } if path == Path::new("/nope.toml"))
    );
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.stringray.toml", "files = [");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, StringRayError::TomlParse(_)));
}

#[test]
fn unknown_strategy_in_file_is_rejected_on_load() {
    let fs = MockFileSystem::new().with_file(
        "/project/.stringray.toml",
        "[checker]\nkind = \"spellcheck\"\n",
    );

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, StringRayError::UnknownChecker(ref n) if n == "spellcheck"));
}

#[test]
fn wrong_field_type_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.stringray.toml", "files = \"*.js\"\n");

    assert!(FileConfigLoader::with_fs(fs).load().is_err());
}
