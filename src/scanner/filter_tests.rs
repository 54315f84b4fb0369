use std::path::Path;

use super::*;

fn patterns(globs: &[&str]) -> Vec<String> {
    globs.iter().map(ToString::to_string).collect()
}

#[test]
fn default_include_pattern_matches_ci_file_types() {
    let filter = GlobFilter::new(&patterns(&["**/*.{js,ts,md,json}"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("src/app.js")));
    assert!(filter.should_include(Path::new("src/deep/types.ts")));
    assert!(filter.should_include(Path::new("README.md")));
    assert!(filter.should_include(Path::new("package.json")));
    assert!(!filter.should_include(Path::new("src/main.rs")));
    assert!(!filter.should_include(Path::new("docs/guide.mdx")));
}

#[test]
fn empty_include_accepts_all() {
    let filter = GlobFilter::new(&[], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("notes.txt")));
}

#[test]
fn exclude_wins_over_include() {
    let filter = GlobFilter::new(
        &patterns(&["**/*.js"]),
        &patterns(&["**/node_modules/**", "**/*.min.js"]),
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/app.js")));
    assert!(!filter.should_include(Path::new("node_modules/pkg/index.js")));
    assert!(!filter.should_include(Path::new("web/node_modules/pkg/index.js")));
    assert!(!filter.should_include(Path::new("dist/app.min.js")));
}

#[test]
fn multiple_include_patterns_are_a_union() {
    let filter = GlobFilter::new(&patterns(&["src/**/*.ts", "docs/**"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("src/a/b.ts")));
    assert!(filter.should_include(Path::new("docs/intro.md")));
    assert!(!filter.should_include(Path::new("lib/a.ts")));
}

#[test]
fn invalid_include_pattern_is_reported() {
    let err = GlobFilter::new(&patterns(&["[invalid"]), &[]).err().unwrap();

    assert!(
        matches!(err, StringRayError::InvalidPattern { ref pattern, .. } if pattern == "[invalid")
    );
}

#[test]
fn invalid_exclude_pattern_is_reported() {
    assert!(GlobFilter::new(&[], &patterns(&["{unclosed"])).is_err());
}
