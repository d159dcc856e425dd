/// Embedded defaults and the top-level tables each one must carry.
const EMBEDDED: &[(&str, &str, &[&str])] = &[
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        &["matching", "display"],
    ),
    (
        "src/fold/default_fold.toml",
        include_str!("src/fold/default_fold.toml"),
        &["fold"],
    ),
];

fn main() {
    for &(path, content, tables) in EMBEDDED {
        println!("cargo:rerun-if-changed={path}");
        check_embedded(path, content, tables);
    }
}

fn check_embedded(path: &str, content: &str, tables: &[&str]) {
    let doc: toml::Table = match content.parse() {
        Ok(doc) => doc,
        Err(e) => panic!("{path}: {e}"),
    };
    for name in tables {
        if !doc.get(*name).is_some_and(toml::Value::is_table) {
            panic!("{path}: missing [{name}] table");
        }
    }
}
