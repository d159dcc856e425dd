use std::fs;

use super::die;

pub fn table_export() {
    print!("{}", acf_core::fold::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(acf_core::fold::parse_fold_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn settings_export() {
    print!("{}", acf_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        acf_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: matching.mode={}, matching.fold_accents={}, display.max_visible_rows={}",
        s.matching.mode, s.matching.fold_accents, s.display.max_visible_rows
    );
}

/// Install custom accent table / settings before anything reads the globals.
pub fn load_overrides(table: Option<&str>, settings: Option<&str>) {
    if let Some(file) = table {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            acf_core::fold::AccentTable::init_custom(content),
            "Error in {file}: {}"
        );
    }
    if let Some(file) = settings {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            acf_core::settings::init_custom(content),
            "Error in {file}: {}"
        );
    }
}
