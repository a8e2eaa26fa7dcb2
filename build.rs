use std::env;
use std::fs;
use std::path::Path;

#[path = "src/env_file.rs"]
mod env_file;

use env_file::{parse_env_file, CONFIG_KEYS};

fn main() {
    // Always watched: creating .env after a first build must trigger a rebuild
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/env_file.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_path = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_path) else {
        return;
    };

    let parsed = parse_env_file(&contents);
    for key in &parsed.unknown {
        println!("cargo:warning=.env: ignoring unknown key `{}`", key);
    }

    for (key, value) in parsed.entries {
        // Exported variables win over .env
        if env::var(&key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
