use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Askama reads templates at compile time; cargo does not track them on its own.
    watch_templates(Path::new("templates"));
    println!("cargo:rerun-if-env-changed=ACTIVITIES_BUILD_ID");

    // Stamp the binary so the page footer and startup log show which build is running.
    let build_id = std::env::var("ACTIVITIES_BUILD_ID").unwrap_or_else(|_| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs().to_string())
            .unwrap_or_else(|_| "dev".to_string())
    });
    println!("cargo:rustc-env=ACTIVITIES_BUILD_ID={}", build_id);
}

fn watch_templates(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    println!("cargo:rerun-if-changed={}", dir.display());
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            watch_templates(&path);
        } else if path.extension().is_some_and(|ext| ext == "html") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
