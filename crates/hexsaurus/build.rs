use std::process::Command;

fn main() {
    if let Ok(target) = std::env::var("TARGET") {
        println!("cargo:rustc-env=HEXSAURUS_BUILD_TARGET={target}");
    }

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok());
    // "rustc 1.85.0 (4d91de4e4 2025-02-17)" -> "1.85.0"
    if let Some(number) = version.as_deref().and_then(|v| v.split_whitespace().nth(1)) {
        println!("cargo:rustc-env=RUSTC_VERSION={number}");
    }

    println!("cargo:rerun-if-env-changed=TARGET");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
