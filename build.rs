use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    // A tagged, clean checkout reports the bare crate version.
    let version = env!("CARGO_PKG_VERSION");
    let tagged = Command::new("git")
        .args(["tag", "--points-at", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.lines().any(|tag| tag == format!("v{}", version)))
        .unwrap_or(false);

    println!("cargo:rustc-env=BLOGSEARCH_GIT_HASH={}", hash);
    println!("cargo:rustc-env=BLOGSEARCH_IS_RELEASE={}", tagged);
}
