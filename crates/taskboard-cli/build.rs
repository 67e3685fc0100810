use std::process::Command;

/// Short commit hash for `taskboard --version`, from the environment when
/// packaged, otherwise from git.
fn commit_hash() -> Option<String> {
    if let Ok(hash) = std::env::var("GIT_COMMIT_HASH") {
        if !hash.is_empty() && hash != "unknown" {
            return Some(hash);
        }
    }

    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string())
}

fn main() {
    println!("cargo::rerun-if-changed=../../.git/HEAD");
    println!("cargo::rerun-if-changed=../../.git/refs/heads/");
    println!("cargo::rerun-if-env-changed=GIT_COMMIT_HASH");

    let hash = commit_hash().unwrap_or_else(|| "unknown".to_string());
    println!("cargo::rustc-env=GIT_COMMIT_HASH={}", hash);
}
