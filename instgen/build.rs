use std::process::Command;

fn main() {
    // `instgen --version` reports the commit it was built from
    let commit = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| String::from("unknown"));
    println!("cargo:rustc-env=INSTGEN_COMMIT={commit}");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
