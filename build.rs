use std::path::Path;
use std::process::Command;

/// Output of a git command, or `None` outside a checkout
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}

fn main() {
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        let git_dir = Path::new(&git_dir);
        for watched in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            let path = git_dir.join(watched);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }

    if let Some(describe) = git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={describe}");
    }
}
