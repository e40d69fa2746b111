/// Commit the bundle was built from, stamped by `build.rs`.
pub fn git_commit_hash() -> &'static str {
    match option_env!("USERADMIN_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Short form for the page footer.
pub fn short_commit_hash() -> &'static str {
    let hash = git_commit_hash();
    hash.get(..7).unwrap_or(hash)
}
