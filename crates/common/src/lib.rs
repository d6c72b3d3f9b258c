pub mod io;

#[cfg(test)]
pub(crate) mod testing {
    use std::path::PathBuf;

    /// Writes `content` to a file in the temporary directory that is unique
    /// for this process and `name`.
    pub(crate) fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("common-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }
}
