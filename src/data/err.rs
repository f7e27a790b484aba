/// Trait for getting a process exit code from an error, for binaries that
/// report a failed build or enrichment.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}
