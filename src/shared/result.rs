/// Type alias for Result with anyhow::Error as the error type.
/// Domain errors are `HarvestError` values wrapped in `anyhow::Error`, so
/// callers can still downcast when they need the exit code or captured output.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
