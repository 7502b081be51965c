/// Multipart field carrying the upload
pub const IMAGE_FIELD: &str = "image";

/// Prefix added to the client's filename on the cleaned copy
pub const CLEANED_FILENAME_PREFIX: &str = "cleaned_";

/// Filename used when the client sends none
pub const DEFAULT_FILENAME: &str = "image";

/// Confirmation returned with every cleaned image
pub const METADATA_AFTER: &str = "All metadata removed successfully with lossless compression.";

/// Room for multipart boundaries and part headers on top of the upload cap
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;
