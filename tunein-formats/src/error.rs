//! Error types for format parsing

/// Result type alias for format parsing operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors that can occur while parsing a remote document
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    /// The outline document has no body element
    #[error("outline document has no body element")]
    MissingBody,
}
