/// Error type for hexcover operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HexCoverError {
    /// The input text is missing or could not be parsed as WKT or GeoJSON.
    ParseError(String),
    /// The viewport corners do not form a valid rectangle.
    ClippingError(String),
    /// The resolution is outside the valid range (0-15).
    InvalidResolution(u8),
    /// A composite geometry contained an empty member.
    MalformedGeometry(String),
    /// The polygon produced more cells than the configured ceiling.
    ResultTooLarge { name: String, resolution: u8 },
    /// A cell boundary could not be serialized.
    EncodingError(String),
    /// Catch-all for failures with no dedicated classification.
    Unexpected(String),
}

impl std::fmt::Display for HexCoverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexCoverError::ParseError(msg) => write!(f, "{}", msg),
            HexCoverError::ClippingError(msg) => write!(f, "{}", msg),
            HexCoverError::InvalidResolution(r) => write!(f, "Invalid resolution: {}", r),
            HexCoverError::MalformedGeometry(msg) => write!(f, "{}", msg),
            HexCoverError::ResultTooLarge { name, resolution } => write!(
                f,
                "Polygon {} contains too many hexes at resolution {}!",
                name, resolution
            ),
            HexCoverError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
            HexCoverError::Unexpected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HexCoverError {}
