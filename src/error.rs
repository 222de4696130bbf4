use thiserror::Error;

/// Structural problems with a vcf-compare report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unsupported diagram cardinality: found {found} VN records, only three-set comparisons (7 records) are supported")]
    UnsupportedCardinality { found: usize },
    #[error("corrupt record on line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },
    #[error("corrupt input: wrong bucket sizes (singles={singles}, duos={duos}, triples={triples}; expected 3, 3 and 1)")]
    WrongBucketSizes {
        singles: usize,
        duos: usize,
        triples: usize,
    },
    #[error("mismatched identifiers between singles and duos/triple: {0}")]
    MismatchedIdentifiers(String),
}

#[derive(Error, Debug)]
pub enum VennError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("Style error: {0}")]
    Style(#[from] serde_yaml::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
