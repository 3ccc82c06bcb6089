#![forbid(unsafe_code)]

/// Errors produced by the sorteringen crates.
///
/// Ordering and classification never fail; these cover the work around
/// them (parsing input, rejecting relative namespace declarations, I/O).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    #[error("element '{element}' has a relative namespace: {name}=\"{value}\"")]
    RelativeNamespace {
        element: String,
        name: String,
        value: String,
    },

    #[error("{target}: {source}")]
    Io {
        /// The file (or stream) being read or written.
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// An I/O failure on `target`.
    pub fn io(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            target: target.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
