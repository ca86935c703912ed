use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("failed to parse {url} with the `{backend}` backend")]
    Parse {
        url: String,
        backend: String,
        #[source]
        source: ParseError,
    },
}

impl ExtractError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, ExtractError::Fetch { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ExtractError::Parse { .. })
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported parser backend `{0}`")]
    UnsupportedBackend(String),
    #[error("byte stream is not valid {0}")]
    Decode(&'static str),
    #[error("markup errors: {}", .0.join("; "))]
    Malformed(Vec<String>),
}
