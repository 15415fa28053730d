pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Why a book lookup or a search page check did not produce a value.
///
/// The [`ErrorKind`] tells the autofill whether the user sees the "not found" or the "failed"
/// notice: only [`ErrorKind::NoValue`] counts as not found.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// The broad cause of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The volumes service could not be reached, or the browser rejected a DOM call.
    IO,
    /// The response body is not a volumes document.
    Deserialize,
    /// Nothing matched: a volumes document without items, or a page element that is missing.
    NoValue,
    /// The volumes endpoint or a page URL is not an absolute URL.
    Url,
}

impl Error {
    /// An error of `kind` described by `message`.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// An error of `kind` caused by `source`, such as a `reqwest` or URL parse error.
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::IO => f.write_str("IO error")?,
            ErrorKind::Deserialize => f.write_str("Deserialize error")?,
            ErrorKind::NoValue => f.write_str("No value error")?,
            ErrorKind::Url => f.write_str("URL error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}
