use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

pub type Result<T, E = PqcoreError> = std::result::Result<T, E>;

/// Error type used throughout the physical type layer.
///
/// Boxed so that `Result<T>` stays a single pointer wide on the error path.
pub struct PqcoreError {
    inner: Box<PqcoreErrorInner>,
}

struct PqcoreErrorInner {
    msg: String,
    source: Option<Box<dyn Error + Send + Sync>>,
    backtrace: Backtrace,
}

impl PqcoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        PqcoreError {
            inner: Box::new(PqcoreErrorInner {
                msg: msg.into(),
                source: None,
                backtrace: Backtrace::capture(),
            }),
        }
    }

    pub fn with_source(msg: impl Into<String>, source: Box<dyn Error + Send + Sync>) -> Self {
        PqcoreError {
            inner: Box::new(PqcoreErrorInner {
                msg: msg.into(),
                source: Some(source),
                backtrace: Backtrace::capture(),
            }),
        }
    }

    pub fn get_msg(&self) -> &str {
        self.inner.msg.as_str()
    }

    pub fn get_backtrace(&self) -> &Backtrace {
        &self.inner.backtrace
    }
}

impl fmt::Display for PqcoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.msg)?;
        if let Some(source) = &self.inner.source {
            write!(f, " ({source})")?;
        }

        if self.inner.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nBacktrace:\n{}", self.inner.backtrace)?;
        }

        Ok(())
    }
}

impl fmt::Debug for PqcoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PqcoreError")
            .field("msg", &self.inner.msg)
            .field("source", &self.inner.source)
            .finish()
    }
}

impl Error for PqcoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source.as_ref().map(|e| e.as_ref() as _)
    }
}

/// Attach a message to a foreign error.
pub trait ResultExt<T, E> {
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E: Error + Send + Sync + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn context(self, msg: &'static str) -> Result<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(PqcoreError::with_source(msg, Box::new(e))),
        }
    }
}

pub trait OptionExt<T> {
    /// Error with `msg` if the option is `None`.
    fn required(self, msg: &'static str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required(self, msg: &'static str) -> Result<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(PqcoreError::new(msg)),
        }
    }
}
