use std::fmt::{Display, Formatter};

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a failed [`Provisioner`](super::Provisioner) call leaves in the account. Resources made by
/// earlier successful calls are not covered; the caller knows about those from the call order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Resources {
    /// The call created something before it failed.
    Remaining,

    /// The call failed before creating anything.
    Clear,

    /// The call cannot tell whether it created anything.
    Unknown,
}

impl Display for Resources {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Resources::Remaining => "the failed step left resources behind",
            Resources::Clear => "the failed step created nothing",
            Resources::Unknown => "the failed step may have left resources behind",
        })
    }
}

/// The error type returned by [`Provisioner`](super::Provisioner) implementations.
#[derive(Debug)]
pub struct ProvisionError {
    resources: Resources,
    message: String,
    source: Option<BoxedError>,
}

/// The result type returned by [`Provisioner`](super::Provisioner) operations.
pub type ProvisionResult<T> = std::result::Result<T, ProvisionError>;

impl ProvisionError {
    pub fn new<S: Into<String>>(resources: Resources, message: S) -> Self {
        Self {
            resources,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the error that caused this one.
    pub fn with_source<E: Into<BoxedError>>(mut self, source: E) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn resources(&self) -> Resources {
        self.resources
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ProvisionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.message, source),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ProvisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Turn results and options into a `ProvisionResult`, recording what the failure left behind.
pub trait IntoProvisionError<T> {
    fn context<S>(self, resources: Resources, message: S) -> ProvisionResult<T>
    where
        S: Into<String>;
}

impl<T, E> IntoProvisionError<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<S>(self, resources: Resources, message: S) -> ProvisionResult<T>
    where
        S: Into<String>,
    {
        self.map_err(|e| ProvisionError::new(resources, message).with_source(e))
    }
}

impl<T> IntoProvisionError<T> for Option<T> {
    fn context<S>(self, resources: Resources, message: S) -> ProvisionResult<T>
    where
        S: Into<String>,
    {
        self.ok_or_else(|| ProvisionError::new(resources, message))
    }
}
