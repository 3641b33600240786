use std::env;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_MESSAGE: &str = "Hello World";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to construct service: {0}")]
    Construction(String),
    #[error("main_function failed: {0}")]
    Invocation(String),
}

/// The one capability both front ends expose.
pub trait MainService: Send {
    fn main_function(&self) -> Result<String, ServiceError>;
}

/// Builds a fresh [`MainService`] for every request or command invocation.
pub trait ServiceFactory: Send + Sync + 'static {
    fn create(&self) -> Result<Box<dyn MainService>, ServiceError>;
}

impl<F, S> ServiceFactory for F
where
    F: Fn() -> Result<S, ServiceError> + Send + Sync + 'static,
    S: MainService + 'static,
{
    fn create(&self) -> Result<Box<dyn MainService>, ServiceError> {
        let service = self()?;
        Ok(Box::new(service))
    }
}

/// Default service: answers with a message taken from `SAUBER_MESSAGE`.
#[derive(Debug, Clone)]
pub struct StaticMessageService {
    message: String,
}

impl StaticMessageService {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn from_env() -> Result<Self, ServiceError> {
        match env::var("SAUBER_MESSAGE") {
            Ok(message) => Ok(Self::new(message)),
            Err(env::VarError::NotPresent) => Ok(Self::new(DEFAULT_MESSAGE)),
            Err(e) => Err(ServiceError::Construction(format!("SAUBER_MESSAGE: {}", e))),
        }
    }
}

impl MainService for StaticMessageService {
    fn main_function(&self) -> Result<String, ServiceError> {
        debug!("main_function called");
        Ok(self.message.clone())
    }
}

/// Factory used by both binaries.
pub fn default_factory() -> impl ServiceFactory {
    StaticMessageService::from_env
}
