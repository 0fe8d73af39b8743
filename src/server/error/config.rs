use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `DEFAULT_TIMEZONE` is not a known IANA zone name.
    #[error("Invalid timezone in {var}: '{value}'")]
    InvalidTimezone {
        /// The environment variable holding the value
        var: String,
        /// The rejected zone name
        value: String,
    },
}
