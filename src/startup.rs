use crate::{config::Config, error::AppError};

/// Installs the global tracing subscriber at the configured level.
///
/// # Returns
/// - `Ok(())` - Logger installed
/// - `Err(AppError::LoggerErr)` - A global subscriber was already set
pub fn init_logger(config: &Config) -> Result<(), AppError> {
    dioxus_logger::init(config.log_level).map_err(|e| AppError::LoggerErr(e.to_string()))
}

/// Builds the HTTP client used to download emoji images and guild icons.
///
/// Redirects are disabled so asset downloads can only reach the URL that was asked for.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialised
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
