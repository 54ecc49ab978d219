//! Regulatory country code of the loaded driver.
//!
//! The Morse Micro driver exposes its country as a module parameter. The
//! code is re-read on every call to [`active_table`]: the driver can be
//! reloaded with a different country while a caller is running.

use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, warn};

use crate::config::HostConfig;
use crate::error::HalowError;
use crate::s1g::{select_table, CountryTable};

/// Source of the active two-letter country code
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn read_country(&self) -> Result<String, HalowError>;
}

/// Reads the country from the driver's sysfs module parameter
#[derive(Debug, Clone)]
pub struct SysfsCountry {
    path: PathBuf,
}

impl SysfsCountry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &HostConfig) -> Self {
        Self::new(config.country_param.clone())
    }
}

#[async_trait]
impl CountrySource for SysfsCountry {
    async fn read_country(&self) -> Result<String, HalowError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| HalowError::io(&self.path, e))?;
        let code = parse_country_param(&contents);
        debug!("country parameter {:?} = {:?}", self.path, code);
        if code.is_empty() {
            return Err(HalowError::CountryUnavailable(format!(
                "{} is empty",
                self.path.display()
            )));
        }
        Ok(code)
    }
}

/// A fixed country code, for overrides and tests
#[derive(Debug, Clone)]
pub struct FixedCountry(pub String);

#[async_trait]
impl CountrySource for FixedCountry {
    async fn read_country(&self) -> Result<String, HalowError> {
        if self.0.is_empty() {
            return Err(HalowError::CountryUnavailable("no country set".into()));
        }
        Ok(self.0.clone())
    }
}

/// First whitespace-delimited token of the parameter, at most two characters.
pub fn parse_country_param(contents: &str) -> String {
    contents
        .split_whitespace()
        .next()
        .map(|token| token.chars().take(2).collect())
        .unwrap_or_default()
}

/// Country code from `source`, or an empty string when it cannot be read.
pub async fn read_country_code(source: &dyn CountrySource) -> String {
    match source.read_country().await {
        Ok(code) => code,
        Err(e) => {
            warn!("{e}");
            String::new()
        }
    }
}

/// Mapping table for the country currently configured on the host.
pub async fn active_table(source: &dyn CountrySource) -> Option<&'static CountryTable> {
    let code = read_country_code(source).await;
    let table = select_table(&code);
    if table.is_none() && !code.is_empty() {
        debug!("no S1G channel map for country {code:?}");
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_country_param() {
        assert_eq!(parse_country_param("US\n"), "US");
        assert_eq!(parse_country_param("  AU  \n"), "AU");
        assert_eq!(parse_country_param("USA"), "US");
        assert_eq!(parse_country_param("J"), "J");
        assert_eq!(parse_country_param(""), "");
        assert_eq!(parse_country_param(" \n"), "");
    }

    #[tokio::test]
    async fn test_fixed_country() {
        let table = active_table(&FixedCountry("KR".into())).await.unwrap();
        assert_eq!(table.country, "KR");
    }

    #[tokio::test]
    async fn test_unset_country_has_no_table() {
        assert_eq!(read_country_code(&FixedCountry(String::new())).await, "");
        assert!(active_table(&FixedCountry(String::new())).await.is_none());
        assert!(active_table(&FixedCountry("FR".into())).await.is_none());
    }

    #[tokio::test]
    async fn test_missing_sysfs_param() {
        let source = SysfsCountry::new("/nonexistent/morse/parameters/country");
        let err = source.read_country().await.unwrap_err();
        assert!(matches!(err, HalowError::Io { .. }));
        assert_eq!(read_country_code(&source).await, "");
    }
}
