//! Configuration Manager

use super::PortalConfig;
use crate::forms::validate::is_valid_email;
use crate::Result;
use anyhow::{bail, Context};
use std::path::Path;

/// Manages configuration loading and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<PortalConfig> {
        if path.exists() {
            tracing::info!("Loading configuration from: {}", path.display());
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            let config: PortalConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

            config
                .validate()
                .with_context(|| "Configuration validation failed")?;

            tracing::info!("Configuration loaded and validated successfully");
            Ok(config)
        } else {
            tracing::warn!(
                "Configuration file not found at {}, using defaults",
                path.display()
            );
            let config = PortalConfig::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env() -> Result<PortalConfig> {
        let mut config = PortalConfig::default();

        // Override with environment variables if present
        if let Ok(state_file) = std::env::var("AUTHPORTAL_STATE_FILE") {
            config.storage.state_file = state_file.into();
        }

        if let Ok(users_key) = std::env::var("AUTHPORTAL_USERS_KEY") {
            config.storage.users_key = users_key;
        }

        if let Ok(session_key) = std::env::var("AUTHPORTAL_SESSION_KEY") {
            config.storage.session_key = session_key;
        }

        if let Ok(hashing) = std::env::var("AUTHPORTAL_PASSWORD_HASHING") {
            config.policy.password_hashing = hashing
                .parse::<bool>()
                .with_context(|| format!("Invalid AUTHPORTAL_PASSWORD_HASHING: {}", hashing))?;
        }

        if let Ok(delay) = std::env::var("AUTHPORTAL_REDIRECT_DELAY") {
            config.policy.redirect_delay = humantime::parse_duration(&delay)
                .with_context(|| format!("Invalid AUTHPORTAL_REDIRECT_DELAY: {}", delay))?;
        }

        if let Ok(seed_email) = std::env::var("AUTHPORTAL_SEED_EMAIL") {
            config.seed.email = seed_email;
        }

        if let Ok(seed_password) = std::env::var("AUTHPORTAL_SEED_PASSWORD") {
            config.seed.password = seed_password;
        }

        config.validate()?;
        Ok(config)
    }
}

impl PortalConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.validate_storage_config()
            .with_context(|| "Storage configuration validation failed")?;

        self.validate_pages_config()
            .with_context(|| "Page classification validation failed")?;

        self.validate_policy_config()
            .with_context(|| "Policy configuration validation failed")?;

        self.validate_seed_config()
            .with_context(|| "Seed account validation failed")?;

        Ok(())
    }

    /// Validate storage slot keys
    fn validate_storage_config(&self) -> Result<()> {
        if self.storage.users_key.is_empty() {
            bail!("storage.users_key must not be empty");
        }

        if self.storage.session_key.is_empty() {
            bail!("storage.session_key must not be empty");
        }

        if self.storage.users_key == self.storage.session_key {
            bail!("storage.users_key and storage.session_key must differ");
        }

        Ok(())
    }

    /// Validate the page classification for disjointness
    fn validate_pages_config(&self) -> Result<()> {
        let pages = &self.pages;

        if pages.public_entry.is_empty() {
            bail!("pages.public_entry must not be empty");
        }

        if pages.interior.is_empty() {
            bail!("pages.interior must list at least one page");
        }

        if !pages.interior.contains(&pages.default_interior) {
            bail!(
                "pages.default_interior '{}' must be one of the interior pages",
                pages.default_interior
            );
        }

        // The three categories are disjoint by contract
        if pages.interior.contains(&pages.public_entry) {
            bail!(
                "pages.public_entry '{}' must not also be an interior page",
                pages.public_entry
            );
        }

        for page in &pages.neutral {
            if pages.interior.contains(page) {
                bail!("neutral page '{}' must not also be an interior page", page);
            }
            if *page == pages.public_entry {
                bail!("neutral page '{}' must not be the public entry page", page);
            }
        }

        Ok(())
    }

    /// Validate the form policy
    fn validate_policy_config(&self) -> Result<()> {
        if self.policy.min_password_len == 0 {
            bail!("policy.min_password_len must be greater than 0");
        }

        if self.policy.min_fullname_len == 0 {
            bail!("policy.min_fullname_len must be greater than 0");
        }

        if self.policy.redirect_delay.as_secs() > 60 {
            bail!("policy.redirect_delay cannot exceed 1 minute");
        }

        Ok(())
    }

    /// Validate the seed account against the active policy
    fn validate_seed_config(&self) -> Result<()> {
        if !is_valid_email(&self.seed.email) {
            bail!("seed.email '{}' is not a valid email address", self.seed.email);
        }

        if self.seed.password.chars().count() < self.policy.min_password_len {
            bail!(
                "seed.password must be at least {} characters",
                self.policy.min_password_len
            );
        }

        if self.seed.fullname.trim().chars().count() < self.policy.min_fullname_len {
            bail!(
                "seed.fullname must be at least {} characters",
                self.policy.min_fullname_len
            );
        }

        Ok(())
    }

    /// Merge with CLI arguments
    pub fn merge_with_cli_args(
        &mut self,
        state_file: Option<&Path>,
        hash_passwords: bool,
        redirect_delay_ms: Option<u64>,
    ) {
        // Override state file if provided
        if let Some(path) = state_file {
            self.storage.state_file = path.to_path_buf();
            tracing::info!("CLI override: state file set to {}", path.display());
        }

        // Opt in to hashed credential storage
        if hash_passwords {
            self.policy.password_hashing = true;
            tracing::info!("CLI override: password hashing enabled");
        }

        // Override the post-registration redirect delay
        if let Some(ms) = redirect_delay_ms {
            self.policy.redirect_delay = std::time::Duration::from_millis(ms);
            tracing::info!("CLI override: redirect delay set to {}ms", ms);
        }
    }
}
