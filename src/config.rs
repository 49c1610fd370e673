//! Application configuration loaded from environment variables

use anyhow::Result;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// Secret used to sign session cookies (must be at least 32 bytes)
    pub session_secret: Option<String>,
    /// Session lifetime in seconds
    pub session_ttl_seconds: u64,
    /// Allowed CORS origins; `*` means any origin
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PORT`: HTTP listen port (default: 8001)
    /// - `SESSION_SECRET`: cookie signing secret; a random key is generated
    ///   when unset, which invalidates sessions across restarts
    /// - `SESSION_TTL_SECONDS`: session lifetime (default: 604800, 7 days)
    /// - `CORS_ORIGINS`: comma-separated allowed origins (default: `*`)
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8001".to_string())
            .parse()
            .unwrap_or(8001);

        let session_secret = std::env::var("SESSION_SECRET").ok();
        if let Some(secret) = &session_secret {
            if secret.len() < 32 {
                anyhow::bail!("SESSION_SECRET must be at least 32 bytes");
            }
        }

        let session_ttl_seconds = std::env::var("SESSION_TTL_SECONDS")
            .unwrap_or_else(|_| "604800".to_string())
            .parse()
            .unwrap_or(604_800);

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(AppConfig {
            port,
            session_secret,
            session_ttl_seconds,
            cors_origins,
        })
    }

    /// Whether any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_defaults() {
        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("SESSION_SECRET");
            std::env::remove_var("SESSION_TTL_SECONDS");
            std::env::remove_var("CORS_ORIGINS");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8001);
        assert!(config.session_secret.is_none());
        assert_eq!(config.session_ttl_seconds, 604_800);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert!(config.allows_any_origin());
    }

    #[test]
    #[serial]
    fn test_config_custom_values() {
        unsafe {
            std::env::set_var("PORT", "9000");
            std::env::set_var("SESSION_SECRET", "0123456789abcdef0123456789abcdef");
            std::env::set_var("SESSION_TTL_SECONDS", "3600");
            std::env::set_var(
                "CORS_ORIGINS",
                "http://localhost:3000, https://shop.example.com",
            );
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.session_ttl_seconds, 3600);
        assert_eq!(
            config.cors_origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://shop.example.com".to_string()
            ]
        );
        assert!(!config.allows_any_origin());

        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("SESSION_SECRET");
            std::env::remove_var("SESSION_TTL_SECONDS");
            std::env::remove_var("CORS_ORIGINS");
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_short_secret() {
        unsafe {
            std::env::set_var("SESSION_SECRET", "too-short");
        }

        let result = AppConfig::from_env();
        assert!(result.is_err());

        unsafe {
            std::env::remove_var("SESSION_SECRET");
        }
    }
}
