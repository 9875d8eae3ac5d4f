use anyhow::Context;

// Development fallback so the server starts without any environment set up.
// Deployments must provide their own SECRET_KEY.
const DEV_SECRET_KEY: &str = "0123456789abcdef0123456789abcdef";

pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub secret_key: [u8; 32],
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5800".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://pizzeria.db?mode=rwc".to_string());

        let secret_key = std::env::var("SECRET_KEY").unwrap_or_else(|_| {
            warn!("SECRET_KEY is not set, using the built-in development key");
            DEV_SECRET_KEY.to_string()
        });
        let secret_key: [u8; 32] = secret_key
            .into_bytes()
            .try_into()
            .ok()
            .context("SECRET_KEY must be exactly 32 bytes")?;

        Ok(Config {
            bind_addr,
            database_url,
            secret_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_secret_key_is_32_bytes() {
        assert_eq!(DEV_SECRET_KEY.len(), 32);
    }
}
