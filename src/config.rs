#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: std::net::IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub smtp: SmtpConfig,
    pub admin_email: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub tls_mode: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: std::net::IpAddr = env_or("INTAKE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_HOST: {e}"))?;

        let port: u16 = env_or("INTAKE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_PORT: {e}"))?;

        let max_body_size: usize = env_or("INTAKE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("INTAKE_LOG_LEVEL", "info");

        let smtp = SmtpConfig {
            host: env_required("INTAKE_SMTP_HOST")?,
            port: env_or("INTAKE_SMTP_PORT", "587")
                .parse()
                .map_err(|e| format!("Invalid INTAKE_SMTP_PORT: {e}"))?,
            user: env_required("INTAKE_SMTP_USER")?,
            pass: env_required("INTAKE_SMTP_PASS")?,
            from: env_required("INTAKE_SMTP_FROM")?,
            tls_mode: env_or("INTAKE_SMTP_TLS", "starttls"),
        };

        let admin_email = env_required("INTAKE_ADMIN_EMAIL")?;

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            log_level,
            smtp,
            admin_email,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
