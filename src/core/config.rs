use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub stripe: StripeConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

/// Configuration for session token issuing and cookie flags
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub jwt_secret: String,
    /// True when APP_ENV=production; switches the session cookie to
    /// Secure + SameSite=None for cross-site frontends
    pub production: bool,
}

/// Stripe payment-intent configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    pub api_base_url: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            session: SessionConfig::from_env()?,
            stripe: StripeConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    /// Dev frontends the hosted deployment has always allowed
    const DEFAULT_CORS_ORIGINS: &'static str = "http://localhost:5173,http://localhost:5174";

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins: Vec<String> = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| Self::DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // CORS runs with credentials enabled for the session cookie, which
        // rules out a wildcard origin
        if cors_allowed_origins.iter().any(|o| o == "*") {
            return Err(
                "CORS_ALLOWED_ORIGINS must list explicit origins; '*' is not allowed with credentials"
                    .to_string(),
            );
        }

        if cors_allowed_origins.is_empty() {
            return Err("CORS_ALLOWED_ORIGINS must not be empty".to_string());
        }

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, String> {
        // Either a full connection string, or user/pass/host interpolated into
        // the hosted-cluster URI shape
        let uri = match env::var("MONGODB_URI") {
            Ok(uri) => uri,
            Err(_) => {
                let user = env::var("DB_USER")
                    .map_err(|_| "MONGODB_URI or DB_USER/DB_PASS/DB_HOST must be set".to_string())?;
                let pass = env::var("DB_PASS")
                    .map_err(|_| "DB_PASS must be set when DB_USER is used".to_string())?;
                let db_host = env::var("DB_HOST")
                    .map_err(|_| "DB_HOST must be set when DB_USER is used".to_string())?;
                format!(
                    "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=Cluster0",
                    user, pass, db_host
                )
            }
        };

        let name = env::var("DB_NAME").unwrap_or_else(|_| "Contestify".to_string());

        Ok(Self { uri, name })
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET environment variable is required".to_string())?;

        let production = env::var("APP_ENV")
            .map(|e| e == "production")
            .unwrap_or(false);

        Ok(Self {
            jwt_secret,
            production,
        })
    }
}

impl StripeConfig {
    const DEFAULT_API_BASE_URL: &'static str = "https://api.stripe.com";

    pub fn from_env() -> Result<Self, String> {
        let secret_key = env::var("STRIPE_SECRET_KEY")
            .map_err(|_| "STRIPE_SECRET_KEY environment variable is required".to_string())?;

        let api_base_url =
            env::var("STRIPE_API_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            secret_key,
            api_base_url,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Contestify API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Contestify".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
