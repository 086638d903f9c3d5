//! Layered application configuration.
//!
//! Priority: CLI flag > `DOCQET_` environment > config file > defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;
use config::{Config, ConfigError, Environment as EnvSource, File};
use serde::Deserialize;

/// Default config file picked up from the working directory.
const CWD_CONFIG_FILE: &str = "config.yaml";

/// Prefix for environment overrides, e.g. `DOCQET_SERVER__PORT=8080`.
const ENV_PREFIX: &str = "DOCQET";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Deployment environment (development, testing, production)
    #[arg(long, env = "DOCQET_ENV")]
    pub environment: Option<String>,

    /// Render the site into this directory and exit instead of serving it
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

/// Deployment environment.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub app: SiteConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub environment: Environment,
    /// Directory served under `/public`.
    pub public_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Everything `main` needs: the resolved config plus one-shot CLI actions.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub export_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<LoadedConfig, ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<LoadedConfig, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("app.environment", "development")?
            .set_default("app.public_dir", "public")?
            .set_default("logging.json", false)?
            .set_default(
                "cors.allowed_origins",
                vec!["http://localhost:3000", "http://127.0.0.1:3000"],
            )?;

        if let Some(path) = config_file(cli.config.as_deref()) {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(env) = cli.environment {
            builder = builder.set_override("app.environment", env.to_lowercase())?;
        }

        let raw = builder.build()?;
        // No source sets `logging.level` by default, so presence means the
        // operator chose it.
        let level_configured = raw.get_string("logging.level").is_ok();
        let mut config: AppConfig = raw.try_deserialize()?;

        // Production always logs JSON and defaults to warn.
        if config.app.environment.is_production() {
            if !level_configured {
                config.logging.level = "warn".to_string();
            }
            config.logging.json = true;
        }

        Ok(LoadedConfig {
            config,
            export_dir: cli.export,
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                request_timeout_secs: 30,
            },
            app: SiteConfig {
                environment: Environment::Development,
                public_dir: PathBuf::from("public"),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                json: false,
            },
            cors: CorsConfig {
                allowed_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                ],
            },
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Explicit path wins; otherwise fall back to `./config.yaml` when present.
fn config_file(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
        _ => {
            let cwd = Path::new(CWD_CONFIG_FILE);
            cwd.exists().then(|| cwd.to_path_buf())
        }
    }
}
