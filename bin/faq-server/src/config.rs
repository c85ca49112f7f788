//! Server configuration, loaded from environment variables at startup.
//!
//! Secret-capable values (`FAQ_LLM_API_KEY`, `FAQ_DATABASE_URL`) are read
//! from the file named by `<VAR>_FILE` first, so mounted secrets never have
//! to live in the process environment.

use std::fmt;
use std::path::PathBuf;

/// Where a secret value came from. Logged at startup; the value never is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    File(PathBuf),
    Env,
}

/// A secret string that does not print itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    value: String,
    pub source: SecretSource,
}

impl Secret {
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(***, {:?})", self.source)
    }
}

/// Runtime configuration for faq-server.
///
/// Every field except the LLM API key has a default so the server starts
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:$PORT"`, `PORT` default 5000).
    pub bind_address: String,

    /// sqlx SQLite URL (default: `"sqlite://faq.db"`). Secret-capable.
    pub database_url: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins; `None` allows any.
    pub cors_allowed_origins: Option<String>,

    /// Serve the OpenAPI document at `/api-docs/openapi.json`.
    pub enable_openapi: bool,

    /// Base URL of the website used for context.
    pub site_url: String,

    /// Per-request timeout for website fetches, in seconds.
    pub fetch_timeout_secs: u64,

    /// Base URL of the Gemini-compatible generative language API.
    pub llm_base_url: String,

    /// Model identifier passed to the API.
    pub llm_model: String,

    /// API key for the language model. Secret-capable.
    pub llm_api_key: Option<Secret>,

    /// Sampling temperature; the model default when unset.
    pub llm_temperature: Option<f32>,

    /// `GET /history` page size when the caller gives none.
    pub history_default_limit: u32,

    /// Upper bound for the caller-supplied history limit.
    pub history_max_limit: u32,

    /// Largest accepted chat message, in bytes.
    pub max_message_bytes: usize,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build [`Config`] from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let bind_address = lookup("FAQ_BIND").unwrap_or_else(|| {
            let port = lookup("PORT").unwrap_or_else(|| "5000".to_owned());
            format!("0.0.0.0:{port}")
        });

        let default_limit = parse_or(&lookup, "FAQ_HISTORY_DEFAULT_LIMIT", 20u32);
        let max_limit = parse_or(&lookup, "FAQ_HISTORY_MAX_LIMIT", 100u32).max(1);

        Self {
            bind_address,
            database_url: read_secret(&lookup, "FAQ_DATABASE_URL")
                .map(|s| s.value)
                .unwrap_or_else(|| "sqlite://faq.db".to_owned()),
            log_level: env_or("FAQ_LOG", "info"),
            log_json: lookup("FAQ_LOG_JSON").is_some_and(|v| is_truthy(&v)),
            cors_allowed_origins: lookup("FAQ_CORS_ORIGINS").filter(|v| !v.trim().is_empty()),
            enable_openapi: lookup("FAQ_ENABLE_OPENAPI").is_none_or(|v| is_truthy(&v)),
            site_url: env_or("FAQ_SITE_URL", "https://alomana.com"),
            fetch_timeout_secs: parse_or(&lookup, "FAQ_FETCH_TIMEOUT_SECS", 10),
            llm_base_url: env_or("FAQ_LLM_BASE_URL", "https://generativelanguage.googleapis.com"),
            llm_model: env_or("FAQ_LLM_MODEL", "gemini-2.0-flash"),
            llm_api_key: read_secret(&lookup, "FAQ_LLM_API_KEY"),
            llm_temperature: lookup("FAQ_LLM_TEMPERATURE").and_then(|v| v.parse().ok()),
            history_default_limit: default_limit.min(max_limit),
            history_max_limit: max_limit,
            max_message_bytes: parse_or(&lookup, "FAQ_MAX_MESSAGE_BYTES", 8 * 1024),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// `<key>_FILE` first, then `<key>`. Values are trimmed; empty means unset.
fn read_secret<F>(lookup: &F, key: &str) -> Option<Secret>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup(&format!("{key}_FILE")) {
        let path = PathBuf::from(path);
        // Tracing is not initialised yet, so warnings go to stderr.
        match std::fs::read_to_string(&path) {
            Ok(contents) if !contents.trim().is_empty() => {
                return Some(Secret {
                    value: contents.trim().to_owned(),
                    source: SecretSource::File(path),
                });
            }
            Ok(_) => eprintln!("WARN: {key}_FILE ({}) is empty; trying {key}", path.display()),
            Err(e) => eprintln!(
                "WARN: cannot read {key}_FILE ({}): {e}; trying {key}",
                path.display()
            ),
        }
    }

    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .map(|value| Secret {
            value,
            source: SecretSource::Env,
        })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
