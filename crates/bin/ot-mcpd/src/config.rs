use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use ot_core::client::{DEFAULT_GRAPHQL_URL, PlatformConfig};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4080";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;

#[derive(Parser, Debug)]
#[command(name = "ot-mcpd", version, about = "Open Targets MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "OT_GRAPHQL_URL", default_value = DEFAULT_GRAPHQL_URL)]
    graphql_url: String,

    #[arg(
        long,
        env = "OT_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    request_timeout_secs: u64,

    #[arg(long, env = "OT_USER_AGENT")]
    user_agent: Option<String>,

    #[arg(
        long = "http",
        env = "OT_MCP_HTTP",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    serve_http: bool,

    #[arg(long, env = "OT_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "OT_STATEFUL_SESSIONS",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    stateful_sessions: bool,

    #[arg(
        long,
        env = "OT_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct OtConfig {
    pub platform: PlatformConfig,
    pub serve_http: bool,
    pub mcp_http_addr: SocketAddr,
    pub stateful_sessions: bool,
    pub sse_keep_alive: Option<Duration>,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl OtConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for OtConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let graphql_url = args.graphql_url.trim().to_owned();
        if graphql_url.is_empty() {
            return Err(ConfigError::MissingSetting("OT_GRAPHQL_URL"));
        }
        if !graphql_url.starts_with("http://") && !graphql_url.starts_with("https://") {
            return Err(ConfigError::InvalidSetting {
                name: "OT_GRAPHQL_URL",
                value: graphql_url,
            });
        }

        if args.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "OT_REQUEST_TIMEOUT_SECS",
                value: args.request_timeout_secs.to_string(),
            });
        }

        let mut platform = PlatformConfig::default()
            .with_endpoint(graphql_url)
            .with_timeout(Duration::from_secs(args.request_timeout_secs));
        if let Some(user_agent) = args.user_agent.filter(|value| !value.trim().is_empty()) {
            platform = platform.with_user_agent(user_agent);
        }

        let sse_keep_alive = if args.sse_keep_alive_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.sse_keep_alive_secs))
        };

        Ok(Self {
            platform,
            serve_http: args.serve_http,
            mcp_http_addr: args.mcp_http_addr,
            stateful_sessions: args.stateful_sessions,
            sse_keep_alive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: None,
            serve_http: false,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            stateful_sessions: true,
            sse_keep_alive_secs: DEFAULT_SSE_KEEP_ALIVE_SECS,
        }
    }

    #[test]
    fn defaults_serve_stdio_against_platform_api() {
        let config = OtConfig::try_from(base_args()).expect("config should parse");

        assert!(!config.serve_http);
        assert_eq!(config.platform.endpoint, DEFAULT_GRAPHQL_URL);
        assert_eq!(config.platform.timeout, Duration::from_secs(30));
        assert_eq!(config.sse_keep_alive, Some(Duration::from_secs(15)));
    }

    #[test]
    fn blank_graphql_url_is_missing() {
        let mut args = base_args();
        args.graphql_url = "   ".to_string();

        let err = OtConfig::try_from(args).expect_err("blank url should fail");
        assert!(matches!(err, ConfigError::MissingSetting("OT_GRAPHQL_URL")));
    }

    #[test]
    fn non_http_scheme_is_invalid() {
        let mut args = base_args();
        args.graphql_url = "ftp://example.org/graphql".to_string();

        let err = OtConfig::try_from(args).expect_err("bad scheme should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                name: "OT_GRAPHQL_URL",
                ..
            }
        ));
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let mut args = base_args();
        args.request_timeout_secs = 0;

        let err = OtConfig::try_from(args).expect_err("zero timeout should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                name: "OT_REQUEST_TIMEOUT_SECS",
                ..
            }
        ));
    }

    #[test]
    fn zero_keep_alive_disables_sse_pings() {
        let mut args = base_args();
        args.sse_keep_alive_secs = 0;

        let config = OtConfig::try_from(args).expect("config should parse");
        assert_eq!(config.sse_keep_alive, None);
    }

    #[test]
    fn config_error_boxes_into_the_daemon_error_type() {
        let mut args = base_args();
        args.graphql_url = String::new();

        let err = OtConfig::try_from(args).expect_err("blank url should fail");
        let boxed: Box<dyn Error + Send + Sync> = Box::new(err);
        assert!(boxed.to_string().contains("OT_GRAPHQL_URL"));
    }

    #[test]
    fn blank_user_agent_keeps_the_default() {
        let mut args = base_args();
        args.user_agent = Some("  ".to_string());

        let config = OtConfig::try_from(args).expect("config should parse");
        assert!(config.platform.user_agent.starts_with("ot-mcp/"));
    }
}
