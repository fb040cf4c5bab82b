use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_origins(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnthropicConfig {
    #[serde(default = "default_anthropic_base")]
    pub api_base: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_anthropic_model")]
    pub default_model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_base")]
    pub api_base: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_openai_model")]
    pub default_model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    pub anthropic: Option<AnthropicConfig>,
    pub openai: Option<OpenAiConfig>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            anthropic: None,
            openai: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Protective bound on a single provider call; the upstream API defines
    /// no timeout of its own.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("ECOTRAIL").separator("__"))
            .build()?;

        let mut app_config: AppConfig = settings.try_deserialize()?;

        // Expand environment variables if present like ${ANTHROPIC_API_KEY}
        app_config.database.path = expand_env(&app_config.database.path);

        if let Some(ref mut anthropic) = app_config.llm.anthropic {
            anthropic.api_key = expand_env(&anthropic.api_key);
        }
        if let Some(ref mut openai) = app_config.llm.openai {
            openai.api_key = expand_env(&openai.api_key);
        }

        Ok(app_config)
    }
}

fn expand_env(val: &str) -> String {
    if val.starts_with("${") && val.ends_with('}') {
        let var_name = &val[2..val.len() - 1];
        std::env::var(var_name).unwrap_or_else(|_| "".to_string())
    } else {
        val.to_string()
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_path() -> String {
    "ecotrail.duckdb".to_string()
}

fn default_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_provider() -> String {
    "anthropic".to_string()
}

fn default_anthropic_base() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-7-sonnet-20250219".to_string()
}

fn default_openai_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

fn default_timeout_secs() -> u64 {
    45
}

fn default_system_prompt() -> String {
    "You are Jharkhand Tourism Assistant, an expert guide for eco-tourism and cultural tourism in Jharkhand, India.

You have deep knowledge about:
- Natural attractions: waterfalls (Hundru, Dassam, Jonha), forests, wildlife sanctuaries
- Cultural heritage: tribal traditions, festivals (Karma, Sarhul), handicrafts, folk art
- Adventure activities: trekking, rock climbing, wildlife photography
- Local communities: tribal villages, artisan workshops, homestays
- Sustainable tourism practices and eco-friendly travel tips

Always provide helpful, accurate information about Jharkhand tourism. Suggest specific places, activities, and experiences.
Be enthusiastic about promoting responsible and sustainable tourism that benefits local communities."
        .to_string()
}
