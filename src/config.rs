use clap::{builder::NonEmptyStringValueParser, Parser};

use crate::{completion::CompletionSettings, DEFAULT_MAX_BODY_BYTES};

/// Runtime configuration, read from flags or the environment at startup.
#[derive(Parser, Clone)]
#[command(version, about)]
pub struct AppConfig {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Credential for the chat-completion API
    #[arg(
        long,
        env = "OPENAI_API_KEY",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub api_key: String,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub api_base_url: String,

    /// Model identifier sent with every completion
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4")]
    pub model: String,

    /// Response length cap for generated code
    #[arg(long, env = "MAX_TOKENS", default_value_t = 500)]
    pub max_tokens: u32,

    /// Sampling temperature; low values keep output close to deterministic
    #[arg(long, env = "TEMPERATURE", default_value_t = 0.2)]
    pub temperature: f32,

    /// How many leading characters of the image payload go into the prompt
    #[arg(long, env = "PROMPT_PREFIX_CHARS", default_value_t = 100)]
    pub prompt_prefix_chars: usize,

    /// Largest accepted request body on `/convert`, in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            prompt_prefix_chars: self.prompt_prefix_chars,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
