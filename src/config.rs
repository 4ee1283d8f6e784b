use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// 为空时进入离线签文模式（正常状态, 不是错误）
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 历史记录文件路径（对应前端 localStorage 的 puer_cafe_history）
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "puer_cafe_history.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// 揭晓动画的保底时长（毫秒）
    pub min_delay_ms: u64,
    /// 离线模式的模拟网络延迟（毫秒）
    pub fallback_delay_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 2500,
            fallback_delay_ms: 1500,
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 尝试读取配置文件; 不存在时全部使用默认值与环境变量
        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => {
                toml::from_str(&config_str).map_err(|e| format!("解析配置文件失败: {e}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(format!("无法读取配置文件 {config_path}: {e}").into());
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        if let Ok(v) = env::var("GEMINI_API_KEY") {
            config.gemini.api_key = v;
        }
        if let Ok(v) = env::var("GEMINI_MODEL") {
            config.gemini.model = v;
        }
        if let Ok(v) = env::var("GEMINI_BASE_URL") {
            config.gemini.base_url = v;
        }
        if let Ok(v) = env::var("HISTORY_PATH") {
            config.storage.path = v;
        }
        if let Ok(v) = env::var("REVEAL_MIN_DELAY_MS")
            && let Ok(n) = v.parse()
        {
            config.reveal.min_delay_ms = n;
        }
        if let Ok(v) = env::var("FALLBACK_DELAY_MS")
            && let Ok(n) = v.parse()
        {
            config.reveal.fallback_delay_ms = n;
        }

        Ok(config)
    }
}
