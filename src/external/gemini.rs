use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::GeminiConfig;
use crate::error::{AppError, AppResult};
use crate::models::{FortuneResult, Prize};

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// 调用 generateContent 生成一条茶语签文。
    /// 使用结构化输出约束: JSON 对象, 两个必填字符串字段。
    /// 不重试, 不缓存; 失败由上层折叠为离线签文。
    pub async fn generate_fortune(&self, prize: &Prize) -> AppResult<FortuneResult> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(prize) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "fortune": {
                            "type": "STRING",
                            "description": "诗意的签文内容。"
                        },
                        "luckyElement": {
                            "type": "STRING",
                            "description": "与饮品关联的幸运元素。"
                        }
                    },
                    "required": ["fortune", "luckyElement"]
                }
            }
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Gemini request failed: {status}: {error_text}"
            )));
        }

        let result: GenerateContentResponse = response.json().await?;
        let text = first_text(&result)
            .ok_or_else(|| AppError::ExternalApiError("Gemini 响应为空".to_string()))?;

        parse_fortune(text)
    }
}

fn first_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .as_deref()
}

/// 解析模型返回的 JSON 文本; 两个必填字段缺失或为空都算契约违反
pub(crate) fn parse_fortune(text: &str) -> AppResult<FortuneResult> {
    let result: FortuneResult = serde_json::from_str(text)?;
    if result.fortune.trim().is_empty() || result.lucky_element.trim().is_empty() {
        return Err(AppError::ExternalApiError("签文字段为空".to_string()));
    }
    Ok(result)
}

fn build_prompt(prize: &Prize) -> String {
    format!(
        r#"你是一位居住在云南深山的智慧老茶师。
一位客人刚刚获得了一杯饮品，名为"{}"。
描述为："{}"。
风味标签为："{}"。

请为他们写一段新中式风格的“茶语签文”。
签文应神秘而充满鼓励，将饮品的特质与人生建议联系起来。
字数控制在30字以内。
同时，指定一个“幸运元素”（例如：山、水、雾、木、火、金、风）。

请以 JSON 对象格式返回。"#,
        prize.name, prize.description, prize.notes
    )
}
