use std::time::Duration;

use rand::Rng;

use crate::config::GeminiConfig;
use crate::external::GeminiClient;
use crate::models::{FortuneResult, Prize};

/// 离线签文库 — API key 缺失或请求失败时随机抽取
const FALLBACK_FORTUNES: [(&str, &str); 8] = [
    ("茶汤初沸，沉浮之间见真意，静心处自有坦途。", "静"),
    ("半盏清茶，观叶舒展，人生亦如是，退一步海阔天空。", "水"),
    ("香气入魂，此刻便是永恒。莫问前程凶吉，且饮这杯温热。", "火"),
    ("苦尽甘来，回味悠长。当下的困顿，皆是未来的伏笔。", "土"),
    ("云雾散去，山峦自现。心中无挂碍，方得大自在。", "山"),
    ("如林间风，去留无意。顺势而为，好运自会敲门。", "风"),
    ("金石为开，诚意正心。坚持你所热爱的，时间会给出答案。", "金"),
    ("一期一会，难得一面。珍惜眼前人，便是最大的福报。", "缘"),
];

fn random_fallback() -> FortuneResult {
    let index = rand::thread_rng().gen_range(0..FALLBACK_FORTUNES.len());
    let (fortune, lucky_element) = FALLBACK_FORTUNES[index];
    FortuneResult {
        fortune: fortune.to_string(),
        lucky_element: lucky_element.to_string(),
    }
}

/// 签文生成服务。远程路径 (Gemini) 内部返回 AppResult,
/// 在本服务边界折叠为普通值 — 对调用方来说这个操作永不失败。
#[derive(Clone)]
pub struct FortuneService {
    client: Option<GeminiClient>,
    fallback_delay: Duration,
}

impl FortuneService {
    /// key 未配置时不构建远程客户端, 直接进入离线模式
    pub fn new(config: GeminiConfig, fallback_delay: Duration) -> Self {
        let client = if config.has_key() {
            Some(GeminiClient::new(config))
        } else {
            None
        };
        Self {
            client,
            fallback_delay,
        }
    }

    /// 为奖品生成签文。
    /// - 无 key: 等待模拟延迟后返回离线签文 (与在线路径体感一致)
    /// - 有 key: 一次远程请求, 任何失败都记日志并替换为离线签文
    pub async fn generate_fortune(&self, prize: &Prize) -> FortuneResult {
        let Some(client) = &self.client else {
            log::warn!("Gemini API key is missing, using offline fallback mode");
            tokio::time::sleep(self.fallback_delay).await;
            return random_fallback();
        };

        match client.generate_fortune(prize).await {
            Ok(fortune) => fortune,
            Err(e) => {
                log::error!("Error generating fortune, switching to fallback: {e}");
                random_fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn is_fallback(result: &FortuneResult) -> bool {
        FALLBACK_FORTUNES
            .iter()
            .any(|(f, l)| *f == result.fortune && *l == result.lucky_element)
    }

    #[test]
    fn test_fallback_table_entries_non_empty() {
        for (fortune, lucky_element) in FALLBACK_FORTUNES {
            assert!(!fortune.is_empty());
            assert!(!lucky_element.is_empty());
        }
    }

    #[test]
    fn test_random_fallback_is_table_entry() {
        for _ in 0..50 {
            assert!(is_fallback(&random_fallback()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_offline_mode_waits_simulated_delay() {
        let service = FortuneService::new(GeminiConfig::default(), Duration::from_millis(1500));
        let catalog = Catalog::builtin();

        let start = tokio::time::Instant::now();
        let result = service.generate_fortune(catalog.pick(0)).await;
        let elapsed = start.elapsed();

        // 离线路径也要保持 ~1.5s 的体感延迟
        assert!(elapsed >= Duration::from_millis(1500));
        assert!(is_fallback(&result));
        assert!(!result.fortune.is_empty());
        assert!(!result.lucky_element.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back() {
        // key 已配置但地址不可达 -> 请求失败, 折叠为离线签文
        let config = GeminiConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            ..GeminiConfig::default()
        };
        let service = FortuneService::new(config, Duration::from_millis(0));
        let catalog = Catalog::builtin();

        let result = service.generate_fortune(catalog.pick(2)).await;
        assert!(is_fallback(&result));
    }

    #[tokio::test]
    async fn test_resolves_for_every_prize() {
        let service = FortuneService::new(GeminiConfig::default(), Duration::from_millis(0));
        let catalog = Catalog::builtin();
        for prize in catalog.list() {
            let result = service.generate_fortune(prize).await;
            assert!(!result.fortune.is_empty());
            assert!(!result.lucky_element.is_empty());
        }
    }
}
