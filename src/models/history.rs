use serde::{Deserialize, Serialize};

/// 开盒历史记录。追加后不再修改或删除;
/// 字段名沿用前端 localStorage 的 JSON 格式 (camelCase)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// 会话内唯一 ID (创建时刻的毫秒时间戳)
    pub id: String,
    pub prize_id: String,
    /// 奖品名称快照 (目录变更后历史仍然可读)
    pub prize_name: String,
    pub prize_image: String,
    pub fortune: String,
    pub lucky_element: String,
    /// 毫秒级时间戳
    pub timestamp: i64,
}

/// 茶道称号, 按收集进度升序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum TeaTitle {
    Newcomer,
    Taster,
    Connoisseur,
    Master,
}

impl TeaTitle {
    /// 按已收集的不同奖品数取称号 (包含下界): 0 / ≥1 / ≥3 / ≥5
    pub fn from_unique_count(unique_count: usize) -> Self {
        if unique_count >= 5 {
            TeaTitle::Master
        } else if unique_count >= 3 {
            TeaTitle::Connoisseur
        } else if unique_count >= 1 {
            TeaTitle::Taster
        } else {
            TeaTitle::Newcomer
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeaTitle::Newcomer => "初来乍到",
            TeaTitle::Taster => "品茗客",
            TeaTitle::Connoisseur => "茶博士",
            TeaTitle::Master => "茶道宗师",
        }
    }
}

/// 收集统计 — 按需从历史派生, 不持久化
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    /// 已收集的不同奖品数
    pub unique_count: usize,
    /// 收集率 (unique_count / 目录大小)
    pub rate: f64,
    pub title: TeaTitle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_thresholds() {
        assert_eq!(TeaTitle::from_unique_count(0), TeaTitle::Newcomer);
        assert_eq!(TeaTitle::from_unique_count(1), TeaTitle::Taster);
        assert_eq!(TeaTitle::from_unique_count(2), TeaTitle::Taster);
        assert_eq!(TeaTitle::from_unique_count(3), TeaTitle::Connoisseur);
        assert_eq!(TeaTitle::from_unique_count(4), TeaTitle::Connoisseur);
        assert_eq!(TeaTitle::from_unique_count(5), TeaTitle::Master);
        assert_eq!(TeaTitle::from_unique_count(100), TeaTitle::Master);
    }

    #[test]
    fn test_title_monotonic() {
        // 收集数增加时称号只升不降
        let mut last = TeaTitle::from_unique_count(0);
        for n in 1..=10 {
            let title = TeaTitle::from_unique_count(n);
            assert!(title >= last);
            last = title;
        }
    }

    #[test]
    fn test_history_item_json_uses_camel_case() {
        // 与前端持久化格式保持一致
        let item = HistoryItem {
            id: "1700000000000".to_string(),
            prize_id: "p1".to_string(),
            prize_name: "云雾普洱拿铁".to_string(),
            prize_image: "https://picsum.photos/id/425/600/600".to_string(),
            fortune: "茶汤初沸，沉浮之间见真意，静心处自有坦途。".to_string(),
            lucky_element: "静".to_string(),
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"prizeId\""));
        assert!(json.contains("\"prizeName\""));
        assert!(json.contains("\"prizeImage\""));
        assert!(json.contains("\"luckyElement\""));

        let back: HistoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
