use serde::{Deserialize, Serialize};

/// 茶语签文生成结果。每次开盒新生成一条, 产出后不可变,
/// 只随 HistoryItem 持久化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneResult {
    /// 诗意的签文内容
    pub fortune: String,
    /// 幸运元素 (例如: 山、水、雾、木、火、金、风)
    pub lucky_element: String,
}
