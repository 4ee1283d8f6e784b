use serde::{Deserialize, Serialize};

/// 稀有度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "普通款",
            Rarity::Rare => "稀有款",
            Rarity::Legendary => "传说款",
        }
    }
}

/// 盲盒奖品（饮品）定义。目录在构建时写死, 运行期不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub image_url: String,
    /// 风味标签
    pub notes: String,
}
