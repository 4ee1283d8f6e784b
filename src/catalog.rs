use crate::models::{Prize, Rarity};

/// 固定奖品目录。进程启动时构建一次, 之后只读。
#[derive(Debug, Clone)]
pub struct Catalog {
    prizes: Vec<Prize>,
}

impl Catalog {
    /// 目录不能为空, 且 id 不能重复 — 违反即配置/编码错误, 直接 panic
    pub fn new(prizes: Vec<Prize>) -> Self {
        assert!(!prizes.is_empty(), "prize catalog must not be empty");
        for (i, p) in prizes.iter().enumerate() {
            assert!(
                !prizes[..i].iter().any(|q| q.id == p.id),
                "duplicate prize id: {}",
                p.id
            );
        }
        Self { prizes }
    }

    /// 内置的 5 款茶咖饮品
    pub fn builtin() -> Self {
        Self::new(vec![
            prize(
                "p1",
                "云雾普洱拿铁",
                "醇厚熟普与丝滑热奶的融合，仿佛置身景迈山的云雾之中，口感绵密。",
                Rarity::Common,
                "https://picsum.photos/id/425/600/600",
                "陈香, 顺滑, 醇厚",
            ),
            prize(
                "p2",
                "古树美式",
                "300年树龄的生普与明亮浓缩咖啡的碰撞。唤醒灵魂的晨钟，回甘悠长。",
                Rarity::Common,
                "https://picsum.photos/id/431/600/600",
                "花香, 回甘, 醒神",
            ),
            prize(
                "p3",
                "桂花糯香冷萃",
                "糯香普洱冷萃，点缀香甜干桂花，清凉中透着金秋的芬芳。",
                Rarity::Rare,
                "https://picsum.photos/id/312/600/600",
                "甘甜, 馥郁, 清爽",
            ),
            prize(
                "p4",
                "陈皮摩卡",
                "广式陈皮融入巧克力酱，搭配深烘咖啡与陈年普洱，温暖治愈。",
                Rarity::Rare,
                "https://picsum.photos/id/1060/600/600",
                "柑橘香, 浓郁, 温润",
            ),
            prize(
                "p5",
                "龙窑柴烧特调",
                "传统龙窑柴烧工艺带来的传奇风味。独特的烟熏香气连接过去与未来。",
                Rarity::Legendary,
                "https://picsum.photos/id/225/600/600",
                "烟熏, 焦糖, 层次丰富",
            ),
        ])
    }

    pub fn list(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// 越界属于编码错误 (选取算法保证 index < len), 不做运行时处理
    pub fn pick(&self, index: usize) -> &Prize {
        &self.prizes[index]
    }
}

fn prize(
    id: &str,
    name: &str,
    description: &str,
    rarity: Rarity,
    image_url: &str,
    notes: &str,
) -> Prize {
    Prize {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        rarity,
        image_url: image_url.to_string(),
        notes: notes.to_string(),
    }
}
