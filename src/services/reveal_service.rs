use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use rand::Rng;

use crate::catalog::Catalog;
use crate::models::{HistoryItem, RevealPayload};
use crate::services::{FortuneService, HistoryService};

/// 开盒编排器。唯一的并发约束: 同一时刻只允许一次开盒在进行,
/// 由一个 in-flight 标志保护, 防止连点触发重复开盒。
#[derive(Clone)]
pub struct RevealService {
    catalog: Arc<Catalog>,
    fortune_service: FortuneService,
    history_service: HistoryService,
    min_delay: Duration,
    opening: Arc<AtomicBool>,
}

impl RevealService {
    pub fn new(
        catalog: Catalog,
        fortune_service: FortuneService,
        history_service: HistoryService,
        min_delay: Duration,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            fortune_service,
            history_service,
            min_delay,
            opening: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 开盒:
    /// 1. 均匀随机抽取一款奖品 (独立抽取, 允许重复获得)
    /// 2. 后台发起签文生成, 同时等待固定的揭晓保底时长
    /// 3. 两者都完成后写入历史, 返回最终结果
    ///
    /// 已有开盒未完成时直接返回 None, 不启动新的开盒。
    /// 一旦开始就不可取消, 必定走完并记入历史。
    pub async fn open_box(&self) -> Option<RevealPayload> {
        if self
            .opening
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::info!("A reveal is already in flight, ignoring request");
            return None;
        }

        let index = rand::thread_rng().gen_range(0..self.catalog.len());
        let prize = self.catalog.pick(index).clone();

        // 揭晓动画的保底时长与签文生成并行;
        // 二者都结束才继续 — 只保证下限, 不设上限
        let (_, fortune) = tokio::join!(
            tokio::time::sleep(self.min_delay),
            self.fortune_service.generate_fortune(&prize),
        );

        let now = Utc::now().timestamp_millis();
        let item = HistoryItem {
            id: now.to_string(),
            prize_id: prize.id.clone(),
            prize_name: prize.name.clone(),
            prize_image: prize.image_url.clone(),
            fortune: fortune.fortune.clone(),
            lucky_element: fortune.lucky_element.clone(),
            timestamp: now,
        };
        if let Err(e) = self.history_service.append(item) {
            // 落盘失败只损失历史, 不影响本次开盒结果
            log::error!("Failed to persist reveal history: {e}");
        }

        self.opening.store(false, Ordering::Release);
        Some(RevealPayload { prize, fortune })
    }
}
