use serde::Serialize;

use super::{FortuneResult, Prize};

/// 开盒最终结果, 交给展示层
#[derive(Debug, Clone, Serialize)]
pub struct RevealPayload {
    pub prize: Prize,
    pub fortune: FortuneResult,
}
