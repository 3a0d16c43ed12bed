//! State - 遅延計算の状態
//!
//! # 状態遷移
//! - pending: 呼び出し直後からタイマー発火まで
//! - resolved: Success / Failure が確定（終端、以後の遷移なし）

use serde::{Deserialize, Serialize};

/// Lifecycle of one delayed computation.
///
/// Every invocation starts `Pending` and moves to `Resolved` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComputationState {
    Pending,
    Resolved,
}

impl ComputationState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }
}
