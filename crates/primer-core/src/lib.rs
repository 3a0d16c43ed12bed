//! primer-core
//!
//! Small, independent building blocks collected in one library.
//!
//! # モジュール構成
//! - **domain**: 共通モデル（outcome, state, errors）
//! - **square**: 遅延付きの二乗計算（tokio timer でサスペンドする唯一の非同期処理）
//! - **snippets**: 状態を持たない純粋関数群（文字列整形、フィルタ、連結、レコード、曜日判定など）
//!
//! Nothing here shares state: every function can be called, tested and
//! replaced on its own.

pub mod domain;
pub mod snippets;
pub mod square;

pub use domain::{ComputationState, Outcome, OutcomeError, OutcomeKind, SquareError};
pub use square::{DEFAULT_DELAY, DelayedSquare, PendingSquare, Squarable, compute_square_delayed};
