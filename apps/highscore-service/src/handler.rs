//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証とリポジトリ呼び出しは usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `highscore`: `op` で振り分けるハイスコアエンドポイント

pub mod health;
pub mod highscore;

pub use health::{ReadinessState, health_check, readiness_check};
pub use highscore::{HighscoreParams, HighscoreState, highscore_endpoint};
