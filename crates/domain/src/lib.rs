//! # Highscore ドメイン層
//!
//! ハイスコア記録のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: プレイヤー名・レベル ID・ゲームタグは生成時にサニタイズ済み
//! - **不変エンティティ**: ハイスコア記録は登録後に変更・削除されない
//! - **ドメインエラー**: 入力値の検証失敗は [`DomainError`] で表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//!         ↘ shared
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`value_objects`] - サニタイズ済み文字列の値オブジェクト
//! - [`score`] - スコア種別（score / time）と数値の検証
//! - [`operation`] - リクエストの操作種別（`phigh` / `ghigh`）
//! - [`highscore`] - ハイスコア記録エンティティと取得条件
//!
//! ## 使用例
//!
//! ```rust
//! use highscore_domain::{score::ScoreKind, value_objects::PlayerName};
//!
//! let name = PlayerName::new("Ann O'Brien").unwrap();
//! assert_eq!(name.as_str(), "Ann_O_Brien");
//!
//! let value = ScoreKind::Score.parse_value("120").unwrap();
//! assert_eq!(value.kind(), ScoreKind::Score);
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod highscore;
pub mod operation;
pub mod score;
pub mod value_objects;

pub use error::DomainError;
