//! # ドメイン層エラー定義
//!
//! 入力値がドメインのルールに違反した状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: サービス層でレスポンスに変換する
//!
//! ## 使用例
//!
//! ```rust
//! use highscore_domain::DomainError;
//!
//! fn validate_name(name: &str) -> Result<(), DomainError> {
//!     if name.is_empty() {
//!         return Err(DomainError::Validation("プレイヤー名は必須です".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がルールに違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが空
    /// - 文字数制限の超過
    /// - 数値として解釈できない、または負の値
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
