//! # エラーレスポンス
//!
//! ハイスコアエンドポイントの失敗時に返すボディ `{"ERROR": "<message>"}` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - メッセージはゲームクライアントとの互換性のため英語の固定文言
//! - よく使うメッセージは便利コンストラクタで提供し、文言のハードコードを排除

use serde::{Deserialize, Serialize};

/// パラメータが 1 つも送られなかった
pub const NO_PARAMETERS: &str = "NO GET OR POST";
/// 必須パラメータが未設定または空
pub const UNSET_VALUES: &str = "UNSET VALUES";
/// パラメータの値が不正（負の数値、文字数超過など）
pub const INVALID_VALUES: &str = "INVALID VALUES";
/// `op` パラメータが未知の値
pub const UNKNOWN_OPERATION: &str = "op not recognized";
/// データベース操作の失敗（詳細はログのみに出力する）
pub const DATABASE_FAILURE: &str = "DATABASE FAILURE";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "ERROR")]
    pub error: String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// パラメータなし
    pub fn no_parameters() -> Self {
        Self::new(NO_PARAMETERS)
    }

    /// 必須パラメータの未設定
    pub fn unset_values() -> Self {
        Self::new(UNSET_VALUES)
    }

    /// 不正な値
    ///
    /// `field` には問題のあったパラメータ名を指定する（例: `"score"`）。
    pub fn invalid_values(field: &str) -> Self {
        Self::new(format!("{INVALID_VALUES}: {field}"))
    }

    /// 未知の操作
    pub fn unknown_operation() -> Self {
        Self::new(UNKNOWN_OPERATION)
    }

    /// データベースエラー
    ///
    /// 内部情報を漏らさないため、メッセージは固定値。
    pub fn database_failure() -> Self {
        Self::new(DATABASE_FAILURE)
    }
}
