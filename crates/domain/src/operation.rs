//! # 操作種別
//!
//! リクエストパラメータ `op` で指定される操作。
//! 値はゲームクライアントとの互換性のため固定されている。

use strum::IntoStaticStr;

/// ハイスコアエンドポイントの操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display, strum::EnumString)]
pub enum Operation {
    /// ハイスコアの登録（push）
    #[strum(serialize = "phigh")]
    Push,
    /// ランキングの取得（get）
    #[strum(serialize = "ghigh")]
    Get,
}

impl Operation {
    /// `op` パラメータの値から操作を判定する
    ///
    /// 大文字小文字は区別する。未知の値は `None` を返す。
    pub fn from_param(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}
