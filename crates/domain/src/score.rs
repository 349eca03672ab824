//! # スコア種別と数値
//!
//! ハイスコアの数値は 2 種類あり、サービス全体で 1 つに固定される:
//!
//! | 種別 | 型 | 並び順 | 用途 |
//! |------|----|--------|------|
//! | [`ScoreKind::Score`] | `i32` | 降順（大きいほど上位） | 得点制のレベル |
//! | [`ScoreKind::Time`] | `f64` | 昇順（小さいほど上位） | タイムアタック |
//!
//! どちらも 0 以上でなければならない。

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::DomainError;

/// スコア種別
///
/// 環境変数 `HIGHSCORE_MODE` の値（`score` / `time`）からパースする。
/// `IntoStaticStr` の値はリクエストパラメータ名とカラム名を兼ねる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    /// 整数スコア（降順）
    #[default]
    Score,
    /// 完了タイム（昇順）
    Time,
}

impl ScoreKind {
    /// リクエストパラメータ名（`score` / `time`）を返す
    pub fn field_name(&self) -> &'static str {
        self.into()
    }

    /// 文字列をこの種別の数値としてパースする
    ///
    /// 前後の空白は無視する。
    ///
    /// # エラー
    ///
    /// - 数値として解釈できない場合（`Score` は整数のみ）
    /// - 負の値、または `Time` で有限でない値の場合
    pub fn parse_value(&self, raw: &str) -> Result<ScoreValue, DomainError> {
        let raw = raw.trim();
        match self {
            Self::Score => {
                let value: i32 = raw.parse().map_err(|_| {
                    DomainError::Validation(format!("score は整数である必要があります: {raw}"))
                })?;
                ScoreValue::score(value)
            }
            Self::Time => {
                let value: f64 = raw.parse().map_err(|_| {
                    DomainError::Validation(format!("time は数値である必要があります: {raw}"))
                })?;
                ScoreValue::time(value)
            }
        }
    }
}

/// ハイスコアの数値（値オブジェクト）
///
/// # 不変条件
///
/// - 0 以上
/// - `Time` は有限値（NaN / 無限大を含まない）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreValue {
    /// 整数スコア
    Score(i32),
    /// 完了タイム（秒）
    Time(f64),
}

impl ScoreValue {
    /// 整数スコアを作成する
    pub fn score(value: i32) -> Result<Self, DomainError> {
        if value < 0 {
            return Err(DomainError::Validation(
                "score は 0 以上である必要があります".to_string(),
            ));
        }
        Ok(Self::Score(value))
    }

    /// 完了タイムを作成する
    pub fn time(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::Validation(
                "time は有限の数値である必要があります".to_string(),
            ));
        }
        if value < 0.0 {
            return Err(DomainError::Validation(
                "time は 0 以上である必要があります".to_string(),
            ));
        }
        Ok(Self::Time(value))
    }

    /// 数値の種別を返す
    pub fn kind(&self) -> ScoreKind {
        match self {
            Self::Score(_) => ScoreKind::Score,
            Self::Time(_) => ScoreKind::Time,
        }
    }

    /// 整数スコアを返す（`Time` の場合は `None`）
    pub fn as_score(&self) -> Option<i32> {
        match self {
            Self::Score(v) => Some(*v),
            Self::Time(_) => None,
        }
    }

    /// 完了タイムを返す（`Score` の場合は `None`）
    pub fn as_time(&self) -> Option<f64> {
        match self {
            Self::Score(_) => None,
            Self::Time(v) => Some(*v),
        }
    }

    /// ランキング上の順序を比較する
    ///
    /// `Less` は `self` が `other` より上位であることを表す。
    /// 種別が異なる値同士は比較できないため `Equal` を返す。
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Score(a), Self::Score(b)) => b.cmp(a),
            (Self::Time(a), Self::Time(b)) => a.total_cmp(b),
            _ => Ordering::Equal,
        }
    }
}
