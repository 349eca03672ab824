//! # ハイスコア記録
//!
//! プレイヤーがレベルをクリアした結果を表すエンティティ。
//!
//! ## ライフサイクル
//!
//! 1. push リクエストで [`NewHighscore`] を作成し、リポジトリが採番して保存する
//! 2. get リクエストで [`RankingQuery`] に一致する記録を順位順に読み出す
//!
//! 記録は登録後に更新・削除されない。

use std::cmp::Ordering;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{
    score::{ScoreKind, ScoreValue},
    value_objects::{GameTag, LevelId, PlayerName},
};

/// ハイスコア記録の ID
///
/// DB の自動採番（`GENERATED ALWAYS AS IDENTITY`）で決まる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
#[serde(transparent)]
pub struct HighscoreId(i64);

impl HighscoreId {
    /// DB から取得した値から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 登録前のハイスコア
///
/// すべてのフィールドが検証済みの値オブジェクトで構成される。
#[derive(Debug, Clone, PartialEq)]
pub struct NewHighscore {
    pub game:  Option<GameTag>,
    pub name:  PlayerName,
    pub level: LevelId,
    pub value: ScoreValue,
}

/// ハイスコア記録エンティティ
///
/// # 不変条件
///
/// - `id` はテーブル内で一意
/// - 一度作成した記録は変更されない（セッターを持たない）
#[derive(Debug, Clone, PartialEq)]
pub struct HighscoreRecord {
    id:    HighscoreId,
    game:  Option<GameTag>,
    name:  PlayerName,
    level: LevelId,
    value: ScoreValue,
}

impl HighscoreRecord {
    /// 採番済みの ID と登録内容から記録を作成する
    pub fn new(id: HighscoreId, new: NewHighscore) -> Self {
        Self {
            id,
            game: new.game,
            name: new.name,
            level: new.level,
            value: new.value,
        }
    }

    /// データベースから記録を復元する
    pub fn from_db(
        id: HighscoreId,
        game: Option<GameTag>,
        name: PlayerName,
        level: LevelId,
        value: ScoreValue,
    ) -> Self {
        Self {
            id,
            game,
            name,
            level,
            value,
        }
    }

    pub fn id(&self) -> HighscoreId {
        self.id
    }

    pub fn game(&self) -> Option<&GameTag> {
        self.game.as_ref()
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn level(&self) -> &LevelId {
        &self.level
    }

    pub fn value(&self) -> ScoreValue {
        self.value
    }

    /// ランキング上の順序を比較する
    ///
    /// 数値で比較し、同値の場合は先に登録された記録（ID が小さい）を上位とする。
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.value
            .rank_cmp(&other.value)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// ランキング取得条件
///
/// - `level` が `None` の場合は全レベルの記録を対象にする
/// - `game` が `Some` の場合はそのゲームタグの記録のみを対象にする
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingQuery {
    pub kind:  ScoreKind,
    pub game:  Option<GameTag>,
    pub level: Option<LevelId>,
}

impl RankingQuery {
    /// 記録がこの条件に一致するか判定する
    ///
    /// インメモリ実装で SQL の `WHERE` 句と同じ判定を行うために使用する。
    pub fn matches(&self, record: &HighscoreRecord) -> bool {
        record.value().kind() == self.kind
            && self
                .game
                .as_ref()
                .is_none_or(|game| record.game() == Some(game))
            && self
                .level
                .as_ref()
                .is_none_or(|level| record.level() == level)
    }
}
