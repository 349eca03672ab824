//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use highscore_domain::{
    highscore::NewHighscore,
    score::ScoreValue,
    value_objects::{GameTag, LevelId, PlayerName},
};

/// テスト用のゲームタグ
pub fn test_game() -> GameTag {
    GameTag::new("Into_the_light").unwrap()
}

/// 整数スコアの NewHighscore を作成
pub fn new_score(name: &str, level: &str, score: i32) -> NewHighscore {
    NewHighscore {
        game:  None,
        name:  PlayerName::new(name).unwrap(),
        level: LevelId::new(level).unwrap(),
        value: ScoreValue::score(score).unwrap(),
    }
}

/// 完了タイムの NewHighscore を作成
pub fn new_time(name: &str, level: &str, time: f64) -> NewHighscore {
    NewHighscore {
        game:  None,
        name:  PlayerName::new(name).unwrap(),
        level: LevelId::new(level).unwrap(),
        value: ScoreValue::time(time).unwrap(),
    }
}
