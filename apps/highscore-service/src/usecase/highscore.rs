//! # ハイスコアユースケース
//!
//! 入力値の検証とサニタイズを行い、リポジトリへの登録・取得を仲介する。
//!
//! ## エラーの対応
//!
//! | 状況 | エラー |
//! |------|--------|
//! | 必須パラメータが未設定・空 | [`HighscoreError::UnsetValues`] |
//! | 登録時の文字数超過・数値として不正・負の値 | [`HighscoreError::InvalidInput`]（フィールド名付き） |
//! | リポジトリの失敗 | [`HighscoreError::Database`] |

use std::sync::Arc;

use highscore_domain::{
    highscore::{HighscoreRecord, NewHighscore, RankingQuery},
    score::ScoreKind,
    value_objects::{GameTag, LevelId, PlayerName},
};
use highscore_infra::repository::HighscoreRepository;

use crate::error::HighscoreError;

/// 登録リクエストの入力値（未検証）
///
/// `value` はスコア種別に応じた `score` / `time` パラメータの値。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushInput {
    pub name:  Option<String>,
    pub level: Option<String>,
    pub value: Option<String>,
}

/// ハイスコアユースケースの実装
pub struct HighscoreUseCaseImpl {
    repository: Arc<dyn HighscoreRepository>,
    kind:       ScoreKind,
    game:       Option<GameTag>,
}

impl HighscoreUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(
        repository: Arc<dyn HighscoreRepository>,
        kind: ScoreKind,
        game: Option<GameTag>,
    ) -> Self {
        Self {
            repository,
            kind,
            game,
        }
    }

    pub fn kind(&self) -> ScoreKind {
        self.kind
    }

    /// ハイスコアを登録する
    ///
    /// 名前とレベルはサニタイズしてから保存する。
    pub async fn push(&self, input: PushInput) -> Result<HighscoreRecord, HighscoreError> {
        let name = required(input.name)?;
        let level = required(input.level)?;
        let value = required(input.value)?;

        let highscore = NewHighscore {
            game:  self.game.clone(),
            name:  PlayerName::new(&name).map_err(|_| invalid("name"))?,
            level: LevelId::new(&level).map_err(|_| invalid("level"))?,
            value: self
                .kind
                .parse_value(&value)
                .map_err(|_| invalid(self.kind.field_name()))?,
        };

        let record = self.repository.insert(&highscore).await?;
        tracing::info!(
            id = %record.id(),
            level = %record.level(),
            "ハイスコアを登録しました"
        );
        Ok(record)
    }

    /// ランキングを取得する
    ///
    /// サニタイズ後に最大長を超えるレベルは保存されえないため、
    /// リポジトリを呼ばずに空の Vec を返す。
    pub async fn ranking(&self, level: Option<&str>) -> Result<Vec<HighscoreRecord>, HighscoreError> {
        let level = match level.filter(|l| !l.is_empty()) {
            None => None,
            Some(raw) => match LevelId::new(raw) {
                Ok(level) => Some(level),
                Err(_) => {
                    tracing::debug!("レベルが最大長を超えているため空のランキングを返します");
                    return Ok(Vec::new());
                }
            },
        };

        let query = RankingQuery {
            kind: self.kind,
            game: self.game.clone(),
            level,
        };
        Ok(self.repository.find_ranked(&query).await?)
    }
}

/// 未設定・空文字列を [`HighscoreError::UnsetValues`] にする
fn required(value: Option<String>) -> Result<String, HighscoreError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(HighscoreError::UnsetValues)
}

fn invalid(field: &str) -> HighscoreError {
    HighscoreError::InvalidInput(field.to_string())
}

#[cfg(test)]
mod tests {
    use highscore_domain::{
        highscore::HighscoreId,
        score::ScoreValue,
    };
    use highscore_infra::mock::MockHighscoreRepository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn sut(repo: &MockHighscoreRepository, kind: ScoreKind) -> HighscoreUseCaseImpl {
        HighscoreUseCaseImpl::new(Arc::new(repo.clone()), kind, None)
    }

    fn input(name: &str, level: &str, value: &str) -> PushInput {
        PushInput {
            name:  Some(name.to_string()),
            level: Some(level.to_string()),
            value: Some(value.to_string()),
        }
    }

    fn record(id: i64, name: &str, level: &str, value: ScoreValue) -> HighscoreRecord {
        HighscoreRecord::new(
            HighscoreId::from_i64(id),
            NewHighscore {
                game: None,
                name: PlayerName::new(name).unwrap(),
                level: LevelId::new(level).unwrap(),
                value,
            },
        )
    }

    #[tokio::test]
    async fn test_pushはサニタイズした記録を1件保存する() {
        // Given
        let repo = MockHighscoreRepository::new();
        let sut = sut(&repo, ScoreKind::Score);

        // When
        let result = sut.push(input("Ann O'Brien", "level 1", "120")).await.unwrap();

        // Then
        assert_eq!(result.name().as_str(), "Ann_O_Brien");
        assert_eq!(result.level().as_str(), "level_1");
        assert_eq!(result.value(), ScoreValue::Score(120));
        assert_eq!(repo.records(), vec![result]);
    }

    #[tokio::test]
    async fn test_timeモードではtimeを小数としてパースする() {
        let repo = MockHighscoreRepository::new();
        let sut = sut(&repo, ScoreKind::Time);

        let result = sut.push(input("a", "l1", "12.5")).await.unwrap();

        assert_eq!(result.value(), ScoreValue::Time(12.5));
    }

    #[tokio::test]
    async fn test_ゲームタグ設定時は記録にタグを付ける() {
        let repo = MockHighscoreRepository::new();
        let game = GameTag::new("Into_the_light").unwrap();
        let sut = HighscoreUseCaseImpl::new(
            Arc::new(repo.clone()),
            ScoreKind::Score,
            Some(game.clone()),
        );

        let result = sut.push(input("a", "l1", "1")).await.unwrap();

        assert_eq!(result.game(), Some(&game));
    }

    #[rstest]
    #[case(PushInput { name: None, ..input("", "l1", "1") })]
    #[case(input("", "l1", "1"))]
    #[case(input("a", "", "1"))]
    #[case(PushInput { value: None, ..input("a", "l1", "") })]
    #[case(input("a", "l1", ""))]
    #[tokio::test]
    async fn test_必須パラメータが欠けている場合はunset_valuesを返し保存しない(
        #[case] input: PushInput,
    ) {
        let repo = MockHighscoreRepository::new();
        let sut = sut(&repo, ScoreKind::Score);

        let result = sut.push(input).await;

        assert!(matches!(result, Err(HighscoreError::UnsetValues)));
        assert!(repo.is_empty());
    }

    #[rstest]
    #[case(ScoreKind::Score, input("a", "l1", "-1"), "score")]
    #[case(ScoreKind::Score, input("a", "l1", "12.5"), "score")]
    #[case(ScoreKind::Score, input("a", "l1", "abc"), "score")]
    #[case(ScoreKind::Time, input("a", "l1", "-0.5"), "time")]
    #[case(ScoreKind::Time, input("a", "l1", "NaN"), "time")]
    #[case(ScoreKind::Score, input(&"x".repeat(81), "l1", "1"), "name")]
    #[case(ScoreKind::Score, input("a", &"x".repeat(41), "1"), "level")]
    #[tokio::test]
    async fn test_不正な値はフィールド名付きのinvalid_inputを返し保存しない(
        #[case] kind: ScoreKind,
        #[case] input: PushInput,
        #[case] field: &str,
    ) {
        let repo = MockHighscoreRepository::new();
        let sut = sut(&repo, kind);

        let result = sut.push(input).await;

        match result {
            Err(HighscoreError::InvalidInput(f)) => assert_eq!(f, field),
            other => panic!("InvalidInput を期待しましたが {other:?} でした"),
        }
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_rankingは指定レベルの記録を順位順に返す() {
        // Given
        let repo = MockHighscoreRepository::new();
        repo.add_record(record(1, "a", "l1", ScoreValue::Score(10)));
        repo.add_record(record(2, "b", "l1", ScoreValue::Score(30)));
        repo.add_record(record(3, "c", "l2", ScoreValue::Score(50)));
        let sut = sut(&repo, ScoreKind::Score);

        // When
        let result = sut.ranking(Some("l1")).await.unwrap();

        // Then
        let names: Vec<&str> = result.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_rankingはレベルをサニタイズしてから検索する() {
        let repo = MockHighscoreRepository::new();
        repo.add_record(record(1, "a", "level_1", ScoreValue::Score(10)));
        let sut = sut(&repo, ScoreKind::Score);

        let result = sut.ranking(Some("level 1")).await.unwrap();

        assert_eq!(result.len(), 1);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[tokio::test]
    async fn test_rankingはレベル未指定なら全レベルを返す(#[case] level: Option<&str>) {
        let repo = MockHighscoreRepository::new();
        repo.add_record(record(1, "a", "l1", ScoreValue::Score(10)));
        repo.add_record(record(2, "b", "l2", ScoreValue::Score(20)));
        let sut = sut(&repo, ScoreKind::Score);

        let result = sut.ranking(level).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_rankingは記録がなければ空のvecを返す() {
        let repo = MockHighscoreRepository::new();
        let sut = sut(&repo, ScoreKind::Score);

        let result = sut.ranking(Some("l1")).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_rankingは最大長を超えるレベルにリポジトリを呼ばず空のvecを返す() {
        // 失敗するリポジトリでも Ok になることで呼び出しがないことを確認する
        let repo = MockHighscoreRepository::failing();
        let sut = sut(&repo, ScoreKind::Score);

        let result = sut.ranking(Some(&"l".repeat(LevelId::MAX_LENGTH + 1))).await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rankingは最大長ちょうどのレベルを検索する() {
        let level = "l".repeat(LevelId::MAX_LENGTH);
        let repo = MockHighscoreRepository::new();
        repo.add_record(record(1, "a", &level, ScoreValue::Score(10)));
        let sut = sut(&repo, ScoreKind::Score);

        let result = sut.ranking(Some(&level)).await.unwrap();

        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_リポジトリの失敗はdatabaseエラーになる() {
        let repo = MockHighscoreRepository::failing();
        let sut = sut(&repo, ScoreKind::Score);

        let result = sut.ranking(Some("l1")).await;

        assert!(matches!(result, Err(HighscoreError::Database(_))));
    }
}
