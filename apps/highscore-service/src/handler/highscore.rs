//! # ハイスコアハンドラ
//!
//! `op` パラメータで登録と取得を振り分ける単一のエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET  /highscore?op=phigh&name=...&level=...&score=...
//! POST /highscore   (クエリ文字列 + application/x-www-form-urlencoded)
//! ```
//!
//! POST ではフォームの値が同名のクエリパラメータを上書きする。
//! ゲームクライアントは POST でもクエリ文字列に値を載せて送信するため、
//! フォーム以外の Content-Type のボディは無視する。
//!
//! ## レスポンス例
//!
//! ```json
//! // phigh（201 Created）
//! {"id": 7, "name": "Ann_O_Brien", "level": "level_1", "score": 120}
//!
//! // ghigh（200 OK, level 指定あり）
//! [{"name": "a", "score": 30}, {"name": "b", "score": 10}]
//! ```

use std::{collections::HashMap, sync::Arc};

use axum::{
    Form,
    Json,
    extract::{
        Query,
        State,
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use highscore_domain::{highscore::HighscoreRecord, operation::Operation};
use serde::Serialize;

use crate::{
    error::HighscoreError,
    usecase::{HighscoreUseCase, PushInput},
};

/// ハイスコアハンドラの State
pub struct HighscoreState {
    pub usecase: Arc<dyn HighscoreUseCase>,
}

// --- リクエストパラメータ ---

/// クエリ文字列とフォームをマージしたリクエストパラメータ
///
/// 同名のキーが重複した場合は後に現れた値が残る。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighscoreParams(HashMap<String, String>);

impl HighscoreParams {
    /// フォームの値をクエリの値に上書きしてマージする
    pub fn merge(query: HashMap<String, String>, form: HashMap<String, String>) -> Self {
        let mut params = query;
        params.extend(form);
        Self(params)
    }

    /// パラメータが 1 つもないか
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    fn get_owned(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    /// 抽出結果からパラメータを組み立てる
    ///
    /// フォーム以外の Content-Type はボディなしとして扱う。
    fn from_extracted(
        query: Result<Query<HashMap<String, String>>, QueryRejection>,
        form: Result<Form<HashMap<String, String>>, FormRejection>,
    ) -> Result<Self, HighscoreError> {
        let Query(query) = query.map_err(|e| {
            tracing::debug!(error = %e, "クエリ文字列を解釈できません");
            HighscoreError::InvalidInput("query".to_string())
        })?;

        let form = match form {
            Ok(Form(form)) => form,
            Err(FormRejection::InvalidFormContentType(_)) => HashMap::new(),
            Err(e) => {
                tracing::debug!(error = %e, "フォームを解釈できません");
                return Err(HighscoreError::InvalidInput("form".to_string()));
            }
        };

        Ok(Self::merge(query, form))
    }
}

// --- レスポンス型 ---

/// 登録結果のレスポンス
#[derive(Debug, Serialize)]
pub struct StoredHighscoreDto {
    pub id:    i64,
    pub name:  String,
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time:  Option<f64>,
}

impl From<&HighscoreRecord> for StoredHighscoreDto {
    fn from(record: &HighscoreRecord) -> Self {
        Self {
            id:    record.id().as_i64(),
            name:  record.name().to_string(),
            level: record.level().to_string(),
            score: record.value().as_score(),
            time:  record.value().as_time(),
        }
    }
}

/// ランキングの 1 エントリ
///
/// レベル指定の取得では `level` を省略する。
#[derive(Debug, Serialize)]
pub struct RankingEntryDto {
    pub name:  String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time:  Option<f64>,
}

impl RankingEntryDto {
    fn new(record: &HighscoreRecord, include_level: bool) -> Self {
        Self {
            name:  record.name().to_string(),
            level: include_level.then(|| record.level().to_string()),
            score: record.value().as_score(),
            time:  record.value().as_time(),
        }
    }
}

// --- ハンドラ ---

/// ハイスコアエンドポイント
///
/// 1. パラメータが 1 つもなければ `NO GET OR POST`
/// 2. `op` が未指定・未知なら `op not recognized`（DB にはアクセスしない）
/// 3. `phigh` は登録、`ghigh` はランキング取得
#[tracing::instrument(skip_all)]
pub async fn highscore_endpoint(
    State(state): State<Arc<HighscoreState>>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<Response, HighscoreError> {
    let params = HighscoreParams::from_extracted(query, form)?;
    if params.is_empty() {
        return Err(HighscoreError::NoParameters);
    }

    let op = params
        .get("op")
        .and_then(Operation::from_param)
        .ok_or(HighscoreError::UnknownOperation)?;
    tracing::debug!(%op, "ハイスコアリクエストを受け付けました");

    match op {
        Operation::Push => {
            let input = PushInput {
                name:  params.get_owned("name"),
                level: params.get_owned("level"),
                value: params.get_owned(state.usecase.kind().field_name()),
            };
            let record = state.usecase.push(input).await?;

            Ok((StatusCode::CREATED, Json(StoredHighscoreDto::from(&record))).into_response())
        }
        Operation::Get => {
            let level = params.get("level");
            let records = state.usecase.ranking(level).await?;

            let include_level = level.is_none_or(str::is_empty);
            let entries: Vec<RankingEntryDto> = records
                .iter()
                .map(|record| RankingEntryDto::new(record, include_level))
                .collect();

            Ok(Json(entries).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use highscore_domain::{
        highscore::{HighscoreId, NewHighscore},
        score::ScoreValue,
        value_objects::{LevelId, PlayerName},
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn record(value: ScoreValue) -> HighscoreRecord {
        HighscoreRecord::new(
            HighscoreId::from_i64(7),
            NewHighscore {
                game: None,
                name: PlayerName::new("Ann_O_Brien").unwrap(),
                level: LevelId::new("level_1").unwrap(),
                value,
            },
        )
    }

    #[test]
    fn test_mergeはフォームの値でクエリの値を上書きする() {
        let params = HighscoreParams::merge(
            map(&[("op", "ghigh"), ("level", "query")]),
            map(&[("level", "form")]),
        );

        assert_eq!(params.get("op"), Some("ghigh"));
        assert_eq!(params.get("level"), Some("form"));
    }

    #[test]
    fn test_登録結果はid付きでスコアのみを出力する() {
        let dto = StoredHighscoreDto::from(&record(ScoreValue::Score(120)));

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({
                "id": 7,
                "name": "Ann_O_Brien",
                "level": "level_1",
                "score": 120
            })
        );
    }

    #[test]
    fn test_ランキングエントリはレベル指定時にlevelを省略する() {
        let dto = RankingEntryDto::new(&record(ScoreValue::Time(9.5)), false);

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({ "name": "Ann_O_Brien", "time": 9.5 })
        );
    }

    #[test]
    fn test_ランキングエントリは全レベル取得時にlevelを含む() {
        let dto = RankingEntryDto::new(&record(ScoreValue::Score(1)), true);

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({ "name": "Ann_O_Brien", "level": "level_1", "score": 1 })
        );
    }
}
