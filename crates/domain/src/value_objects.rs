//! # サニタイズ済み値オブジェクト
//!
//! ハイスコア記録に保存される文字列フィールドの値オブジェクトを定義する。
//!
//! ## サニタイズ規則
//!
//! `[A-Za-z0-9_]` 以外の文字はすべて `_` に置換する。
//! 置換は Unicode スカラー値（`char`）単位で行うため、
//! マルチバイト文字 1 文字は `_` 1 文字になる。
//!
//! ## 含まれる型
//!
//! | 型 | 最大長 | 用途 |
//! |---|-------|------|
//! | [`PlayerName`] | 80 | プレイヤー名 |
//! | [`LevelId`] | 40 | レベル識別子 |
//! | [`GameTag`] | 40 | ゲームタグ（設定で固定） |

/// `[A-Za-z0-9_]` 以外の文字を `_` に置換する
///
/// # 使用例
///
/// ```rust
/// use highscore_domain::value_objects::sanitize;
///
/// assert_eq!(sanitize("Ann O'Brien"), "Ann_O_Brien");
/// assert_eq!(sanitize("level_1"), "level_1");
/// ```
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

define_sanitized_string! {
    /// プレイヤー名（値オブジェクト）
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 最大 80 文字（DB: `VARCHAR(80)`）
    pub struct PlayerName {
        label: "プレイヤー名",
        max_length: 80,
    }
}

define_sanitized_string! {
    /// レベル識別子（値オブジェクト）
    ///
    /// 登録時と取得時の両方で同じ規則でサニタイズされるため、
    /// `"world-1"` で登録した記録は `"world-1"` でも `"world_1"` でも取得できる。
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 最大 40 文字（DB: `VARCHAR(40)`）
    pub struct LevelId {
        label: "レベル ID",
        max_length: 40,
    }
}

define_sanitized_string! {
    /// ゲームタグ（値オブジェクト）
    ///
    /// 1 つのテーブルを複数のゲームで共有する場合の識別子。
    /// リクエストからは受け取らず、サービス設定で固定する。
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 最大 40 文字（DB: `VARCHAR(40)`）
    pub struct GameTag {
        label: "ゲームタグ",
        max_length: 40,
    }
}
