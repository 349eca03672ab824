/// サニタイズ済み String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: サニタイズ + 空チェック + 最大長チェック
/// - `from_db()`: DB から取得した値をそのまま復元
/// - `as_str()`: 文字列参照
/// - `into_string()`: 所有権を持つ文字列に変換
/// - `Display` impl
///
/// サニタイズは [`sanitize`](crate::value_objects::sanitize) に委譲する。
/// サニタイズは文字を置換するだけで削除しないため、
/// 空チェックは入力が空文字列かどうかと等価になる。
///
/// # 引数
///
/// - `$label`: エラーメッセージに使うラベル（例: `"プレイヤー名"`）
/// - `$max_length`: 最大文字数（DB の `VARCHAR` 長に合わせる）
///
/// # 使用例
///
/// ```rust
/// use highscore_domain::value_objects::LevelId;
///
/// let level = LevelId::new("world-1").unwrap();
/// assert_eq!(level.as_str(), "world_1");
/// ```
macro_rules! define_sanitized_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            /// 最大文字数
            pub const MAX_LENGTH: usize = $max_length;

            /// 入力値をサニタイズして値オブジェクトを作成する
            ///
            /// # エラー
            ///
            /// - 空文字列の場合
            /// - サニタイズ後の文字数が最大長を超える場合
            pub fn new(value: impl AsRef<str>) -> Result<Self, $crate::DomainError> {
                let value = $crate::value_objects::sanitize(value.as_ref());

                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }

                if value.chars().count() > Self::MAX_LENGTH {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は {} 文字以内である必要があります",
                        $label,
                        Self::MAX_LENGTH
                    )));
                }

                Ok(Self(value))
            }

            /// データベースから値を復元する
            ///
            /// 保存時にサニタイズ済みのため、再検証しない。
            pub fn from_db(value: String) -> Self {
                Self(value)
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }
    };
}
