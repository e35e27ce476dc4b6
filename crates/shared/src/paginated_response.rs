//! # ページネーション付きレスポンス
//!
//! トークンベースのページネーションに対応したレスポンス型。

use serde::{Deserialize, Serialize};

/// ページネーション付きレスポンス
///
/// リスト + 継続トークンのページネーション形式。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "next_cursor": "opaque-cursor-string"
/// }
/// ```
///
/// `next_cursor` が `null` の場合は最後のページを意味する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data:        Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { data, next_cursor }
    }

    /// 最後のページか
    pub fn is_last_page(&self) -> bool {
        self.next_cursor.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_next_cursorがnoneの場合はnullとしてシリアライズされる() {
        let sut = PaginatedResponse::new(vec!["a", "b"], None);

        let value = serde_json::to_value(&sut).unwrap();

        assert_eq!(value, json!({ "data": ["a", "b"], "next_cursor": null }));
        assert!(sut.is_last_page());
    }

    #[test]
    fn test_next_cursorがある場合は最後のページではない() {
        let sut = PaginatedResponse::new(vec![1, 2], Some("Mg".to_string()));

        let value = serde_json::to_value(&sut).unwrap();

        assert_eq!(value, json!({ "data": [1, 2], "next_cursor": "Mg" }));
        assert!(!sut.is_last_page());
    }
}
