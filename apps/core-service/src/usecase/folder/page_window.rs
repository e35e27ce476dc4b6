//! # ページ範囲の計算
//!
//! 開始オフセット・ページサイズ・全件数から、1 ページ分の半開区間
//! `[start, end)` を求める。

use std::{num::NonZeroUsize, ops::Range};

/// ページサイズ未指定時のデフォルト値
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// 実際に使うページサイズを決定する
///
/// 未指定・0・負数はデフォルト値にする。上限は設けない。
pub fn resolve_page_size(requested: Option<i32>, default: NonZeroUsize) -> usize {
    requested
        .and_then(|size| usize::try_from(size).ok())
        .filter(|&size| size > 0)
        .unwrap_or(default.get())
}

/// 1 ページ分の範囲
///
/// # 不変条件
///
/// - `start <= end <= total`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end:   usize,
    pub total: usize,
}

impl PageWindow {
    /// ページ範囲を計算する
    ///
    /// `start` が全件数以上の場合は空の範囲になる（エラーではない）。
    pub fn compute(start: usize, page_size: usize, total: usize) -> Self {
        let start = start.min(total);
        let end = start.saturating_add(page_size).min(total);
        Self { start, end, total }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// 次ページの開始オフセット
    ///
    /// 最後のページなら `None`。
    pub fn next_offset(&self) -> Option<usize> {
        (self.end < self.total).then_some(self.end)
    }
}
