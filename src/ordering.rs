//! Canonical article orderings.
//!
//! Both sorts are stable: articles with equal keys keep the order they had in
//! the resolved set.

use crate::article::Article;
use std::cmp::Ordering;

/// Home and blog index order: pinned first, then newest first.
pub fn sort_pinned_then_date(articles: &mut [&Article]) {
    articles.sort_by(|a, b| compare_pinned_then_date(a, b));
}

/// Tag listing order: newest first, pinning ignored.
pub fn sort_by_date(articles: &mut [&Article]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
}

fn compare_pinned_then_date(a: &Article, b: &Article) -> Ordering {
    b.pinned.cmp(&a.pinned).then_with(|| b.date.cmp(&a.date))
}
