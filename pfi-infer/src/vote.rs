//! 频次投票
//!
//! 取出现次数最多的值；次数相同时取最先出现的值，保证结果可复现。

use std::collections::HashMap;
use std::hash::Hash;

/// 返回众数及其出现次数，输入为空时返回 `None`
pub fn most_frequent<T, I>(items: I) -> Option<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut first_seen: Vec<T> = Vec::new();
    let mut counts: HashMap<T, usize> = HashMap::new();

    for item in items {
        let count = counts.entry(item.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(item);
        }
        *count += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for item in first_seen {
        let count = counts.get(&item).copied().unwrap_or(0);
        if best.as_ref().map_or(true, |(_, best_count)| count > *best_count) {
            best = Some((item, count));
        }
    }
    best
}
