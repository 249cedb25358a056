//! Daily lesson plan selection.
//!
//! [`select_daily_lessons`] is the algorithmic core of the crate: given a
//! lesson pool, an engagement snapshot, and a reference day, it picks a
//! bounded, categorically balanced subset of lessons to present today.
//!
//! The function is pure and deterministic. It owns no state, takes
//! snapshots in, and returns a value out; for identical inputs it always
//! returns the same ordered list. The plan store relies on this when it
//! decides whether a cached plan can be reused.
//!
//! Selection proceeds in three phases:
//!
//! 1. **Ordering** — candidates are ranked never-practiced first, then
//!    not-recently-practiced, then recently-practiced (within 48 hours),
//!    staler practice first within a tier, lesson id as the final
//!    tie-break.
//! 2. **Greedy fill** — the selection is filled to its target size (3 to
//!    5, the whole pool when it has at most 3 distinct entries) from
//!    preferred candidates before cooldown ones, admitting at most two
//!    lessons that were already shown yesterday; the repeat cap is
//!    relaxed only when the target cannot otherwise be reached.
//! 3. **Category backfill** — at least one foundation lesson is required
//!    whenever the pool offers one, with eviction from the tail to make
//!    room; life-manners and socialization coverage is best-effort and
//!    never evicts the sole foundation lesson.

use std::collections::HashMap;

use jiff::Timestamp;

use crate::categories::{self, LessonCategory};
use crate::models::EngagementSignal;
use crate::weeks;

/// Pools of this size or smaller are returned as-is.
const SMALL_POOL_LIMIT: usize = 3;

/// Upper bound on the number of lessons in a daily plan.
const MAX_PLAN_SIZE: usize = 5;

/// At most this many lessons already shown yesterday are admitted while
/// non-repeat alternatives remain.
const MAX_YESTERDAY_REPEATS: usize = 2;

/// A practice within this window counts as "recently practiced".
const RECENT_PRACTICE_WINDOW_MS: i64 = 48 * 60 * 60 * 1000;

/// Recency tier of a candidate, in descending selection priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tier {
    NeverPracticed,
    NotRecent,
    RecentlyPracticed,
}

/// A pool lesson with the engagement facts selection cares about.
#[derive(Debug, Clone)]
struct Candidate {
    id: String,
    tier: Tier,
    last_practiced_ms: i64,
    shown_yesterday: bool,
}

impl Candidate {
    fn classify(
        id: &str,
        engagement: &HashMap<String, EngagementSignal>,
        yesterday_key: Option<&str>,
        now: Timestamp,
    ) -> Self {
        let signal = engagement.get(id);
        let last_practiced = signal.and_then(|s| s.last_practiced_at);

        let tier = match last_practiced {
            None => Tier::NeverPracticed,
            Some(at) => {
                let age_ms = now.as_millisecond() - at.as_millisecond();
                if age_ms <= RECENT_PRACTICE_WINDOW_MS {
                    Tier::RecentlyPracticed
                } else {
                    Tier::NotRecent
                }
            }
        };

        let shown_yesterday = match (signal.and_then(|s| s.last_shown_by_date.as_deref()), yesterday_key) {
            (Some(shown), Some(yesterday)) => shown == yesterday,
            _ => false,
        };

        Self {
            id: id.to_string(),
            tier,
            last_practiced_ms: last_practiced.map_or(i64::MIN, |at| at.as_millisecond()),
            shown_yesterday,
        }
    }

    fn has(&self, category: LessonCategory) -> bool {
        categories::has_category(&self.id, category)
    }
}

/// Selects today's lessons from the pool.
///
/// Returns the selected lesson ids in final priority order, not pool
/// order. An empty pool yields an empty plan; engagement entries for ids
/// missing from the pool are ignored.
pub fn select_daily_lessons(
    lesson_pool: &[String],
    today_key: &str,
    engagement: &HashMap<String, EngagementSignal>,
    now: Timestamp,
) -> Vec<String> {
    let pool = dedupe(lesson_pool);
    if pool.len() <= SMALL_POOL_LIMIT {
        return pool;
    }

    let target = target_size(pool.len());
    let yesterday_key = weeks::previous_day_key(today_key);

    let mut candidates: Vec<Candidate> = pool
        .iter()
        .map(|id| Candidate::classify(id, engagement, yesterday_key.as_deref(), now))
        .collect();

    // Staler practice first within a tier; lesson id for determinism.
    candidates.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then(a.last_practiced_ms.cmp(&b.last_practiced_ms))
            .then_with(|| a.id.cmp(&b.id))
    });

    let (preferred, cooldown): (Vec<Candidate>, Vec<Candidate>) = candidates
        .into_iter()
        .partition(|c| c.tier != Tier::RecentlyPracticed);

    let mut selection = greedy_fill(&preferred, &cooldown, target);

    // Overall preference order, consulted by the category backfill.
    let order: Vec<Candidate> = preferred.into_iter().chain(cooldown).collect();

    backfill_category(&mut selection, &order, target, LessonCategory::Foundation);
    backfill_category(&mut selection, &order, target, LessonCategory::LifeManners);
    backfill_category(&mut selection, &order, target, LessonCategory::Socialization);

    selection.truncate(target);
    selection.into_iter().map(|c| c.id).collect()
}

/// Removes duplicate ids, keeping first occurrences in pool order.
fn dedupe(pool: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(pool.len());
    for id in pool {
        if !seen.contains(id) {
            seen.push(id.clone());
        }
    }
    seen
}

/// Target plan size for a deduplicated pool.
fn target_size(pool_len: usize) -> usize {
    if pool_len == 4 {
        4
    } else {
        MAX_PLAN_SIZE.min(pool_len)
    }
}

/// Fills the selection from preferred candidates before cooldown ones.
///
/// Each group is walked twice: first honoring the yesterday-repeat cap,
/// then with the cap relaxed in case the target was not reached.
fn greedy_fill(preferred: &[Candidate], cooldown: &[Candidate], target: usize) -> Vec<Candidate> {
    let mut selection: Vec<Candidate> = Vec::with_capacity(target);
    let mut repeats = 0usize;

    for (group, capped) in [
        (preferred, true),
        (preferred, false),
        (cooldown, true),
        (cooldown, false),
    ] {
        for candidate in group {
            if selection.len() >= target {
                return selection;
            }
            if selection.iter().any(|c| c.id == candidate.id) {
                continue;
            }
            if capped && candidate.shown_yesterday && repeats >= MAX_YESTERDAY_REPEATS {
                continue;
            }
            if candidate.shown_yesterday {
                repeats += 1;
            }
            selection.push(candidate.clone());
        }
    }

    selection
}

/// Ensures the selection covers `category`, evicting from the tail when the
/// selection is full.
///
/// Foundation is the required, protected category: a best-effort fill for
/// life-manners or socialization never evicts the sole foundation lesson.
/// When no admissible eviction exists the category is left unfilled; the
/// heuristic deliberately does not search for a full reassignment.
fn backfill_category(
    selection: &mut Vec<Candidate>,
    order: &[Candidate],
    target: usize,
    category: LessonCategory,
) {
    if selection.iter().any(|c| c.has(category)) {
        return;
    }

    let Some(candidate) = order
        .iter()
        .find(|c| c.has(category) && !selection.iter().any(|s| s.id == c.id))
    else {
        return;
    };

    if selection.len() < target {
        selection.push(candidate.clone());
        return;
    }

    let foundation_count = selection
        .iter()
        .filter(|c| c.has(LessonCategory::Foundation))
        .count();

    let evict_index = selection.iter().enumerate().rev().find_map(|(index, held)| {
        if held.has(category) {
            return None;
        }
        let protects_sole_foundation = category != LessonCategory::Foundation
            && held.has(LessonCategory::Foundation)
            && foundation_count <= 1;
        if protects_sole_foundation {
            return None;
        }
        Some(index)
    });

    let Some(index) = evict_index else {
        return;
    };

    selection.remove(index);
    selection.push(candidate.clone());
}
