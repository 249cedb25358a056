//! Daily plan operations for the Trainer.

use jiff::{Timestamp, tz::TimeZone};
use log::info;
use tokio::task;

use super::Trainer;
use crate::{
    display::TodayView,
    error::{Result, TrainerError},
    models::{DailyPlan, Week},
    params::ToggleLesson,
    rollover::MidnightTrigger,
    store::Database,
    weeks,
};

impl Trainer {
    /// Returns today's fully resolved plan view for the current training
    /// week, generating and caching the plan on first access.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::ProfileMissing` when no profile has been set
    /// up yet; the week cannot be derived without a date of birth.
    pub async fn today(&self, now: Timestamp) -> Result<TodayView> {
        let number = self.current_week_number(now).await?;
        self.plan_for_week(number, now).await
    }

    /// Returns the resolved plan view for an explicit curriculum week.
    ///
    /// Week numbers outside the curriculum clamp to its edges, so a
    /// fourteen-week-old puppy keeps getting the final week's material.
    pub async fn plan_for_week(&self, number: u32, now: Timestamp) -> Result<TodayView> {
        let week = self.resolve_week(number)?.clone();
        let date_key = weeks::day_key(now);
        let engagement = self.lock_log()?.engagement_snapshot();

        let db_path = self.db_path.clone();
        let week_id = week.id.clone();
        let pool = week.lesson_ids.clone();
        let key = date_key.clone();
        let (plan, generated) = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.ensure_plan(&week_id, &key, &pool, &engagement, now)
        })
        .await
        .map_err(Self::join_error)??;

        if generated {
            info!(
                "Generated plan for {} with {} lesson(s)",
                plan.key(),
                plan.lesson_ids.len()
            );
            let mut log = self.lock_log()?;
            log.mark_shown(&plan.lesson_ids, &plan.date_key);
            drop(log);
            self.schedule_practice_flush()?;
        }

        Ok(self.resolve_view(week, plan))
    }

    /// Flips a lesson's practiced state in today's plan, keeping the
    /// practice log in step with the plan.
    ///
    /// Returns `None` when the lesson is not part of today's plan; nothing
    /// changes in that case.
    pub async fn toggle_practiced_lesson(
        &self,
        params: &ToggleLesson,
        now: Timestamp,
    ) -> Result<Option<bool>> {
        let date_key = weeks::day_key(now);

        let db_path = self.db_path.clone();
        let week_id = params.week_id.clone();
        let lesson_id = params.lesson_id.clone();
        let key = date_key.clone();
        let toggled = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.toggle_practiced_lesson(&week_id, &key, &lesson_id)
        })
        .await
        .map_err(Self::join_error)??;

        if let Some(practiced) = toggled {
            let mut log = self.lock_log()?;
            if log.is_practiced_today(&params.lesson_id, now) != practiced {
                log.toggle_practice(&params.lesson_id, now);
            }
            drop(log);
            self.schedule_practice_flush()?;
        }

        Ok(toggled)
    }

    /// The cached plan for `(week_id, date_key)`, if one exists.
    pub async fn plan_for(&self, week_id: &str, date_key: &str) -> Result<Option<DailyPlan>> {
        let db_path = self.db_path.clone();
        let week_id = week_id.to_string();
        let date_key = date_key.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.plan_for(&week_id, &date_key)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Drops every cached daily plan so the next access regenerates.
    ///
    /// This is the day-rollover reset; practice history and the profile are
    /// untouched.
    pub async fn reset_daily_plans(&self) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.clear_daily_plans()
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Builds a midnight trigger whose reset callback clears cached plans.
    ///
    /// The caller owns scheduling: call [`MidnightTrigger::schedule`] after
    /// building and [`MidnightTrigger::on_foreground`] when the hosting
    /// process wakes from a long sleep.
    pub fn midnight_trigger(&self) -> MidnightTrigger {
        let db_path = self.db_path.clone();
        MidnightTrigger::new(None, move |day| {
            let db_path = db_path.clone();
            let day = day.to_string();
            let _ = task::spawn_blocking(move || {
                match Database::new(&db_path).and_then(|mut db| db.clear_daily_plans()) {
                    Ok(()) => info!("Daily plans reset for {day}"),
                    Err(e) => log::warn!("Daily plan reset failed for {day}: {e}"),
                }
            });
        })
    }

    /// Resolves a week number against the curriculum, clamping to its
    /// first and last weeks.
    pub(crate) fn resolve_week(&self, number: u32) -> Result<&Week> {
        let weeks = self.catalog.weeks();
        let first = weeks.first().map(|w| w.number);
        let last = weeks.last().map(|w| w.number);
        let clamped = match (first, last) {
            (Some(first), Some(last)) => number.clamp(first, last),
            _ => return Err(TrainerError::WeekNotFound { number }),
        };

        self.catalog
            .week_by_number(clamped)
            .ok_or(TrainerError::WeekNotFound { number })
    }

    /// Joins a plan with its week and lesson content, preserving plan order.
    fn resolve_view(&self, week: Week, plan: DailyPlan) -> TodayView {
        let available = self.catalog.lessons_for_week(&week.id);
        let lessons = plan
            .lesson_ids
            .iter()
            .filter_map(|id| available.iter().find(|lesson| &lesson.id == id).cloned())
            .collect();

        TodayView { week, plan, lessons }
    }

    /// The UTC calendar date for a reference instant.
    pub(crate) fn utc_date(now: Timestamp) -> jiff::civil::Date {
        now.to_zoned(TimeZone::UTC).date()
    }
}
