//! Static lesson categorization.
//!
//! Maps lesson ids onto pedagogical categories. The mapping is editorial:
//! it is maintained alongside the curriculum assets rather than derived
//! from lesson data, and a lesson may carry zero, one, or several
//! categories. Pure lookup, no failure modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pedagogical category of a lesson.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LessonCategory {
    /// Core obedience skills: cues, recall, stays
    Foundation,
    /// Household and public manners
    LifeManners,
    /// Exposure to people, dogs, places, and handling
    Socialization,
}

impl fmt::Display for LessonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LessonCategory::Foundation => "foundation",
            LessonCategory::LifeManners => "life-manners",
            LessonCategory::Socialization => "socialization",
        };
        write!(f, "{s}")
    }
}

use LessonCategory::{Foundation, LifeManners, Socialization};

/// Returns the categories of a lesson, empty for unknown ids.
pub fn categories_of(lesson_id: &str) -> &'static [LessonCategory] {
    match lesson_id {
        // Week 1
        "name-response" => &[Foundation],
        "collar-touch" => &[Socialization],
        "crate-intro" => &[LifeManners],
        "handling-paws" => &[Socialization],
        // Week 2
        "sit" => &[Foundation],
        "recall-foundations" => &[Foundation],
        "surface-walk" => &[Socialization],
        "puppy-zen" => &[Foundation, LifeManners],
        "novel-sounds" => &[Socialization],
        // Week 3
        "loose-leash-intro" => &[Foundation],
        "stranger-greeting" => &[Socialization, LifeManners],
        "settle-on-mat" => &[LifeManners],
        "down" => &[Foundation],
        "car-rides" => &[Socialization],
        // Week 4
        "leave-it-intro" => &[Foundation],
        "trade-game" => &[Foundation, LifeManners],
        "door-manners" => &[LifeManners],
        "stay-duration" => &[Foundation],
        "meet-a-dog" => &[Socialization],
        // Week 5
        "recall-distractions" => &[Foundation],
        "grooming-intro" => &[LifeManners],
        "alone-time" => &[LifeManners],
        "place-cue" => &[Foundation],
        "wait-at-curb" => &[LifeManners],
        // Week 6
        "city-walk" => &[Socialization],
        "drop-it" => &[Foundation],
        "vet-handling" => &[Socialization],
        "touch-target" => &[Foundation],
        "stairs-practice" => &[Socialization],
        // Week 7
        "stay-distance" => &[Foundation],
        "food-bowl-manners" => &[LifeManners],
        "hide-and-seek-recall" => &[Foundation],
        "heel-start" => &[Foundation],
        "bite-inhibition" => &[LifeManners],
        // Week 8
        "calm-cafe" => &[LifeManners, Socialization],
        _ => &[],
    }
}

/// Whether a lesson carries the given category.
pub fn has_category(lesson_id: &str, category: LessonCategory) -> bool {
    categories_of(lesson_id).contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_lesson_has_categories() {
        assert_eq!(categories_of("sit"), &[Foundation]);
        assert!(has_category("puppy-zen", Foundation));
        assert!(has_category("puppy-zen", LifeManners));
    }

    #[test]
    fn unknown_lesson_has_no_categories() {
        assert!(categories_of("no-such-lesson").is_empty());
        assert!(!has_category("no-such-lesson", Foundation));
    }

    #[test]
    fn uncategorized_lesson_is_allowed() {
        // harness-fit is deliberately left out of the mapping.
        assert!(categories_of("harness-fit").is_empty());
    }
}
