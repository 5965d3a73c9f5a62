//! Element classification.
//!
//! The semantic type name of a BPMN element (`bpmn:UserTask`,
//! `bpmn:StartEvent`, `bpmn:Lane`, ...) decides which shape family draws it.
//! Matching is a case-sensitive substring test, first match wins:
//!
//! | Contains              | Category    |
//! |-----------------------|-------------|
//! | `Task` or `Activity`  | Activity    |
//! | `Event`               | Event       |
//! | `Gateway`             | Gateway     |
//! | `Participant`, `Lane` | Container   |
//! | anything else         | Fallback    |
//!
//! Compound names resolve by this precedence, so an invented
//! `bpmn:EventTask` is an activity. Type names arrive in upper camel case
//! (`bpmn:Task`, `bpmn:StartEvent`), the parser having normalised the lower
//! camel case element names of the XML.

use std::fmt;

/// Shape family used to draw an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    Activity,
    Event,
    Gateway,
    Container,
    Fallback,
}

impl ShapeCategory {
    /// Containers render below every other shape.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Container)
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Activity => "activity",
            Self::Event => "event",
            Self::Gateway => "gateway",
            Self::Container => "container",
            Self::Fallback => "fallback",
        };
        write!(f, "{name}")
    }
}

/// Classifies an element by its qualified type name.
pub fn classify(type_name: &str) -> ShapeCategory {
    if type_name.contains("Task") || type_name.contains("Activity") {
        ShapeCategory::Activity
    } else if type_name.contains("Event") {
        ShapeCategory::Event
    } else if type_name.contains("Gateway") {
        ShapeCategory::Gateway
    } else if type_name.contains("Participant") || type_name.contains("Lane") {
        ShapeCategory::Container
    } else {
        ShapeCategory::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_types() {
        assert_eq!(classify("bpmn:UserTask"), ShapeCategory::Activity);
        assert_eq!(classify("bpmn:CallActivity"), ShapeCategory::Activity);
        assert_eq!(classify("bpmn:StartEvent"), ShapeCategory::Event);
        assert_eq!(classify("bpmn:ExclusiveGateway"), ShapeCategory::Gateway);
        assert_eq!(classify("bpmn:Participant"), ShapeCategory::Container);
        assert_eq!(classify("bpmn:Lane"), ShapeCategory::Container);
        assert_eq!(classify("bpmn:DataObjectReference"), ShapeCategory::Fallback);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(classify("bpmn:EventTask"), ShapeCategory::Activity);
        assert_eq!(classify("bpmn:GatewayEvent"), ShapeCategory::Event);
        assert_eq!(classify("bpmn:LaneGateway"), ShapeCategory::Gateway);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(classify("bpmn:Task"), ShapeCategory::Activity);
        assert_eq!(classify("bpmn:task"), ShapeCategory::Fallback);
        assert_eq!(classify("bpmn:lane"), ShapeCategory::Fallback);
    }

    #[test]
    fn test_display() {
        assert_eq!(ShapeCategory::Container.to_string(), "container");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Type names that contain none of the classification keywords.
    fn keyword_free_name() -> impl Strategy<Value = String> {
        "[a-z:]{0,12}[A-Z]?[a-z]{0,12}".prop_filter("must not contain a keyword", |name| {
            ["Task", "Activity", "Event", "Gateway", "Participant", "Lane"]
                .iter()
                .all(|keyword| !name.contains(keyword))
        })
    }

    fn affix() -> impl Strategy<Value = String> {
        "[a-zA-Z:]{0,10}"
    }

    // ===================
    // Property Test Functions
    // ===================

    fn check_keyword_free_falls_back(name: &str) -> Result<(), TestCaseError> {
        prop_assert_eq!(classify(name), ShapeCategory::Fallback);
        Ok(())
    }

    /// Any name containing `Task` is an activity, whatever surrounds it.
    fn check_task_wins(prefix: &str, suffix: &str) -> Result<(), TestCaseError> {
        let name = format!("{prefix}Task{suffix}");
        prop_assert_eq!(classify(&name), ShapeCategory::Activity);
        Ok(())
    }

    /// Classification depends only on the name.
    fn check_deterministic(name: &str) -> Result<(), TestCaseError> {
        prop_assert_eq!(classify(name), classify(name));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn keyword_free_falls_back(name in keyword_free_name()) {
            check_keyword_free_falls_back(&name)?;
        }

        #[test]
        fn task_wins(prefix in affix(), suffix in affix()) {
            check_task_wins(&prefix, &suffix)?;
        }

        #[test]
        fn deterministic(name in ".*") {
            check_deterministic(&name)?;
        }
    }
}
