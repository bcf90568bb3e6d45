//! Query utterances → [`FilterSpec`].
//!
//! Rules are tried top to bottom and the first one that produces a spec wins.
//! Order is significant: "what do I have today" is a date filter, not a
//! time budget.

use std::sync::{Arc, LazyLock};

use chrono::{Local, NaiveDate};
use regex::Regex;
use tracing::debug;
use vox_core::{FilterSpec, TaskFilter};

use crate::matcher::CompiledLexicon;

static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*minutes?").expect("Invalid regex"));

/// What a rule sees: the lowercased query and the reference day.
struct QueryContext<'a> {
    text: &'a str,
    today: NaiveDate,
}

type Rule = fn(&CompiledLexicon, &QueryContext<'_>) -> Option<FilterSpec>;

const RULES: [(&str, Rule); 3] = [
    ("today", today_rule),
    ("time_available", time_available_rule),
    ("labels", labels_rule),
];

/// Turns a question or command about existing tasks into a filter.
#[derive(Debug, Clone, Default)]
pub struct QueryInterpreter {
    lexicon: Arc<CompiledLexicon>,
}

impl QueryInterpreter {
    #[must_use]
    pub const fn new(lexicon: Arc<CompiledLexicon>) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn interpret_query(&self, text: &str) -> FilterSpec {
        self.interpret_query_at(text, Local::now().date_naive())
    }

    /// Interpret `text` with `today` as the day "today" refers to.
    #[must_use]
    pub fn interpret_query_at(&self, text: &str, today: NaiveDate) -> FilterSpec {
        let lower = text.to_lowercase();
        let ctx = QueryContext {
            text: &lower,
            today,
        };

        for (rule, apply) in RULES {
            if let Some(spec) = apply(&self.lexicon, &ctx) {
                debug!(rule, kind = spec.kind(), "interpreted query");
                return spec;
            }
        }

        debug!(query = %lower, "query not understood");
        FilterSpec::Unknown
    }
}

/// "today" / "today's": tasks due today, with a priority if one was said.
fn today_rule(lexicon: &CompiledLexicon, ctx: &QueryContext<'_>) -> Option<FilterSpec> {
    if !ctx.text.contains("today") {
        return None;
    }
    Some(FilterSpec::Filter {
        filter: TaskFilter {
            priority: lexicon.priority_in(ctx.text).filter(|p| p.is_explicit()),
            category: None,
            date: Some(ctx.today),
        },
    })
}

/// "I have 15 minutes" / "what can I finish in 20 minutes".
fn time_available_rule(_: &CompiledLexicon, ctx: &QueryContext<'_>) -> Option<FilterSpec> {
    if !(ctx.text.contains("have") || ctx.text.contains("finish")) {
        return None;
    }
    let caps = MINUTES.captures(ctx.text)?;
    let minutes = caps[1].parse().ok()?;
    Some(FilterSpec::TimeBased {
        time_available: minutes,
    })
}

/// Any explicit priority or category.
fn labels_rule(lexicon: &CompiledLexicon, ctx: &QueryContext<'_>) -> Option<FilterSpec> {
    let filter = TaskFilter {
        priority: lexicon.priority_in(ctx.text).filter(|p| p.is_explicit()),
        category: lexicon.category_in(ctx.text),
        date: None,
    };
    if filter.is_empty() {
        return None;
    }
    Some(FilterSpec::Filter { filter })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use vox_core::{Category, Priority};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn query(text: &str) -> FilterSpec {
        QueryInterpreter::default().interpret_query_at(text, today())
    }

    fn filter(
        priority: Option<Priority>,
        category: Option<Category>,
        date: Option<NaiveDate>,
    ) -> FilterSpec {
        FilterSpec::Filter {
            filter: TaskFilter {
                priority,
                category,
                date,
            },
        }
    }

    #[test]
    fn todays_high_priority_tasks() {
        assert_eq!(
            query("show today's high priority tasks"),
            filter(Some(Priority::High), None, Some(today()))
        );
    }

    #[test]
    fn today_drops_medium_priority_and_category() {
        assert_eq!(
            query("what normal office work is due today"),
            filter(None, None, Some(today()))
        );
    }

    #[rstest]
    #[case("I have 15 minutes", 15)]
    #[case("what can I finish in 30 minutes", 30)]
    #[case("i have 1 minute", 1)]
    #[case("have 45minutes to spare", 45)]
    fn time_budget(#[case] text: &str, #[case] minutes: u32) {
        assert_eq!(
            query(text),
            FilterSpec::TimeBased {
                time_available: minutes
            }
        );
    }

    #[test]
    fn minutes_without_have_or_finish_is_not_a_budget() {
        assert_eq!(
            query("meeting in 15 minutes"),
            filter(None, Some(Category::Office), None)
        );
    }

    #[test]
    fn today_wins_over_time_budget() {
        assert_eq!(
            query("I have 15 minutes today"),
            filter(None, None, Some(today()))
        );
    }

    #[test]
    fn oversized_minutes_fall_through() {
        assert_eq!(
            query("i have 99999999999999999999 minutes"),
            FilterSpec::Unknown
        );
    }

    #[rstest]
    #[case("show office tasks", None, Some(Category::Office))]
    #[case("show family tasks", None, Some(Category::Family))]
    #[case("urgent stuff", Some(Priority::High), None)]
    #[case("minor home chores", Some(Priority::Low), Some(Category::Family))]
    fn label_filters(
        #[case] text: &str,
        #[case] priority: Option<Priority>,
        #[case] category: Option<Category>,
    ) {
        assert_eq!(query(text), filter(priority, category, None));
    }

    #[rstest]
    #[case("xyz completely unrelated text")]
    #[case("")]
    #[case("show normal tasks")]
    fn unknown_queries(#[case] text: &str) {
        assert_eq!(query(text), FilterSpec::Unknown);
    }
}
