use std::fmt::{self, Display};
use std::sync::Arc;

use crate::sorted_vec::UniqueSortedVec;

pub mod day;
pub mod time;

// OpeningHoursExpression

/// The root AST node: a sequence of [`RuleSequence`]s, each combined with the
/// previous one through its own [`RuleOperator`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct OpeningHoursExpression {
    pub rules: Vec<RuleSequence>,
}

impl OpeningHoursExpression {
    /// Whether this expression always evaluates to the same state regardless
    /// of date or time, ie. it is empty or a single unconditional rule.
    pub fn is_constant(&self) -> bool {
        crate::normalize::rules_is_constant(&self.rules)
    }

    /// Rewrite this expression into an equivalent, simplified form: adjacent
    /// redundant or fully-subsumed rules are merged or dropped.
    pub fn normalize(self) -> Self {
        Self { rules: crate::normalize::normalize_rules(self.rules) }
    }
}

impl Display for OpeningHoursExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                let sep = match rule.operator {
                    RuleOperator::Normal => "; ",
                    RuleOperator::Additional => ", ",
                    RuleOperator::Fallback => " || ",
                };

                write!(f, "{sep}")?;
            }

            write!(f, "{rule}")?;
        }

        Ok(())
    }
}

// RuleSequence

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RuleSequence {
    pub day_selector: day::DaySelector,
    pub time_selector: time::TimeSelector,
    pub kind: RuleKind,
    pub operator: RuleOperator,
    pub(crate) comments: UniqueSortedVec<Arc<str>>,
}

impl RuleSequence {
    pub fn new(
        day_selector: day::DaySelector,
        time_selector: time::TimeSelector,
        kind: RuleKind,
        operator: RuleOperator,
        comments: Vec<Arc<str>>,
    ) -> Self {
        Self {
            day_selector,
            time_selector,
            kind,
            operator,
            comments: comments.into(),
        }
    }

    /// Return the sorted, deduplicated list of comments attached to this RuleSequence.
    pub fn comments(&self) -> &UniqueSortedVec<Arc<str>> {
        &self.comments
    }

    /// Whether this rule applies identically to every day and every time,
    /// ie. it has no day selector and covers the full 00:00-24:00 range.
    pub(crate) fn is_full_day_constant(&self) -> bool {
        self.day_selector.is_empty() && self.time_selector.is_00_24()
    }
}

impl Display for RuleSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_full_day_constant() {
            write!(f, "24/7")?;
        } else {
            let has_day_selector = !self.day_selector.is_empty();

            if has_day_selector {
                write!(f, "{}", self.day_selector)?;
            }

            if !self.time_selector.is_00_24() {
                if has_day_selector {
                    write!(f, " ")?;
                }

                write!(f, "{}", self.time_selector)?;
            }
        }

        match self.kind {
            RuleKind::Open => {}
            RuleKind::Closed => write!(f, " closed")?,
            RuleKind::Unknown => write!(f, " unknown")?,
        }

        for comment in self.comments.iter() {
            write!(f, " \"{}\"", comment.replace('\\', "\\\\").replace('"', "\\\""))?;
        }

        Ok(())
    }
}

// RuleKind

#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RuleKind {
    Open,
    Closed,
    Unknown,
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum RuleOperator {
    Normal,
    Additional,
    Fallback,
}
