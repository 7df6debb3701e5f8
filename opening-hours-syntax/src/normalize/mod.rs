pub(crate) mod canonical;
pub(crate) mod frame;
pub(crate) mod paving;

use crate::normalize::paving::{EmptyPavingSelector, Paving, Paving4D};
use crate::rewrite::simplify_expression;
use crate::rules::day::DaySelector;
use crate::rules::time::TimeSelector;
use crate::rules::{OpeningHoursExpression, RuleOperator, RuleSequence};
use crate::RuleKind;

use self::canonical::{Canonical, CanonicalSelector, MakeCanonical};

// --
// -- Normalization Logic
// --

/// Convert a rule sequence to a n-dim selector. Returns `None` if some part of
/// the selector cannot be represented on the canonical grid (holidays, Easter
/// dates, nth-weekday occurrences, variable times, ...).
pub(crate) fn ruleseq_to_selector(rs: &RuleSequence) -> Option<CanonicalSelector> {
    let ds = &rs.day_selector;

    let selector = EmptyPavingSelector
        .dim_front(MakeCanonical::try_from_iterator(&ds.weekday)?)
        .dim_front(MakeCanonical::try_from_iterator(&ds.week)?)
        .dim_front(MakeCanonical::try_from_iterator(&ds.monthday)?)
        .dim_front(MakeCanonical::try_from_iterator(&ds.year)?)
        .dim_front(MakeCanonical::try_from_iterator(&rs.time_selector.time)?);

    Some(selector)
}

/// Convert a canonical paving back into a rules sequence.
pub(crate) fn canonical_to_seq(mut canonical: Canonical) -> impl Iterator<Item = RuleSequence> {
    // Keep track of the days that have already been outputed. This allows to use an additional
    // rule if it is absolutly required only.
    let mut days_covered = Paving4D::default();

    std::iter::from_fn(move || {
        // Extract open periods first, then unknowns
        let ((kind, comments), selector) = [RuleKind::Open, RuleKind::Unknown, RuleKind::Closed]
            .into_iter()
            .find_map(|target_kind| {
                canonical.pop_filter(|(kind, comments)| {
                    *kind == target_kind
                        && (target_kind != RuleKind::Closed || !comments.is_empty())
                })
            })?;

        let (rgs_time, day_selector) = selector.into_unpack_front();

        let operator = {
            if days_covered.is_val(&day_selector, &false) {
                RuleOperator::Normal
            } else {
                RuleOperator::Additional
            }
        };

        days_covered.set(&day_selector, &true);
        let (rgs_year, day_selector) = day_selector.into_unpack_front();
        let (rgs_monthday, day_selector) = day_selector.into_unpack_front();
        let (rgs_week, day_selector) = day_selector.into_unpack_front();
        let (rgs_weekday, _) = day_selector.into_unpack_front();

        let day_selector = DaySelector {
            year: MakeCanonical::into_selector(rgs_year, true),
            monthday: MakeCanonical::into_selector(rgs_monthday, true),
            week: MakeCanonical::into_selector(rgs_week, true),
            weekday: MakeCanonical::into_selector(rgs_weekday, true),
        };

        let time_selector = TimeSelector {
            time: MakeCanonical::into_selector(rgs_time, false),
        };

        Some(RuleSequence {
            day_selector,
            time_selector,
            kind,
            operator,
            comments,
        })
    })
}

/// A rule sequence list is constant if it trivially boils down to a single
/// always-open/closed/unknown rule, or to no rule at all (always closed).
pub(crate) fn rules_is_constant(rules: &[RuleSequence]) -> bool {
    match rules {
        [] => true,
        [rule] => rule.operator == RuleOperator::Normal && rule.is_full_day_constant(),
        _ => false,
    }
}

/// Rewrite a rule sequence list into a canonical, minimal form.
///
/// This only applies when every rule uses the `NORMAL` operator and every
/// selector can be projected onto the canonical grid; otherwise the input is
/// returned unchanged (after subset simplification), since `ADDITIONAL` /
/// `FALLBACK` semantics and selectors like holidays or Easter dates are not
/// representable on the grid.
pub(crate) fn normalize_rules(rules: Vec<RuleSequence>) -> Vec<RuleSequence> {
    if rules.iter().any(|rs| rs.operator != RuleOperator::Normal) {
        return simplify_expression(OpeningHoursExpression { rules }).rules;
    }

    let mut canonical = Canonical::default();

    for rs in &rules {
        let Some(selector) = ruleseq_to_selector(rs) else {
            return simplify_expression(OpeningHoursExpression { rules }).rules;
        };

        canonical.set(&selector, &(rs.kind, rs.comments.clone()));
    }

    let normalized = canonical_to_seq(canonical).collect();
    simplify_expression(OpeningHoursExpression { rules: normalized }).rules
}
