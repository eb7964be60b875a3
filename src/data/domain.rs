//! Axis domain resolution for the history charts.
//!
//! X and Y resolve differently: X overrides replace the auto extent
//! wholesale (one typed bound disables auto on both sides), while Y
//! overrides apply per side over a whole-number-rounded extent. The X
//! extent is never rounded.

/// One side of a plot domain: a concrete value or "let the data decide".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisBound {
    Auto,
    Value(f64),
}

impl AxisBound {
    pub fn is_auto(self) -> bool {
        matches!(self, AxisBound::Auto)
    }

    /// The concrete value, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            AxisBound::Value(value) => Some(value),
            AxisBound::Auto => None,
        }
    }
}

impl From<Option<f64>> for AxisBound {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(value) => AxisBound::Value(value),
            None => AxisBound::Auto,
        }
    }
}

/// A resolved `[min, max]` pair for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDomain {
    pub min: AxisBound,
    pub max: AxisBound,
}

impl ResolvedDomain {
    /// Fully automatic on both sides.
    pub const AUTO: ResolvedDomain = ResolvedDomain {
        min: AxisBound::Auto,
        max: AxisBound::Auto,
    };
}

/// Tight `[min, max]` of the finite values, or fully auto when there are
/// none.
pub fn auto_domain(values: impl IntoIterator<Item = f64>) -> ResolvedDomain {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for value in values {
        if !value.is_finite() {
            continue;
        }
        any = true;
        min = min.min(value);
        max = max.max(value);
    }
    if any {
        ResolvedDomain {
            min: AxisBound::Value(min),
            max: AxisBound::Value(max),
        }
    } else {
        ResolvedDomain::AUTO
    }
}

/// Expand a domain outward to whole numbers.
///
/// A degenerate single-point domain becomes `[round(v) - 1, round(v) + 1]`.
/// Domains with an auto or non-finite side pass through untouched.
pub fn round_domain_to_whole(domain: ResolvedDomain) -> ResolvedDomain {
    let (Some(min), Some(max)) = (domain.min.value(), domain.max.value()) else {
        return domain;
    };
    if !min.is_finite() || !max.is_finite() {
        return domain;
    }
    if min == max {
        let whole = min.round();
        ResolvedDomain {
            min: AxisBound::Value(whole - 1.0),
            max: AxisBound::Value(whole + 1.0),
        }
    } else {
        ResolvedDomain {
            min: AxisBound::Value(min.floor()),
            max: AxisBound::Value(max.ceil()),
        }
    }
}

/// Resolve the time axis.
///
/// As soon as either override is present the domain is built purely from
/// the overrides (the absent side stays auto) and the data extent is
/// ignored. With no overrides the tight extent is used, unrounded.
pub fn resolve_x_domain(
    timestamps: impl IntoIterator<Item = f64>,
    min_override: Option<f64>,
    max_override: Option<f64>,
) -> ResolvedDomain {
    if min_override.is_some() || max_override.is_some() {
        ResolvedDomain {
            min: min_override.into(),
            max: max_override.into(),
        }
    } else {
        auto_domain(timestamps)
    }
}

/// Resolve a value axis.
///
/// Each side independently prefers its override and otherwise falls back
/// to the whole-number-rounded data extent.
pub fn resolve_y_domain(
    values: impl IntoIterator<Item = f64>,
    min_override: Option<f64>,
    max_override: Option<f64>,
) -> ResolvedDomain {
    let base = round_domain_to_whole(auto_domain(values));
    ResolvedDomain {
        min: min_override.map(AxisBound::Value).unwrap_or(base.min),
        max: max_override.map(AxisBound::Value).unwrap_or(base.max),
    }
}
