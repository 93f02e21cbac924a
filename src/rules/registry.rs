use super::{blur, conway, generational, negative, Cell, Neighborhood};
use std::fmt;
use std::str::FromStr;

/// Signature shared by every transition rule
pub type RuleFn = fn(Cell, &Neighborhood) -> Cell;

/// The transition rules a simulation can be driven with
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Classic Game of Life, newborns take a fixed value
    #[default]
    Conway,
    /// Game of Life where live values count generations
    Generational,
    /// Grayscale smoothing towards the orthogonal neighbors
    Blur,
    /// Grayscale inversion
    Negative,
}

impl Rule {
    pub const ALL: [Rule; 4] = [Rule::Conway, Rule::Generational, Rule::Blur, Rule::Negative];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Conway => "conway",
            Rule::Generational => "generational",
            Rule::Blur => "blur",
            Rule::Negative => "negative",
        }
    }

    pub fn func(self) -> RuleFn {
        match self {
            Rule::Conway => conway,
            Rule::Generational => generational,
            Rule::Blur => blur,
            Rule::Negative => negative,
        }
    }

    /// Compute the next value of one cell
    pub fn apply(self, cntr: Cell, nbrs: &Neighborhood) -> Cell {
        (self.func())(cntr, nbrs)
    }

    /// Whether the rule reads cells as dead/alive rather than as intensities
    pub fn is_life(self) -> bool {
        matches!(self, Rule::Conway | Rule::Generational)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a rule name does not match any known rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRule(pub String);

impl fmt::Display for UnknownRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rule {:?} (expected one of: ", self.0)?;
        for (i, rule) in Rule::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(rule.name())?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for UnknownRule {}

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(rule.to_string().parse::<Rule>(), Ok(rule));
        }
        assert_eq!(" Generational\n".parse::<Rule>(), Ok(Rule::Generational));
        assert_eq!("BLUR".parse::<Rule>(), Ok(Rule::Blur));
    }

    #[test]
    fn test_unknown_rule() {
        let err = "highlife".parse::<Rule>().unwrap_err();
        assert_eq!(err, UnknownRule("highlife".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown rule \"highlife\" (expected one of: conway, generational, blur, negative)"
        );
        assert!("".parse::<Rule>().is_err());
    }

    #[test]
    fn test_apply_dispatches() {
        let nbrs = Neighborhood { n: 1, e: 1, s: 1, ..Default::default() };
        assert_eq!(Rule::Conway.apply(0, &nbrs), 100);
        assert_eq!(Rule::Generational.apply(0, &nbrs), 2);
        assert_eq!(Rule::Blur.apply(100, &Neighborhood::default()), 50);
        assert_eq!(Rule::Negative.apply(0, &nbrs), 255);
        assert_eq!(Rule::default(), Rule::Conway);
        assert!(Rule::Generational.is_life());
        assert!(!Rule::Negative.is_life());
    }
}
