use crate::rules::{Pattern, Rule, UnknownRule};
use std::fmt;

pub const GRID_WIDTH: u32 = 64;
pub const GRID_HEIGHT: u32 = 64;
pub const GENERATIONS: usize = 32;

/// How the first generation is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// All cells zero
    Empty,
    /// A pattern placed at the grid center
    Pattern(Pattern),
    /// A diagonal grayscale ramp
    Gradient,
}

impl Seed {
    /// A seed that gives `rule` something to work on
    pub fn for_rule(rule: Rule) -> Self {
        if rule.is_life() {
            Seed::Pattern(Pattern::Glider)
        } else {
            Seed::Gradient
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub rule: Rule,
    /// Set when the rule came from `CELL_RULE` rather than the default
    pub requested_rule: Option<Rule>,
    pub seed: Seed,
    /// Generations the demo binary runs
    pub generations: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            rule: Rule::Conway,
            requested_rule: None,
            seed: Seed::Pattern(Pattern::Glider),
            generations: GENERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Rule(UnknownRule),
    /// A variable was set to something that is not a number
    Number { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Rule(err) => write!(f, "CELL_RULE: {}", err),
            ConfigError::Number { var, value } => {
                write!(f, "{}: expected a number, got {:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Rule(err) => Some(err),
            ConfigError::Number { .. } => None,
        }
    }
}

impl From<UnknownRule> for ConfigError {
    fn from(err: UnknownRule) -> Self {
        ConfigError::Rule(err)
    }
}

impl SimConfig {
    /// Defaults overridden by `CELL_RULE`, `GRID_WIDTH`, `GRID_HEIGHT` and `GENERATIONS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("CELL_RULE") {
            config.rule = name.parse()?;
            config.requested_rule = Some(config.rule);
            config.seed = Seed::for_rule(config.rule);
        }
        if let Some(width) = parse_number(&lookup, "GRID_WIDTH")? {
            config.width = width;
        }
        if let Some(height) = parse_number(&lookup, "GRID_HEIGHT")? {
            config.height = height;
        }
        if let Some(generations) = parse_number(&lookup, "GENERATIONS")? {
            config.generations = generations;
        }

        Ok(config)
    }
}

fn parse_number<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Number { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = SimConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.requested_rule, None);
    }

    #[test]
    fn test_overrides() {
        let config = SimConfig::from_lookup(lookup_in(&[
            ("CELL_RULE", "blur"),
            ("GRID_WIDTH", "16"),
            ("GRID_HEIGHT", " 8 "),
            ("GENERATIONS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.rule, Rule::Blur);
        assert_eq!(config.requested_rule, Some(Rule::Blur));
        assert_eq!(config.seed, Seed::Gradient);
        assert_eq!((config.width, config.height, config.generations), (16, 8, 3));
    }

    #[test]
    fn test_bad_values() {
        let err = SimConfig::from_lookup(lookup_in(&[("CELL_RULE", "seeds")])).unwrap_err();
        assert_eq!(err, ConfigError::Rule(UnknownRule("seeds".to_string())));

        let err = SimConfig::from_lookup(lookup_in(&[("GRID_WIDTH", "-1")])).unwrap_err();
        assert_eq!(err, ConfigError::Number { var: "GRID_WIDTH", value: "-1".to_string() });
    }
}
