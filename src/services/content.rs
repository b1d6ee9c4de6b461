//! Portfolio content loading

use crate::model::content::Portfolio;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Content compiled into the binary, used when no file is configured
const SAMPLE_PORTFOLIO: &str = include_str!("../../assets/portfolio.yaml");

/// Load and parse a portfolio YAML file
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<Portfolio> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read portfolio {}", path.display()))?;
    parse_portfolio(&contents).with_context(|| format!("Invalid portfolio {}", path.display()))
}

/// Parse portfolio YAML, dropping projects with duplicate ids
pub fn parse_portfolio(contents: &str) -> Result<Portfolio> {
    let mut portfolio: Portfolio = serde_yaml::from_str(contents)?;

    let mut seen = std::collections::HashSet::new();
    portfolio.projects.retain(|p| {
        let fresh = seen.insert(p.id.clone());
        if !fresh {
            tracing::warn!("Skipping duplicate project id '{}'", p.id);
        }
        fresh
    });

    Ok(portfolio)
}

/// The built-in sample portfolio
pub fn sample_portfolio() -> Result<Portfolio> {
    parse_portfolio(SAMPLE_PORTFOLIO).context("Built-in sample portfolio is invalid")
}
