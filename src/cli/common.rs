//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain table (default)
    #[default]
    Table,
    /// JSON array
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Resource kinds accepted by `list` and `create`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    #[value(alias = "users")]
    User,
    #[value(alias = "groups")]
    Group,
    #[value(aliases = ["apps", "application", "applications"])]
    App,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::User => write!(f, "user"),
            ResourceKind::Group => write!(f, "group"),
            ResourceKind::App => write!(f, "app"),
        }
    }
}

/// What `list` should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    /// First page only, with a note when more exist
    FirstPage,
    /// Every page
    All,
    /// One resource by ID (or login, group name, app label)
    One(String),
}

impl ListTarget {
    pub fn parse(arg: Option<&str>) -> Self {
        match arg.map(str::trim) {
            None | Some("") => ListTarget::FirstPage,
            Some(s) if s.eq_ignore_ascii_case("all") => ListTarget::All,
            Some(s) => ListTarget::One(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_resource_kind_aliases() {
        assert_eq!(ResourceKind::from_str("users", true).unwrap(), ResourceKind::User);
        assert_eq!(ResourceKind::from_str("apps", true).unwrap(), ResourceKind::App);
        assert!(ResourceKind::from_str("widgets", true).is_err());
    }

    #[test]
    fn test_list_target_parse() {
        assert_eq!(ListTarget::parse(None), ListTarget::FirstPage);
        assert_eq!(ListTarget::parse(Some("ALL")), ListTarget::All);
        assert_eq!(
            ListTarget::parse(Some("00u123")),
            ListTarget::One("00u123".to_string())
        );
    }
}
