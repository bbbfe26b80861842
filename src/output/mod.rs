//! Output formatting module
//!
//! Handles different output formats: table, JSON, YAML

mod common;
mod resources;

use serde::Serialize;

use crate::cli::OutputFormat;

pub use common::{print_json, print_yaml};

/// Output settings shared by every command
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub no_header: bool,
    /// Suppress spinners and interactive questions
    pub batch: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            no_header: false,
            batch: false,
        }
    }
}

/// A resource that can be rendered as a table row
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// Output items in the requested format
pub fn output_items<T>(items: &[T], options: &OutputOptions)
where
    T: Tabular + Serialize,
{
    match options.format {
        OutputFormat::Table => println!("{}", render_table(items, options.no_header)),
        OutputFormat::Json => print_json(&items),
        OutputFormat::Yaml => print_yaml(&items),
    }
}

/// Report a created resource: a message for tables, the resource otherwise
pub fn output_created<T>(item: &T, message: &str, options: &OutputOptions)
where
    T: Serialize,
{
    match options.format {
        OutputFormat::Table => println!("{}", message),
        OutputFormat::Json => print_json(item),
        OutputFormat::Yaml => print_yaml(item),
    }
}

fn render_table<T: Tabular>(items: &[T], no_header: bool) -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    if !no_header {
        table.set_header(T::headers().to_vec());
    }
    for item in items {
        table.add_row(item.row());
    }
    table
}
