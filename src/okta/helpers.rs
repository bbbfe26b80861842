//! Shared rendering for list commands

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cli::{ListTarget, OutputFormat};
use crate::error::Result;
use crate::okta::PaginatedCollection;
use crate::output::{output_items, OutputOptions, Tabular};

/// Print the first page, or every page for `ListTarget::All`
pub(crate) async fn output_collection<T>(
    mut collection: PaginatedCollection<'_, T>,
    target: &ListTarget,
    kind: &str,
    options: &OutputOptions,
) -> Result<()>
where
    T: DeserializeOwned + Serialize + Tabular,
{
    if *target == ListTarget::All {
        let items = collection.collect_all().await?;
        output_items(&items, options);
        return Ok(());
    }

    let more = collection.has_next();
    let items = collection.take_items();
    if items.is_empty() && options.format == OutputFormat::Table {
        eprintln!("No {}s found.", kind);
        return Ok(());
    }
    output_items(&items, options);
    if more {
        eprintln!(
            "Showing the first {} {}s. Run 'list {} all' to see every page.",
            items.len(),
            kind,
            kind
        );
    }
    Ok(())
}
