use crate::models::AggregateTable;

/// Keep the rows where `query` occurs in any column, ignoring case.
/// An empty query keeps everything.
pub fn filter_table(table: &AggregateTable, query: &str) -> AggregateTable {
    if query.is_empty() {
        return table.clone();
    }

    let needle = query.to_lowercase();
    let rows = table
        .rows
        .iter()
        .filter(|row| {
            row.cells()
                .iter()
                .any(|cell| cell.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    AggregateTable {
        group_by: table.group_by,
        rows,
    }
}
