//! Row models for the genes and traits tables.
//!
//! The frontend turns a [`RowModel`] into `<tr>`/`<td>` nodes and sets cell
//! text through `textContent`, so record values never reach the page as markup.

use crate::{or_placeholder, Gene, Trait};

/// Both tables have four columns; message rows span all of them.
pub const COLUMN_COUNT: u32 = 4;

pub const LOADING_MESSAGE: &str = "Loading data...";
pub const ERROR_MESSAGE: &str = "Error loading data. See console for details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Genes,
    Traits,
}

impl TableKind {
    pub fn label(&self) -> &'static str {
        match self {
            TableKind::Genes => "genes",
            TableKind::Traits => "traits",
        }
    }

    pub fn body_id(&self) -> &'static str {
        match self {
            TableKind::Genes => crate::ids::GENES_TABLE_BODY,
            TableKind::Traits => crate::ids::TRAITS_TABLE_BODY,
        }
    }

    /// Endpoint path relative to the API base.
    pub fn endpoint(&self) -> &'static str {
        match self {
            TableKind::Genes => "genes",
            TableKind::Traits => "traits",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            TableKind::Genes => "No gene data found.",
            TableKind::Traits => "No trait data found.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellModel {
    pub text: String,
    pub strong: bool,
    pub colspan: Option<u32>,
}

impl CellModel {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
            colspan: None,
        }
    }

    fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: true,
            colspan: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub cells: Vec<CellModel>,
}

impl RowModel {
    /// Single full-width row carrying a status message.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            cells: vec![CellModel {
                text: text.into(),
                strong: false,
                colspan: Some(COLUMN_COUNT),
            }],
        }
    }

    pub fn loading() -> Self {
        Self::message(LOADING_MESSAGE)
    }

    pub fn error() -> Self {
        Self::message(ERROR_MESSAGE)
    }
}

impl From<&Gene> for RowModel {
    fn from(gene: &Gene) -> Self {
        Self {
            cells: vec![
                CellModel::strong(or_placeholder(gene.gene_symbol.as_deref())),
                CellModel::plain(or_placeholder(gene.gene_name.as_deref())),
                CellModel::plain(gene.association_count.to_string()),
                CellModel::plain(or_placeholder(gene.description.as_deref())),
            ],
        }
    }
}

impl From<&Trait> for RowModel {
    fn from(t: &Trait) -> Self {
        Self {
            cells: vec![
                CellModel::strong(or_placeholder(t.trait_name.as_deref())),
                CellModel::plain(or_placeholder(t.category.as_deref())),
                CellModel::plain(or_placeholder(t.inheritance_pattern.as_deref())),
                CellModel::plain(t.gene_count.to_string()),
            ],
        }
    }
}

/// Rows for a fetched batch; an empty batch yields the table's empty message.
pub fn rows_for<'a, T>(kind: TableKind, records: &'a [T]) -> Vec<RowModel>
where
    RowModel: From<&'a T>,
{
    if records.is_empty() {
        return vec![RowModel::message(kind.empty_message())];
    }
    records.iter().map(RowModel::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene(symbol: &str, description: Option<&str>) -> Gene {
        Gene {
            gene_id: None,
            gene_symbol: Some(symbol.into()),
            gene_name: Some(format!("{symbol} name")),
            association_count: 2,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn gene_row_bolds_symbol_and_fills_placeholder() {
        let row = RowModel::from(&gene("CFTR", None));
        assert_eq!(row.cells.len(), COLUMN_COUNT as usize);
        assert!(row.cells[0].strong);
        assert_eq!(row.cells[0].text, "CFTR");
        assert_eq!(row.cells[2].text, "2");
        assert_eq!(row.cells[3].text, "N/A");
        assert!(row.cells[1..].iter().all(|c| !c.strong));
    }

    #[test]
    fn trait_row_column_order() {
        let t = Trait {
            trait_id: Some(9),
            trait_name: Some("Cystic fibrosis".into()),
            category: Some("Disease".into()),
            inheritance_pattern: None,
            gene_count: 1,
        };
        let row = RowModel::from(&t);
        let texts: Vec<&str> = row.cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Cystic fibrosis", "Disease", "N/A", "1"]);
        assert!(row.cells[0].strong);
    }

    #[test]
    fn empty_batch_yields_message_row() {
        let rows = rows_for::<Gene>(TableKind::Genes, &[]);
        assert_eq!(rows, vec![RowModel::message("No gene data found.")]);
        assert_eq!(rows[0].cells[0].colspan, Some(4));

        let rows = rows_for::<Trait>(TableKind::Traits, &[]);
        assert_eq!(rows[0].cells[0].text, "No trait data found.");
    }

    #[test]
    fn rows_keep_server_order() {
        let genes = vec![gene("B", Some("x")), gene("A", Some("y"))];
        let rows = rows_for(TableKind::Genes, &genes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[0].text, "B");
        assert_eq!(rows[1].cells[3].text, "y");
    }

    #[test]
    fn missing_names_render_placeholder_rows() {
        let mut unnamed = gene("X", None);
        unnamed.gene_symbol = None;
        unnamed.gene_name = None;
        let genes = vec![gene("BRCA1", Some("repair")), unnamed];
        let rows = rows_for(TableKind::Genes, &genes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[0].text, "BRCA1");
        assert_eq!(rows[1].cells[0].text, "N/A");
        assert!(rows[1].cells[0].strong);
        assert_eq!(rows[1].cells[1].text, "N/A");

        let t = Trait {
            trait_id: None,
            trait_name: None,
            category: None,
            inheritance_pattern: None,
            gene_count: 0,
        };
        let row = RowModel::from(&t);
        assert_eq!(row.cells[0].text, "N/A");
        assert_eq!(row.cells[3].text, "0");
    }

    #[test]
    fn status_rows_span_all_columns() {
        assert_eq!(RowModel::loading().cells[0].text, "Loading data...");
        assert_eq!(RowModel::error().cells[0].colspan, Some(COLUMN_COUNT));
        assert_eq!(TableKind::Traits.body_id(), "traits-table-body");
    }
}
