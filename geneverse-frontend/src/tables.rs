use geneverse_core::table::{rows_for, RowModel, TableKind};
use geneverse_core::{Gene, PageConfig, Trait};
use web_sys::{Document, Element};

use crate::api::get_json;
use crate::dom::{clear_children, document, require};
use crate::error::UiError;

fn build_row(doc: &Document, row: &RowModel) -> Result<Element, UiError> {
    let tr = doc.create_element("tr")?;
    for cell in &row.cells {
        let td = doc.create_element("td")?;
        if let Some(span) = cell.colspan {
            td.set_attribute("colspan", &span.to_string())?;
        }
        if cell.strong {
            let strong = doc.create_element("strong")?;
            strong.set_text_content(Some(&cell.text));
            td.append_child(&strong)?;
        } else {
            td.set_text_content(Some(&cell.text));
        }
        tr.append_child(&td)?;
    }
    Ok(tr)
}

fn replace_rows(body: &Element, rows: &[RowModel]) -> Result<(), UiError> {
    let doc = document()?;
    clear_children(body);
    for row in rows {
        let tr = build_row(&doc, row)?;
        body.append_child(&tr)?;
    }
    Ok(())
}

async fn fill(body: &Element, config: &PageConfig, kind: TableKind) -> Result<usize, UiError> {
    let url = config.endpoint(kind.endpoint());
    let rows = match kind {
        TableKind::Genes => rows_for(kind, &get_json::<Vec<Gene>>(&url).await?),
        TableKind::Traits => rows_for(kind, &get_json::<Vec<Trait>>(&url).await?),
    };
    replace_rows(body, &rows)?;
    Ok(rows.len())
}

/// Loads one table into its `<tbody>`. Failures are logged and shown as a
/// single error row; the caller never sees them.
pub async fn load_table(config: PageConfig, kind: TableKind) {
    let body = match require::<Element>(kind.body_id()) {
        Ok(b) => b,
        Err(err) => {
            log::error!("Failed to load {}: {err}", kind.label());
            return;
        }
    };
    if let Err(err) = replace_rows(&body, &[RowModel::loading()]) {
        log::warn!("could not show loading row for {}: {err}", kind.label());
    }

    match fill(&body, &config, kind).await {
        Ok(n) => log::debug!("rendered {n} {} rows", kind.label()),
        Err(err) => {
            log::error!("Failed to load {}: {err}", kind.label());
            if let Err(err) = replace_rows(&body, &[RowModel::error()]) {
                log::error!("could not show error row for {}: {err}", kind.label());
            }
        }
    }
}
