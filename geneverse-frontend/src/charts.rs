use geneverse_core::chart::{
    bar_chart_config, pie_chart_config, ChartConfig, INHERITANCE_ENDPOINT, MOST_STUDIED_ENDPOINT,
    UNAVAILABLE_MESSAGE,
};
use geneverse_core::{ids, GeneStudies, PageConfig, PatternCount};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::api::get_json;
use crate::dom::{document, element_by_id, require};
use crate::error::UiError;

#[wasm_bindgen]
extern "C" {
    /// The Chart.js constructor loaded by the page.
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(ctx: &JsValue, config: &JsValue) -> Result<ChartJs, JsValue>;
}

fn draw(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<(), UiError> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| UiError::Js("no 2d context".into()))?;
    let config = js_sys::JSON::parse(&config.to_json()?)?;
    // Chart.js keeps its own reference to the instance through the canvas.
    let _chart = ChartJs::new(&ctx, &config)?;
    Ok(())
}

fn insert_unavailable_note(canvas: &HtmlCanvasElement) -> Result<(), UiError> {
    let note = document()?.create_element("p")?;
    note.set_class_name("chart-error");
    note.set_text_content(Some(UNAVAILABLE_MESSAGE));
    canvas.before_with_node_1(&note)?;
    Ok(())
}

fn show_unavailable(canvas: &HtmlCanvasElement) {
    if let Err(err) = insert_unavailable_note(canvas) {
        log::error!("could not show chart placeholder: {err}");
    }
}

async fn pie_chart(config: &PageConfig, canvas: &HtmlCanvasElement) -> Result<(), UiError> {
    let slices: Vec<PatternCount> = get_json(&config.endpoint(INHERITANCE_ENDPOINT)).await?;
    draw(canvas, &pie_chart_config(&slices))
}

async fn bar_chart(config: &PageConfig, canvas: &HtmlCanvasElement) -> Result<(), UiError> {
    let bars: Vec<GeneStudies> = get_json(&config.endpoint(MOST_STUDIED_ENDPOINT)).await?;
    draw(canvas, &bar_chart_config(&bars))
}

/// Draws the analytics charts one after the other. A failure in one chart
/// does not stop the other.
pub async fn load_analytics_charts(config: PageConfig) {
    match require::<HtmlCanvasElement>(ids::PIE_CHART) {
        Ok(canvas) => {
            if let Err(err) = pie_chart(&config, &canvas).await {
                log::error!("Failed to load pie chart data: {err}");
                show_unavailable(&canvas);
            }
        }
        Err(err) => log::error!("Failed to load pie chart data: {err}"),
    }

    // The bar chart is optional on the analytics page.
    match element_by_id(ids::BAR_CHART).map(|el| el.dyn_into::<HtmlCanvasElement>()) {
        None => {}
        Some(Ok(canvas)) => {
            if let Err(err) = bar_chart(&config, &canvas).await {
                log::error!("Failed to load bar chart data: {err}");
                show_unavailable(&canvas);
            }
        }
        Some(Err(_)) => log::error!(
            "Failed to load bar chart data: #{} is not a canvas",
            ids::BAR_CHART
        ),
    }
}
