//! ChartComponent emitter (spec §4.6): preset selection, then point-by-point
//! round-robin interleaving across all selected charts.

use serde_json::json;
use std::collections::HashSet;

use crate::keywords::{multi_count, tokenize};
use crate::presets::ChartPreset as Preset;
use crate::protocol::ComponentKind;

use super::{obj, EmitContext, EmitResult};

const KIND: ComponentKind = ComponentKind::ChartComponent;

/// Selects which chart presets to render for `message` (spec §4.6 rules 1–3,
/// same-kind duplication rule mirrored from the table emitter).
pub fn select_presets(message: &str, max_charts: usize) -> Vec<Preset> {
    let tokens = tokenize(message);
    let named: Vec<Preset> = Preset::ORDER
        .into_iter()
        .filter(|p| any_names_preset(&tokens, *p))
        .collect();

    let selected = match (named.len(), multi_count(&tokens)) {
        (0, Some(count)) => Preset::ORDER.into_iter().take(count).collect(),
        (1, Some(count)) if count > 1 => vec![named[0]; count],
        _ => {
            if named.is_empty() {
                vec![Preset::SalesLine]
            } else {
                named
            }
        }
    };

    selected.into_iter().take(max_charts).collect()
}

fn any_names_preset(tokens: &HashSet<String>, preset: Preset) -> bool {
    let words: &[&str] = match preset {
        Preset::SalesLine => &["line", "trend", "trends", "sales"],
        Preset::RevenueBar => &["bar", "bars", "revenue"],
        Preset::GrowthLine => &["growth"],
        Preset::PerformanceBar => &["performance", "metric", "metrics"],
    };
    words.iter().any(|w| tokens.contains(*w))
}

/// Drives the full chart sequence: introduce all, then interleave points
/// round-robin by point index (spec §4.6).
pub async fn emit(ctx: &mut EmitContext, message: &str) -> EmitResult {
    let max_points = ctx.config.max_chart_points;
    let presets = select_presets(message, ctx.config.max_charts_per_response);

    let mut charts: Vec<(String, Preset)> = Vec::with_capacity(presets.len());
    for preset in &presets {
        let id = ctx.ids.next();
        ctx.introduce(
            KIND,
            &id,
            obj([
                ("chart_type", json!(preset.chart_type())),
                ("title", json!(preset.title())),
                ("x_axis", json!(preset.x_axis())),
                ("series", json!([])),
            ]),
        )
        .await?;
        charts.push((id, *preset));
    }

    ctx.emit_prose("Plotting your chart …").await?;

    let max_point_count = presets.iter().map(|p| p.total_points().min(max_points)).max().unwrap_or(0);
    let mut total_points_emitted = 0usize;

    for point_index in 0..max_point_count {
        for (id, preset) in &charts {
            let preset_values = preset.values();
            if point_index >= preset_values.len().min(max_points) {
                continue;
            }
            let mut values: Vec<serde_json::Value> = ctx
                .registry
                .get(id)
                .and_then(|d| d.get("series"))
                .and_then(|v| v.as_array())
                .and_then(|arr| arr.first())
                .and_then(|s| s.get("values"))
                .and_then(|v| v.as_array())
                .cloned()
                .unwrap_or_default();
            values.push(json!(preset_values[point_index]));
            let series = json!([{ "label": preset.series_label(), "values": values }]);
            ctx.update(KIND, id, obj([("series", series)])).await?;
            total_points_emitted += 1;
            ctx.sleep_for(ctx.config.chart_point_delay).await;
        }
    }

    ctx.emit_prose(&format!("Done — {total_points_emitted} points plotted.")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::protocol::{parse_body, BodySegment};
    use tokio::sync::mpsc;

    #[test]
    fn single_keyword_selects_matching_preset() {
        assert_eq!(select_presets("show me a line chart", 3), vec![Preset::SalesLine]);
        assert_eq!(select_presets("growth please", 3), vec![Preset::GrowthLine]);
    }

    #[test]
    fn count_with_no_named_preset_picks_distinct_presets_in_order() {
        assert_eq!(
            select_presets("show me two charts", 3),
            vec![Preset::SalesLine, Preset::RevenueBar]
        );
    }

    #[test]
    fn count_with_one_named_preset_duplicates_it() {
        assert_eq!(
            select_presets("show me two line charts", 3),
            vec![Preset::SalesLine, Preset::SalesLine]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn series_values_accumulate_and_header_fields_stay_constant() {
        let (tx, mut rx) = mpsc::channel(4096);
        let mut ctx = EmitContext::new(Config::default(), tx);
        emit(&mut ctx, "show me a line chart").await.unwrap();
        drop(ctx);
        let mut out = Vec::new();
        while let Some(chunk) = rx.recv().await {
            out.extend_from_slice(&chunk.unwrap());
        }
        let body = String::from_utf8(out).unwrap();
        let segments = parse_body(&body).unwrap();
        let frames: Vec<_> = segments
            .iter()
            .filter_map(|s| match s {
                BodySegment::Frame(f) => Some(f),
                _ => None,
            })
            .collect();

        assert_eq!(frames[0].data.get("chart_type").unwrap(), "line");
        assert!(frames[0].data.get("series").unwrap().as_array().unwrap().is_empty());

        let mut last_len = 0;
        for f in &frames[1..] {
            let series = f.data.get("series").unwrap().as_array().unwrap();
            assert_eq!(series.len(), 1);
            let values = series[0].get("values").unwrap().as_array().unwrap();
            assert!(values.len() > last_len, "values must be a strict prefix-extension");
            last_len = values.len();
        }
    }
}
