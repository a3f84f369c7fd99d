//! Per-component validation (spec §4.7 step 5): the model's plan is
//! untrusted input. Each item must name a known kind and carry its
//! required fields, and must respect the configured size caps; anything
//! that fails either check is dropped rather than rejecting the whole
//! plan, since a partially-usable plan is still better than falling back
//! entirely (spec §7.4 error taxonomy treats this as non-fatal). An
//! oversized `TableA`/`ChartComponent` is itself a validation failure
//! (spec §4.7 step 5: "for `TableA`, `rows` length ≤ configured max...
//! Drop any component failing validation") — it is dropped whole, not
//! clipped and kept.

use serde_json::Value;

use crate::config::Config;
use crate::protocol::ComponentKind;

use super::PlannedComponent;

const CHART_TYPES: &[&str] = &["line", "bar", "area", "pie", "scatter"];

/// Validates `items` against `cfg`'s caps, dropping any item that doesn't
/// parse into one of the three known shapes or that exceeds a size cap.
/// Order is preserved; nothing here enforces the overall per-response
/// component cap, which `resolve_plan` applies afterward.
pub fn validate_plan(items: Vec<Value>, cfg: &Config) -> Vec<PlannedComponent> {
    items
        .into_iter()
        .filter_map(|item| validate_one(item, cfg))
        .collect()
}

fn validate_one(item: Value, cfg: &Config) -> Option<PlannedComponent> {
    let object = item.as_object()?;
    let kind = object.get("type").and_then(Value::as_str)?;
    let data = object.get("data").and_then(Value::as_object).cloned()?;

    match kind {
        "SimpleComponent" => Some(PlannedComponent {
            kind: ComponentKind::SimpleComponent,
            data,
        }),
        "TableA" => {
            data.get("columns")?.as_array()?;
            if let Some(rows) = data.get("rows") {
                if rows.as_array()?.len() > cfg.max_table_rows {
                    return None;
                }
            }
            Some(PlannedComponent {
                kind: ComponentKind::TableA,
                data,
            })
        }
        "ChartComponent" => {
            let chart_type = data.get("chart_type").and_then(Value::as_str)?;
            if !CHART_TYPES.contains(&chart_type) {
                return None;
            }
            data.get("title")?.as_str()?;
            data.get("x_axis")?.as_array()?;
            if let Some(series) = data.get("series") {
                for entry in series.as_array()? {
                    let values = entry.get("values")?.as_array()?;
                    if values.len() > cfg.max_chart_points {
                        return None;
                    }
                }
            }
            Some(PlannedComponent {
                kind: ComponentKind::ChartComponent,
                data,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_minimal_simple_component() {
        let cfg = Config::default();
        let items = vec![json!({"type": "SimpleComponent", "data": {"title": "Revenue"}})];
        let plan = validate_plan(items, &cfg);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].kind, ComponentKind::SimpleComponent);
    }

    #[test]
    fn rejects_table_missing_columns() {
        let cfg = Config::default();
        let items = vec![json!({"type": "TableA", "data": {"rows": []}})];
        assert!(validate_plan(items, &cfg).is_empty());
    }

    #[test]
    fn drops_table_whose_rows_exceed_the_configured_cap() {
        let mut cfg = Config::default();
        cfg.max_table_rows = 2;
        let items = vec![json!({
            "type": "TableA",
            "data": {"columns": ["A"], "rows": [["1"], ["2"], ["3"], ["4"]]}
        })];
        assert!(validate_plan(items, &cfg).is_empty());
    }

    #[test]
    fn keeps_table_whose_rows_are_within_the_configured_cap() {
        let mut cfg = Config::default();
        cfg.max_table_rows = 2;
        let items = vec![json!({
            "type": "TableA",
            "data": {"columns": ["A"], "rows": [["1"], ["2"]]}
        })];
        let plan = validate_plan(items, &cfg);
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn rejects_unknown_chart_type() {
        let cfg = Config::default();
        let items = vec![json!({
            "type": "ChartComponent",
            "data": {"chart_type": "polar", "title": "X", "x_axis": []}
        })];
        assert!(validate_plan(items, &cfg).is_empty());
    }

    #[test]
    fn rejects_chart_missing_title() {
        let cfg = Config::default();
        let items = vec![json!({
            "type": "ChartComponent",
            "data": {"chart_type": "line", "x_axis": ["a"]}
        })];
        assert!(validate_plan(items, &cfg).is_empty());
    }

    #[test]
    fn drops_chart_whose_series_values_exceed_the_configured_cap() {
        let mut cfg = Config::default();
        cfg.max_chart_points = 2;
        let items = vec![json!({
            "type": "ChartComponent",
            "data": {
                "chart_type": "line",
                "title": "X",
                "x_axis": ["a", "b", "c"],
                "series": [{"label": "s1", "values": [1, 2, 3]}]
            }
        })];
        assert!(validate_plan(items, &cfg).is_empty());
    }

    #[test]
    fn keeps_chart_whose_series_values_are_within_the_configured_cap() {
        let mut cfg = Config::default();
        cfg.max_chart_points = 2;
        let items = vec![json!({
            "type": "ChartComponent",
            "data": {
                "chart_type": "line",
                "title": "X",
                "x_axis": ["a", "b"],
                "series": [{"label": "s1", "values": [1, 2]}]
            }
        })];
        let plan = validate_plan(items, &cfg);
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn drops_items_with_unknown_kind_but_keeps_the_rest() {
        let cfg = Config::default();
        let items = vec![
            json!({"type": "Mystery", "data": {}}),
            json!({"type": "SimpleComponent", "data": {}}),
        ];
        let plan = validate_plan(items, &cfg);
        assert_eq!(plan.len(), 1);
    }
}
