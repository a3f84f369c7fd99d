//! The fixed fallback plan (spec §4.7 step 8), served whenever the
//! collaborator exhausts its retry budget. Deterministic and stable across
//! calls so structural tests can assert on its shape directly.

use serde_json::json;

use crate::emitters::obj;
use crate::protocol::ComponentKind;

use super::PlannedComponent;

pub fn fallback_plan() -> Vec<PlannedComponent> {
    vec![
        PlannedComponent {
            kind: ComponentKind::SimpleComponent,
            data: obj([
                ("title", json!("Request received")),
                (
                    "description",
                    json!("I couldn't reach the planning service, so here's a placeholder summary."),
                ),
            ]),
        },
        PlannedComponent {
            kind: ComponentKind::TableA,
            data: obj([("columns", json!(["Field", "Value"])), ("rows", json!([]))]),
        },
        PlannedComponent {
            kind: ComponentKind::ChartComponent,
            data: obj([
                ("chart_type", json!("line")),
                ("title", json!("No data available")),
                ("x_axis", json!([])),
                ("series", json!([{"label": "N/A", "values": []}])),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_plan_has_one_of_each_kind_in_order() {
        let plan = fallback_plan();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].kind, ComponentKind::SimpleComponent);
        assert_eq!(plan[1].kind, ComponentKind::TableA);
        assert_eq!(plan[2].kind, ComponentKind::ChartComponent);
    }

    #[test]
    fn fallback_plan_is_deterministic() {
        assert_eq!(fallback_plan(), fallback_plan());
    }
}
