//! Fixed system prompt construction (spec §4.7 step 2).

use crate::config::Config;
use crate::protocol::DELIMITER;

pub fn build_prompt(message: &str, cfg: &Config) -> String {
    format!(
        "You are a UI planning assistant for a streaming chat endpoint.\n\
         Plan at most {max} UI components to answer the user's request.\n\
         Each component is one of three kinds:\n\
         - SimpleComponent: data may include title, description, value, date, units, timestamp.\n\
         - TableA: data MUST include columns (array of strings); may include rows (array of row arrays), total_rows, timestamp.\n\
         - ChartComponent: data MUST include chart_type (one of line, bar, area, pie, scatter), title, x_axis (array of strings); may include series (array of {{label, values}}), total_points, timestamp.\n\
         Respond with a JSON array of objects shaped like {{\"type\": <kind>, \"data\": {{...}}}}, \
         wrapped in the literal delimiter `{delim}` immediately before the array and `{delim}` immediately after it, \
         with no other `{delim}` occurrences in your response.\n\n\
         User message: {message}",
        max = cfg.llm_max_components_per_plan,
        delim = DELIMITER,
    )
}
