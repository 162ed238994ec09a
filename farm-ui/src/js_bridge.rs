//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`. They are evaluated as
//! globals (no ES modules) and exposed via `window.*`. D3 itself is loaded
//! from a CDN script tag on first use.

static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");

const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('farm JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding in a single-quoted JS string.
fn escape(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Inject D3 if missing, then evaluate the chart scripts at global scope.
/// Safe to call more than once.
pub fn init_charts() {
    let all_js = [LINE_CHART_JS, BAR_CHART_JS, PIE_CHART_JS].join("\n");
    let store_js = format!(
        "if (!window.__farmChartsReady) {{ window.__farmChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__farmChartsReady || window.__farmChartsLoading) return;
            window.__farmChartsLoading = true;
            if (typeof d3 === 'undefined' && !document.getElementById('d3-script')) {{
                var s = document.createElement('script');
                s.id = 'd3-script';
                s.src = '{D3_SRC}';
                document.head.appendChild(s);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__farmChartScripts);
                    delete window.__farmChartScripts;
                    if (typeof renderFarmLineChart !== 'undefined') window.renderFarmLineChart = renderFarmLineChart;
                    if (typeof renderFarmBarChart !== 'undefined') window.renderFarmBarChart = renderFarmBarChart;
                    if (typeof renderFarmPieChart !== 'undefined') window.renderFarmPieChart = renderFarmPieChart;
                    window.__farmChartsReady = true;
                    console.log('farm charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Poll until the charts are ready and the container exists, then call
/// `window.<function>(container, data, config)`.
fn render(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let data = escape(data_json);
    let config = escape(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__farmChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{data}', '{config}');
                    }} catch(e) {{ console.error('[farm] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render one or more lines over a shared categorical x axis.
///
/// `data_json` is an array of objects with an `x` key plus one numeric key
/// per series; `config_json` lists the series as `{key, color, label}` and
/// may set `area: true`, `yMin`, `yMax` and `bands`.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render("renderFarmLineChart", container_id, data_json, config_json);
}

/// Render a vertical bar chart of `{name, value}` objects (or grouped keys via config).
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render("renderFarmBarChart", container_id, data_json, config_json);
}

/// Render a pie chart of `{label, value, color}` objects.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render("renderFarmPieChart", container_id, data_json, config_json);
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_quotes_and_newlines() {
        assert_eq!(escape("{\"a\":\"it's\"}\n"), "{\"a\":\"it\\'s\"}");
        assert_eq!(escape(r#"{"a":"x\"y"}"#), r#"{"a":"x\\"y"}"#);
    }
}
