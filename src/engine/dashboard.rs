use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::error::DashboardError;
use crate::domain::history::ChartPoint;

const DATA_PLACEHOLDER: &str = "{{ DATA }}";

/// Static page template. The serialized chart-point array is substituted
/// for the placeholder; the chart script itself is a CDN reference resolved
/// by the viewing browser.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Quality Dashboard</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        body { font-family: sans-serif; padding: 20px; background: #f4f4f9; }
        .container { max-width: 800px; margin: auto; background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        h1 { color: #333; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Quality Trend (Code Coverage)</h1>
        <canvas id="coverageChart"></canvas>
    </div>
    <script>
        const data = {{ DATA }};
        const labels = data.map(d => d.date);
        const percentages = data.map(d => d.percentage);

        const ctx = document.getElementById('coverageChart').getContext('2d');
        new Chart(ctx, {
            type: 'line',
            data: {
                labels: labels,
                datasets: [{
                    label: 'Code Coverage %',
                    data: percentages,
                    borderColor: 'rgb(75, 192, 192)',
                    tension: 0.1,
                    fill: false
                }]
            },
            options: {
                scales: {
                    y: { beginAtZero: true, max: 100 }
                }
            }
        });
    </script>
</body>
</html>
"#;

/// Result of a lenient history load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedHistory {
    pub entries: Vec<Value>,
    /// True when the file was missing, unreadable, or not a JSON array.
    pub degraded: bool,
}

impl LoadedHistory {
    fn degraded() -> Self {
        Self {
            entries: Vec::new(),
            degraded: true,
        }
    }
}

/// Load a coverage history file leniently.
///
/// Every input failure mode degrades to an empty history so the dashboard
/// step never fails the CI run over its input.
pub fn load_history(path: &Path) -> LoadedHistory {
    let Ok(raw) = fs::read_to_string(path) else {
        return LoadedHistory::degraded();
    };
    let Ok(document) = serde_json::from_str::<Value>(&raw) else {
        return LoadedHistory::degraded();
    };
    match document {
        Value::Array(entries) => LoadedHistory {
            entries,
            degraded: false,
        },
        _ => LoadedHistory::degraded(),
    }
}

/// Map raw history entries to chart points, preserving input order.
pub fn chart_points(entries: &[Value]) -> Vec<ChartPoint> {
    entries.iter().map(ChartPoint::from_entry).collect()
}

/// Substitute the serialized point array into the page template.
pub fn render_page(points: &[ChartPoint]) -> Result<String, DashboardError> {
    let data = serde_json::to_string(points)
        .map_err(|source| DashboardError::SerializeData { source })?;
    Ok(PAGE_TEMPLATE.replace(DATA_PLACEHOLDER, &data))
}

/// Write the rendered page to the output path.
pub fn write_page(path: &Path, page: &str) -> Result<(), DashboardError> {
    fs::write(path, page).map_err(|source| DashboardError::WriteOutput {
        path: path.display().to_string(),
        source,
    })
}
