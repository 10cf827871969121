// HTML page assembly for the release dashboard
use crate::domain::dashboard::{Dashboard, MeterData, TaskTotals};
use crate::domain::ring::ArcError;
use crate::infrastructure::config::RingConfig;
use crate::infrastructure::svg::render_ring;

const STYLE: &str = "\
body{font-family:sans-serif;margin:0}\
.center{text-align:center}\
.label{font-weight:bold}\
.pad{padding:8px}\
.row{display:flex}\
.space{justify-content:space-around}\
.center-justify{justify-content:center}\
.stat-box{padding:12px}\
.summary{font-size:0.9em}\
.percent{font-size:1.4em;font-weight:bold;text-align:center}\
.tasks{margin:0 12px}\
.small-label{font-size:0.8em;margin-right:4px}";

/// Render the whole dashboard page: release header, one stat box per meter,
/// and the task hour rollup.
pub fn render_page(dashboard: &Dashboard, ring: RingConfig) -> Result<String, ArcError> {
    let mut stat_boxes = String::new();
    for meter in &dashboard.meters {
        stat_boxes.push_str(&render_stat_box(meter, ring)?);
    }

    Ok(format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>{title}</title><style>{STYLE}</style></head><body><div id="main-box"><div class="label center pad">{title}</div><div class="center">{dates}</div><div class="row space">{stat_boxes}</div><div class="row center-justify pad">{tasks}</div></div></body></html>"#,
        title = escape_html(&dashboard.release.name),
        dates = escape_html(&dashboard.release.date_range()),
        tasks = render_task_fields(&dashboard.tasks),
    ))
}

fn render_stat_box(meter: &MeterData, ring: RingConfig) -> Result<String, ArcError> {
    let svg = render_ring(ring.size, ring.offset, meter.part, meter.total)?;

    Ok(format!(
        r#"<div class="stat-box center"><div class="center label">{label}</div><div class="center">{svg}</div><div class="center summary">{part}/{total} Finished</div><div class="percent">{percent}%</div></div>"#,
        label = escape_html(&meter.label),
        part = meter.part,
        total = meter.total,
        percent = meter.percent,
    ))
}

fn render_task_fields(tasks: &TaskTotals) -> String {
    [
        ("Task Actuals:", tasks.actuals),
        ("Task Estimates:", tasks.estimates),
        ("Task Todo:", tasks.todo),
    ]
    .map(|(label, value)| {
        format!(
            r#"<div class="row center tasks"><label class="small-label">{label}</label><div class="value">{value}</div></div>"#
        )
    })
    .join("")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
