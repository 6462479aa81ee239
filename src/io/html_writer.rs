//! Executive-brief HTML rendering.
//!
//! Shares the dollar and grade formatting rules with the narrative generator
//! so on-screen and exported figures never disagree.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::ctx::Ctx;
use crate::engine::format::{fmt_dollar, thousands};
use crate::io::json_writer;
use crate::schema::v1::{DiagnosticReportV1, Severity};

pub fn score_label(score: u8) -> &'static str {
    if score >= 80 {
        "Strong"
    } else if score >= 60 {
        "Adequate"
    } else if score >= 40 {
        "At Risk"
    } else {
        "Critical"
    }
}

pub fn constraint_label(index: u8) -> &'static str {
    if index > 60 {
        "High Constraint"
    } else if index > 35 {
        "Moderate"
    } else {
        "Low"
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "critical",
        Severity::High => "high",
        Severity::Medium => "medium",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn build_html(report: &DiagnosticReportV1, prepared_on: &str) -> String {
    let results = &report.results;
    let scores = &results.scores;
    let opportunity = &results.opportunity;

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str("<title>Infusion Diagnostic Executive Brief</title>\n");
    html.push_str(
        "<style>\nbody { font-family: 'Helvetica Neue', Arial, sans-serif; color: #1e293b; \
         font-size: 13px; line-height: 1.5; max-width: 800px; margin: 0 auto; padding: 48px; }\n\
         h1 { font-size: 22px; }\n\
         h2 { font-size: 14px; color: #1e3a5f; border-bottom: 1px solid #e2e8f0; \
         padding-bottom: 6px; margin: 28px 0 12px; text-transform: uppercase; }\n\
         .headline { background: #f0f7ff; border-left: 4px solid #0052cc; padding: 14px 18px; }\n\
         .scorecard { display: inline-block; border: 1px solid #e2e8f0; border-radius: 8px; \
         padding: 14px; width: 30%; text-align: center; }\n\
         .score-value { font-size: 32px; font-weight: 700; color: #0052cc; }\n\
         table { width: 100%; border-collapse: collapse; font-size: 12px; }\n\
         th, td { padding: 8px 10px; border: 1px solid #e2e8f0; text-align: left; }\n\
         .bottleneck { border: 1px solid #e2e8f0; border-radius: 6px; padding: 12px 14px; \
         margin-bottom: 10px; }\n\
         .sev-critical { border-left: 4px solid #dc2626; }\n\
         .sev-high { border-left: 4px solid #ea580c; }\n\
         .sev-medium { border-left: 4px solid #ca8a04; }\n\
         .assumptions { background: #fffbeb; border: 1px solid #fde68a; padding: 12px 14px; \
         font-size: 11px; }\n</style>\n</head>\n<body>\n",
    );

    html.push_str("<h1>Operational Diagnostic Summary</h1>\n");
    html.push_str(&format!("<p>Prepared on {prepared_on}</p>\n"));
    if let Some(lead) = &report.lead {
        html.push_str(&format!(
            "<p>Prepared for: {} &middot; {} &middot; {}</p>\n",
            escape(&lead.company),
            escape(&lead.name),
            escape(&lead.role)
        ));
    }

    html.push_str("<h2>Executive Summary</h2>\n");
    html.push_str(&format!(
        "<div class=\"headline\">{}</div>\n<ul>\n",
        escape(&results.executive_summary.headline)
    ));
    for bullet in &results.executive_summary.bullets {
        html.push_str(&format!("<li>{}</li>\n", escape(bullet)));
    }
    html.push_str("</ul>\n");

    html.push_str("<h2>Performance Scorecards</h2>\n");
    for (label, value, grade) in [
        (
            "Capacity Efficiency",
            scores.capacity_score,
            score_label(scores.capacity_score),
        ),
        (
            "Unit Economics",
            scores.unit_economics_score,
            score_label(scores.unit_economics_score),
        ),
        (
            "Growth Constraint Index",
            scores.growth_constraint_index,
            constraint_label(scores.growth_constraint_index),
        ),
    ] {
        html.push_str(&format!(
            "<div class=\"scorecard\"><div>{label}</div>\
             <div class=\"score-value\">{value}</div><div>{grade}</div></div>\n"
        ));
    }

    html.push_str("<h2>Annual Opportunity Model</h2>\n");
    html.push_str(&format!(
        "<p>Base case annual revenue opportunity: <strong>{}</strong></p>\n",
        fmt_dollar(opportunity.annual_revenue_opportunity.base as f64)
    ));
    html.push_str(
        "<table>\n<tr><th></th><th>Conservative</th><th>Base</th><th>Aggressive</th></tr>\n",
    );
    html.push_str(&format!(
        "<tr><td>Recoverable infusions</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        thousands(opportunity.recoverable_infusions.conservative),
        thousands(opportunity.recoverable_infusions.base),
        thousands(opportunity.recoverable_infusions.aggressive)
    ));
    html.push_str(&format!(
        "<tr><td>Total opportunity infusions</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        thousands(opportunity.total_opportunity_infusions.conservative),
        thousands(opportunity.total_opportunity_infusions.base),
        thousands(opportunity.total_opportunity_infusions.aggressive)
    ));
    html.push_str(&format!(
        "<tr><td>Revenue opportunity</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        fmt_dollar(opportunity.annual_revenue_opportunity.conservative as f64),
        fmt_dollar(opportunity.annual_revenue_opportunity.base as f64),
        fmt_dollar(opportunity.annual_revenue_opportunity.aggressive as f64)
    ));
    html.push_str(&format!(
        "<tr><td>Margin opportunity</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        fmt_dollar(opportunity.annual_margin_opportunity.conservative as f64),
        fmt_dollar(opportunity.annual_margin_opportunity.base as f64),
        fmt_dollar(opportunity.annual_margin_opportunity.aggressive as f64)
    ));
    html.push_str("</table>\n");

    html.push_str("<h2>Bottlenecks</h2>\n");
    if results.bottlenecks.is_empty() {
        html.push_str("<p>No benchmark-level bottlenecks detected.</p>\n");
    }
    for item in &results.bottlenecks {
        let class = severity_class(item.severity);
        html.push_str(&format!(
            "<div class=\"bottleneck sev-{class}\"><strong>{}</strong> ({class})<br>{}<br>\
             <em>{}</em></div>\n",
            escape(&item.title),
            escape(&item.description),
            escape(&item.metric)
        ));
    }

    html.push_str("<h2>Next Steps</h2>\n<ol>\n");
    for step in &results.next_steps {
        html.push_str(&format!("<li>{}</li>\n", escape(step)));
    }
    html.push_str("</ol>\n");

    html.push_str("<h2>Benchmark Assumptions</h2>\n<div class=\"assumptions\">\n<ul>\n");
    for (key, label) in &results.benchmarks_used {
        html.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>\n",
            escape(key),
            escape(label)
        ));
    }
    html.push_str("</ul>\n</div>\n</body>\n</html>\n");
    html
}

pub fn write_html(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = json_writer::build_report(ctx)?;
    let prepared_on = Utc::now().format("%B %-d, %Y").to_string();
    let html = build_html(&report, &prepared_on);
    std::fs::write(path, html).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(())
}
