use crate::models::lighthouse::{AnalysisReport, DetailItem, Strategy};
use crate::models::views::{
    classify, AccessibilityAudit, AccessibilityPartition, AuditSummary, CategoryScoreView,
    CoreWebVitals, Diagnostic, KeyMetric, Opportunity, ReportView, ResourceItem, ResourceList,
};
use crate::services::report_service::constants::{
    ACCESSIBILITY_AUDITS, CATEGORIES, DIAGNOSTIC_AUDITS, KEY_METRICS, MAX_PASSED_AUDITS,
    MAX_RESOURCE_ITEMS, NOT_AVAILABLE, OPPORTUNITY_AUDITS,
};
use crate::utils::{bytes_to_kb, format_layout_shift, format_millis, format_seconds, score_to_percent};

/// Always six entries, in fixed order. Missing audits fall back to "N/A" and 0.
pub fn key_metrics(report: &AnalysisReport) -> Vec<KeyMetric> {
    KEY_METRICS
        .iter()
        .map(|def| {
            let audit = report.audit(def.audit_id);
            let value = audit
                .and_then(|a| a.display_value.clone())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            let score = audit.and_then(|a| a.score).unwrap_or(0.0);

            KeyMetric {
                id: def.id,
                title: def.title,
                value,
                score,
                tier: classify(score),
                description: def.description,
            }
        })
        .collect()
}

/// Allow-listed optimization audits that still have room to improve.
pub fn opportunities(report: &AnalysisReport) -> Vec<Opportunity> {
    OPPORTUNITY_AUDITS
        .iter()
        .filter_map(|id| {
            let audit = report.audit(id)?;
            let score = audit.score.filter(|s| *s < 1.0)?;
            Some(Opportunity {
                id: audit.id.clone(),
                title: audit.title.clone(),
                description: audit.description.clone(),
                display_value: audit.display_value.clone(),
                score,
                tier: classify(score),
                resources: resource_list(&audit.detail_items, resource_item),
            })
        })
        .collect()
}

pub fn diagnostics(report: &AnalysisReport) -> Vec<Diagnostic> {
    DIAGNOSTIC_AUDITS
        .iter()
        .filter_map(|id| report.audit(id))
        .map(|audit| Diagnostic {
            id: audit.id.clone(),
            title: audit.title.clone(),
            description: audit.description.clone(),
            display_value: audit.display_value.clone(),
            score: audit.score,
        })
        .collect()
}

/// Splits the allow-listed accessibility audits into manual, passed and
/// failed. Non-manual audits without a score land in no bucket.
pub fn accessibility(report: &AnalysisReport) -> AccessibilityPartition {
    let mut partition = AccessibilityPartition::default();

    for audit in ACCESSIBILITY_AUDITS.iter().filter_map(|id| report.audit(id)) {
        let elements = || {
            (!audit.detail_items.is_empty())
                .then(|| resource_list(&audit.detail_items, element_item))
        };
        let entry = |elements| AccessibilityAudit {
            id: audit.id.clone(),
            title: audit.title.clone(),
            description: audit.description.clone(),
            elements,
        };

        if audit.is_manual() {
            partition.manual.push(entry(elements()));
        } else {
            match audit.score {
                Some(score) if score == 1.0 => partition.passed.push(entry(None)),
                Some(score) if score < 1.0 => partition.failed.push(entry(elements())),
                _ => {}
            }
        }
    }

    partition
}

/// First passing, automatically scored audits in response order.
pub fn passed_audits(report: &AnalysisReport) -> Vec<AuditSummary> {
    report
        .audits
        .iter()
        .filter(|audit| audit.score == Some(1.0) && !audit.is_manual())
        .take(MAX_PASSED_AUDITS)
        .map(|audit| AuditSummary {
            id: audit.id.clone(),
            title: audit.title.clone(),
            description: audit.description.clone(),
        })
        .collect()
}

pub fn category_overview(report: &AnalysisReport) -> Vec<CategoryScoreView> {
    let scores = &report.category_scores;
    CATEGORIES
        .iter()
        .map(|&(id, title)| {
            let score = match id {
                "performance" => scores.performance,
                "accessibility" => scores.accessibility,
                "best-practices" => scores.best_practices,
                _ => scores.seo,
            }
            .unwrap_or(0.0);

            CategoryScoreView {
                id,
                title,
                percent: score_to_percent(score),
                tier: classify(score),
            }
        })
        .collect()
}

pub fn core_web_vitals(report: &AnalysisReport) -> Option<CoreWebVitals> {
    let field = report.field_data?;
    Some(CoreWebVitals {
        largest_contentful_paint: field.largest_contentful_paint_ms.map(format_seconds),
        first_input_delay: field.first_input_delay_ms.map(format_millis),
        cumulative_layout_shift: field.cumulative_layout_shift_score.map(format_layout_shift),
    })
}

pub fn report_view(report: &AnalysisReport, strategy: Strategy) -> ReportView {
    ReportView {
        strategy,
        categories: category_overview(report),
        core_web_vitals: core_web_vitals(report),
        key_metrics: key_metrics(report),
        opportunities: opportunities(report),
        diagnostics: diagnostics(report),
        accessibility: accessibility(report),
        passed_audits: passed_audits(report),
    }
}

fn resource_list(items: &[DetailItem], to_item: fn(&DetailItem) -> ResourceItem) -> ResourceList {
    ResourceList {
        items: items.iter().take(MAX_RESOURCE_ITEMS).map(to_item).collect(),
        remaining: items.len().saturating_sub(MAX_RESOURCE_ITEMS),
    }
}

fn resource_item(item: &DetailItem) -> ResourceItem {
    let label = item
        .url
        .as_deref()
        .or(item.source.as_deref())
        .or(item.node_snippet.as_deref())
        .unwrap_or("Resource");

    ResourceItem {
        label: label.to_string(),
        savings_kb: item.wasted_bytes.filter(|b| *b > 0.0).map(bytes_to_kb),
    }
}

fn element_item(item: &DetailItem) -> ResourceItem {
    let label = item
        .node_snippet
        .as_deref()
        .or(item.source.as_deref())
        .unwrap_or("Element");

    ResourceItem {
        label: label.to_string(),
        savings_kb: None,
    }
}
