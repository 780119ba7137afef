//! Results presenter: loading view, primary finding, and ranked list.
//!
//! DESIGN
//! ======
//! A pure function of `(results, loading)` with three mutually exclusive
//! modes, checked in priority order: loading wins over any stale result, an
//! empty result renders nothing, and anything else renders findings. The
//! severity-to-presentation mapping is a fixed table over a closed enum.

#[cfg(test)]
#[path = "results_display_test.rs"]
mod results_display_test;

use leptos::prelude::*;

use crate::state::analysis::{AnalysisResult, DiseaseFinding, Severity};

const ADVISORY_NOTE: &str = "This AI analysis is for guidance only. For critical decisions, \
     please consult with agricultural experts or plant pathologists.";

/// Renders the analysis outcome for the home page.
#[component]
pub fn ResultsDisplay(
    #[prop(into)] results: Signal<Option<AnalysisResult>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        {move || {
            let has_findings = results.with(|r| r.as_ref().is_some_and(|findings| !findings.is_empty()));
            match results_view(loading.get(), has_findings) {
                ResultsView::Analyzing => analyzing_view().into_any(),
                ResultsView::Hidden => ().into_any(),
                ResultsView::Findings => findings_view(results.get().unwrap_or_default()),
            }
        }}
    }
}

/// Which of the three render modes applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResultsView {
    /// A request is in flight; stale results are never shown.
    Analyzing,
    /// Nothing to render.
    Hidden,
    /// At least one finding to present.
    Findings,
}

fn results_view(loading: bool, has_findings: bool) -> ResultsView {
    if loading {
        ResultsView::Analyzing
    } else if has_findings {
        ResultsView::Findings
    } else {
        ResultsView::Hidden
    }
}

fn analyzing_view() -> impl IntoView {
    view! {
        <div class="results results--analyzing card">
            <h3 class="results__analyzing-title">"Analyzing Image..."</h3>
            <p class="results__analyzing-hint">
                "The model is examining your potato leaf for signs of disease"
            </p>
            <div class="progress progress--indeterminate">
                <div class="progress__bar"></div>
            </div>
        </div>
    }
}

fn findings_view(findings: AnalysisResult) -> AnyView {
    let Some(primary) = findings.first().cloned() else {
        return ().into_any();
    };
    let rest: Vec<DiseaseFinding> = findings.into_iter().skip(1).collect();
    let others = (!rest.is_empty()).then(|| {
        view! {
            <section class="results__others">
                <h4 class="results__others-title">"Other Possible Diseases"</h4>
                <div class="results__others-list">
                    {rest.into_iter().map(secondary_row).collect_view()}
                </div>
            </section>
        }
    });

    view! {
        <div class="results">
            <section class="results__primary card">
                <div class="results__primary-head">
                    <span
                        class=format!("results__icon {}", severity_icon_class(primary.severity))
                        aria-hidden="true"
                    >
                        {severity_icon(primary.severity)}
                    </span>
                    <h3 class="results__name">{primary.name.clone()}</h3>
                </div>
                <div class="results__meta">
                    <span class=format!("badge {}", severity_badge_class(primary.severity))>
                        {severity_risk_label(primary.severity)}
                    </span>
                    <span class="results__confidence">{format_confidence(primary.confidence)}</span>
                    <span class="results__confidence-label">"confidence"</span>
                </div>
                <div class="progress progress--primary">
                    <div class="progress__bar" style:width=format!("{}%", primary.confidence)></div>
                </div>
                <div class="results__section">
                    <h4>"Description"</h4>
                    <p>{primary.description.clone()}</p>
                </div>
                {primary.treatment.clone().map(|treatment| {
                    view! {
                        <div class="results__section">
                            <h4>"Recommended Treatment"</h4>
                            <p>{treatment}</p>
                        </div>
                    }
                })}
            </section>
            {others}
            <section class="results__note card">
                <h4>"Important Note"</h4>
                <p>{ADVISORY_NOTE}</p>
            </section>
        </div>
    }
    .into_any()
}

fn secondary_row(finding: DiseaseFinding) -> impl IntoView {
    view! {
        <div class="results__row card">
            <span
                class=format!("results__icon {}", severity_icon_class(finding.severity))
                aria-hidden="true"
            >
                {severity_icon(finding.severity)}
            </span>
            <span class="results__row-name">{finding.name}</span>
            <div class="progress progress--compact">
                <div class="progress__bar" style:width=format!("{}%", finding.confidence)></div>
            </div>
            <span class="results__row-confidence">{format_confidence(finding.confidence)}</span>
        </div>
    }
}

// Fixed severity presentation tables: high is a warning with a destructive
// badge, medium is informational, low reads as a healthy confirmation.

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "⚠",
        Severity::Medium => "ℹ",
        Severity::Low => "✓",
    }
}

fn severity_icon_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "results__icon--warning",
        Severity::Medium => "results__icon--info",
        Severity::Low => "results__icon--success",
    }
}

fn severity_badge_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "badge--destructive",
        Severity::Medium => "badge--secondary",
        Severity::Low => "badge--default",
    }
}

fn severity_risk_label(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "HIGH RISK",
        Severity::Medium => "MEDIUM RISK",
        Severity::Low => "LOW RISK",
    }
}

/// Whole-number percentage for display; the stored confidence is unchanged.
fn format_confidence(confidence: f64) -> String {
    format!("{}%", confidence.round())
}
