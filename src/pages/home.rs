//! Home page: the analysis orchestrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns `AnalysisState` as the single source of truth and drives the upload
//! surface and results view purely through derived props. Failures from the
//! prediction call are absorbed here — children only ever see the derived
//! loading/result state, plus one toast per submission outcome.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::image_upload::ImageUpload;
use crate::components::results_display::ResultsDisplay;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Prediction;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::analysis::finding_from_prediction;
use crate::state::analysis::{AnalysisState, SelectedImage};
use crate::state::toast::ToastState;
use crate::util::preview;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const ANALYSIS_SUCCESS_MESSAGE: &str = "Analysis complete! Check the results below.";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const ANALYSIS_FAILURE_MESSAGE: &str =
    "Analysis failed. Please check the image and try again.";

/// Single-page view: hero, upload surface, results, and intro cards.
#[component]
pub fn HomePage() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_image_select = Callback::new(move |file: web_sys::File| {
        // Safe default for overlapping submissions: refuse while a request
        // is outstanding. Controls are disabled during loading as well, so
        // this guard also covers programmatic invocation.
        if !analysis.get_untracked().can_submit() {
            return;
        }
        let image = SelectedImage {
            file_name: file.name(),
            mime_type: file.type_(),
            preview_url: preview::create_preview_url(&file),
        };
        let mut stale = None;
        analysis.update(|state| stale = state.begin_analysis(image));
        if let Some(url) = stale {
            preview::revoke_preview_url(&url);
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::predict(&file).await;
            if let Err(reason) = &outcome {
                log::warn!("analysis failed: {reason}");
            }
            analysis.update(|state| {
                toasts.update(|tray| apply_prediction_outcome(state, tray, outcome));
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (file, toasts);
    });

    let on_image_remove = Callback::new(move |()| {
        let mut stale = None;
        analysis.update(|state| stale = state.remove_image());
        if let Some(url) = stale {
            preview::revoke_preview_url(&url);
        }
    });

    let selected = Signal::derive(move || analysis.get().selected);
    let loading = Signal::derive(move || analysis.get().loading);
    let results = Signal::derive(move || analysis.get().result);
    let show_results = move || {
        let state = analysis.get();
        state.loading || state.result.is_some()
    };
    let show_intro = move || {
        let state = analysis.get();
        state.selected.is_none() && state.result.is_none()
    };

    view! {
        <div class="home-page">
            <header class="hero">
                <h1 class="hero__title">"Potato Disease Detector"</h1>
                <p class="hero__tagline">
                    "Upload an image of a potato leaf and our AI-powered system will instantly \
                     analyze it for diseases, helping you make informed decisions for your crops."
                </p>
                <div class="hero__badges">
                    <span class="badge badge--secondary">"AI-Powered Analysis"</span>
                    <span class="badge badge--secondary">"Instant Results"</span>
                    <span class="badge badge--secondary">"Expert Accuracy"</span>
                </div>
            </header>

            <main class="home-page__content">
                <section class="home-page__upload">
                    <h2 class="home-page__heading">"Start Your Analysis"</h2>
                    <p class="home-page__blurb">
                        "Simply upload a clear image of a potato leaf, and our advanced machine \
                         learning model will identify potential diseases and provide detailed \
                         information."
                    </p>
                    <ImageUpload
                        selected=selected
                        loading=loading
                        on_select=on_image_select
                        on_remove=on_image_remove
                    />
                </section>

                <Show when=show_results>
                    <section class="home-page__results">
                        <h2 class="home-page__heading">"Analysis Results"</h2>
                        <ResultsDisplay results=results loading=loading/>
                    </section>
                </Show>

                <Show when=show_intro>
                    <section class="home-page__intro">
                        {info_card(
                            "Upload Image",
                            "Take or upload a clear photo of the potato leaf you want to analyze",
                        )}
                        {info_card(
                            "AI Analysis",
                            "Our trained model processes the image and identifies potential diseases",
                        )}
                        {info_card(
                            "Get Results",
                            "Receive detailed disease information and treatment recommendations",
                        )}
                    </section>
                </Show>
            </main>

            <footer class="home-page__footer">
                <p>
                    "Built with AI technology for agricultural disease detection. Always consult \
                     with agricultural experts for critical decisions."
                </p>
            </footer>
        </div>
    }
}

fn info_card(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="info-card card">
            <h3 class="info-card__title">{title}</h3>
            <p class="info-card__blurb">{blurb}</p>
        </div>
    }
}

/// Apply a completed prediction to the state: map the response into the
/// single-finding result (or clear everything on failure) and record exactly
/// one toast for the outcome.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn apply_prediction_outcome(
    analysis: &mut AnalysisState,
    toasts: &mut ToastState,
    outcome: Result<Prediction, String>,
) {
    match outcome {
        Ok(prediction) => {
            analysis.finish_success(vec![finding_from_prediction(&prediction)]);
            toasts.success(ANALYSIS_SUCCESS_MESSAGE);
        }
        Err(_) => {
            analysis.finish_failure();
            toasts.error(ANALYSIS_FAILURE_MESSAGE);
        }
    }
}
