use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::particles::ParticleCount;
use crate::components::particle_background::ParticleBackground;
use crate::components::view_counter::{use_simulated_counter, ViewCounter};
use crate::config;
use crate::counter::{CounterReading, THANK_YOU_VIEWS};
use crate::handoff::{self, summary_lines};
use crate::quiz::catalog::{QuizAnswers, QUESTION_COUNT};
use crate::storage::{self, LocalStorage};
use crate::Route;

const HIGHLIGHTS: &[&str] = &["Produtos Originais", "90 Dias de Garantia", "Suporte Vitalício"];

fn render_summary(answers: &QuizAnswers) -> Html {
    let lines = summary_lines(answers);
    if lines.is_empty() {
        return html! {};
    }
    html! {
        <div class="summary-card">
            <h3>{"📋 Suas informações:"}</h3>
            { for lines.into_iter().map(|line| html! {
                <div class="summary-line">
                    <span class="summary-icon">{line.icon}</span>
                    <span>{line.text}</span>
                </div>
            }) }
        </div>
    }
}

fn render_debug_panel(answers: &QuizAnswers, views: &CounterReading) -> Html {
    html! {
        <div class="debug-panel">
            <p><strong>{"Debug - Respostas do Quiz:"}</strong></p>
            { for (1..=QUESTION_COUNT).map(|n| html! {
                <p>{format!("Pergunta {}: {}", n, answers.get(n).map(|a| a.code()).unwrap_or(""))}</p>
            }) }
            <div class="debug-message">
                <strong>{"Mensagem WhatsApp:"}</strong>
                <pre>{handoff::compose_message(answers)}</pre>
            </div>
            <p>{format!("Visualizações hoje: {} | Data: {}", views.count, views.date)}</p>
        </div>
    }
}

/// Only a stored record is worth inspecting.
fn debug_panel_visible(debug_build: bool, stored: &Option<QuizAnswers>) -> bool {
    debug_build && stored.is_some()
}

#[function_component(ThankYou)]
pub fn thank_you() -> Html {
    // Read once per mount; a missing or broken record just hides the summary.
    let stored = use_state(|| storage::load_answers_or_log(&LocalStorage));
    let is_visible = use_state(|| false);
    let views = use_simulated_counter(&THANK_YOU_VIEWS);

    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                is_visible.set(true);
                || ()
            },
            (),
        );
    }

    let answers = (*stored).clone().unwrap_or_default();

    let open_whatsapp = {
        let answers = answers.clone();
        Callback::from(move |_: MouseEvent| handoff::open_whatsapp(&answers))
    };

    html! {
        <div class="funnel-page thank-you-page">
            <ParticleBackground count={ParticleCount::Fixed(80)} />
            <div class="glow glow-left"></div>
            <div class="glow glow-right"></div>

            <header class="funnel-header centered">
                <div class="logo-frame">
                    <img src={config::LOGO_URL} alt="Smart Ilha Logo" class="logo tall" />
                </div>
            </header>

            <main class={classes!("funnel-main", "fade-in-up", (*is_visible).then(|| "visible"))}>
                <div class="success-icon">{"✓"}</div>

                <section class="thanks-card">
                    <h1>{"Obrigado!"}</h1>
                    <p class="lead">
                        {"Nossa equipe especializada da "}
                        <span class="accent">{"Smart Ilha"}</span>
                        {" está disponível agora para prosseguir com seu atendimento personalizado!"}
                    </p>
                    <p class="hint">{"👇 Clique no botão abaixo para continuar no WhatsApp!"}</p>

                    { (*stored).as_ref().map(render_summary).unwrap_or_default() }

                    {
                        if debug_panel_visible(config::show_debug_panel(), &*stored) {
                            render_debug_panel(&answers, &views)
                        } else {
                            html! {}
                        }
                    }

                    <div class="highlights">
                        { for HIGHLIGHTS.iter().map(|item| html! {
                            <div class="highlight">{format!("✔ {}", item)}</div>
                        }) }
                    </div>
                </section>

                <div class="cta-group">
                    <button class="cta-button pulse" onclick={open_whatsapp}>
                        {"💬 Continuar no WhatsApp"}
                    </button>
                    <Link<Route> to={Route::Landing} classes="outline-button">
                        {"Voltar ao Início"}
                    </Link<Route>>
                </div>
            </main>

            <ViewCounter reading={views.clone()} label={THANK_YOU_VIEWS.label} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::Purchase;

    #[test]
    fn debug_panel_needs_debug_build_and_stored_record() {
        let stored = Some(QuizAnswers {
            question2: Some(Purchase::Pessoal),
            ..QuizAnswers::default()
        });
        assert!(debug_panel_visible(true, &stored));
        assert!(!debug_panel_visible(true, &None));
        assert!(!debug_panel_visible(false, &stored));
        assert!(!debug_panel_visible(false, &None));
    }
}
