use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::particles::ParticleCount;
use crate::components::particle_background::ParticleBackground;
use crate::components::view_counter::{use_simulated_counter, ViewCounter};
use crate::config;
use crate::counter::LANDING_VISITS;
use crate::Route;

const COUPLE_IMAGE_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/Design%20sem%20nome-dHP7fw0CkYHphHy0pxVSqZIwKghEW4.png";
const INSTAGRAM_GUIDE_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/Guia.jpg-ccjdvH2XyEEU98XKBhH1w7maVVcbcX.jpeg";

const PRICE_STEPS: &[&str] = &[
    "Acesse nosso perfil no Instagram @smartilha",
    "Procure pelos Destaques na parte inferior do perfil",
    "Clique no destaque \"PROMOÇÃO\" (primeiro da lista)",
    "Confira todos os valores e modelos disponíveis",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let is_visible = use_state(|| false);
    let visits = use_simulated_counter(&LANDING_VISITS);

    // Scroll to top and fade the content in on mount
    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                is_visible.set(true);
                || ()
            },
            (),
        );
    }

    html! {
        <div class="funnel-page landing-page">
            <ParticleBackground count={ParticleCount::ViewportScaled { px_per_particle: 15.0, max: 80 }} />
            <div class="glow glow-left"></div>
            <div class="glow glow-right"></div>

            <header class="funnel-header centered">
                <div class="logo-frame">
                    <img src={config::LOGO_URL} alt="Smart Ilha Logo" class="logo" />
                </div>
            </header>

            <main class={classes!("funnel-main", "fade-in-up", (*is_visible).then(|| "visible"))}>
                <section class="headline">
                    <span class="badge">{"🚀 Especialistas em Smartwatches"}</span>
                    <p class="lead">
                        {"Descubra os melhores smartwatches com atendimento personalizado e garantia de qualidade"}
                    </p>
                </section>

                <section class="hero-image">
                    <img src={COUPLE_IMAGE_URL} alt="Casal usando smartwatches Smart Ilha" />
                </section>

                <section class="tip-card">
                    <div class="tip-header">
                        <span class="tip-badge">{"⚠️ DICA EXTREMAMENTE IMPORTANTE"}</span>
                        <h2>{"Antes de Prosseguir..."}</h2>
                        <p>{"Para um atendimento mais eficiente, confira os valores dos smartwatch no Instagram primeiro!"}</p>
                    </div>
                    <div class="tip-body">
                        <div class="tip-image">
                            <img src={INSTAGRAM_GUIDE_URL} loading="lazy"
                                alt="Guia do perfil Instagram Smart Ilha mostrando onde encontrar os preços" />
                        </div>
                        <div class="tip-steps">
                            <h3>{"👁 Como encontrar os preços:"}</h3>
                            { for PRICE_STEPS.iter().enumerate().map(|(i, step)| html! {
                                <div class="tip-step">
                                    <span class="step-number">{i + 1}</span>
                                    <p>{*step}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="tip-footer">
                        {"✅ Depois de conferir os preços, volte aqui e prossiga com o atendimento personalizado!"}
                    </div>
                </section>

                <section class="cta-card">
                    <h2>
                        {"Pronto para encontrar seu "}
                        <span class="accent">{"Smartwatch Ideal?"}</span>
                    </h2>
                    <p>{"Responda algumas perguntas rápidas e receba atendimento personalizado com nossa equipe especializada"}</p>
                    <Link<Route> to={Route::Quiz} classes="cta-button">
                        {"💬 Iniciar Atendimento Personalizado"}
                    </Link<Route>>
                </section>
            </main>

            <ViewCounter reading={visits} label={LANDING_VISITS.label} />
        </div>
    }
}
