use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::particles::ParticleCount;
use crate::components::particle_background::ParticleBackground;
use crate::config;
use crate::quiz::catalog::{self, QuizAnswers, QUESTION_COUNT};
use crate::quiz::scheduler::TimeoutScheduler;
use crate::quiz::session::QuizSession;
use crate::storage::LocalStorage;
use crate::Route;

type BrowserSession = QuizSession<LocalStorage, TimeoutScheduler>;

#[function_component(Quiz)]
pub fn quiz() -> Html {
    let navigator = use_navigator();
    let rerender = use_force_update();

    // One session per mount; stale answers in storage are not loaded back.
    let session = use_memo(
        move |_| {
            let on_change = Callback::from(move |_: ()| rerender.force_update());
            let on_finish = Callback::from(move |answers: QuizAnswers| {
                info!("Redirecting to thank-you page with {:?}", answers);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::ThankYou);
                }
            });
            BrowserSession::new(LocalStorage, TimeoutScheduler::default(), on_change, on_finish)
        },
        (),
    );

    {
        let session = session.clone();
        use_effect_with_deps(move |_| move || session.teardown(), ());
    }

    let view = session.view();
    let Some(question) = catalog::question(view.current) else {
        return html! {};
    };

    let go_back = {
        let session = session.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            session.go_back();
        })
    };

    let progress = f64::from(view.current) / f64::from(QUESTION_COUNT) * 100.0;

    html! {
        <div class="funnel-page quiz-page">
            <ParticleBackground count={ParticleCount::Fixed(60)} />
            <div class="glow glow-left"></div>
            <div class="glow glow-right"></div>

            <header class="funnel-header spread">
                <Link<Route> to={Route::Landing} classes="ghost-button">
                    {"← Voltar"}
                </Link<Route>>
                <div class="logo-frame small">
                    <img src={config::LOGO_URL} alt="Smart Ilha Logo" class="logo" />
                </div>
            </header>

            <main class="funnel-main quiz-main">
                <div class="quiz-progress">
                    <span class="badge">{format!("Pergunta {} de {}", view.current, QUESTION_COUNT)}</span>
                    <div class="progress-track">
                        <div class="progress-bar" style={format!("width: {}%;", progress)}></div>
                    </div>
                </div>

                <div class={classes!("question-card", "fade-in-up", view.visible.then(|| "visible"))}>
                    <h2 class="question-prompt">{question.prompt}</h2>
                    <div class="options">
                        { for question.options.iter().map(|option| {
                            let option = *option;
                            let selected = view.selected == Some(option);
                            let onclick = {
                                let session = session.clone();
                                Callback::from(move |_: MouseEvent| session.answer(option))
                            };
                            html! {
                                <button
                                    key={option.code()}
                                    class={classes!("option-button", selected.then(|| "selected"))}
                                    disabled={view.transitioning}
                                    {onclick}
                                >
                                    <span class={classes!("option-radio", selected.then(|| "checked"))}></span>
                                    <span>{option.label()}</span>
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class="quiz-nav">
                    <button
                        class="outline-button"
                        onclick={go_back}
                        disabled={view.current == 1 || view.transitioning}
                    >
                        {"← Anterior"}
                    </button>
                </div>
            </main>
        </div>
    }
}
