use yew::prelude::*;

/// Stylesheet shared by the three funnel pages.
#[function_component(FunnelStyles)]
pub fn funnel_styles() -> Html {
    html! {
        <style>
            {r#"
                body {
                    margin: 0;
                    background: #000;
                    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #fff;
                }
                .funnel-page {
                    min-height: 100vh;
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(135deg, #111827 0%, #000 50%, #111827 100%);
                }
                .particle-canvas {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                }
                .glow {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    background: rgba(249, 115, 22, 0.05);
                    filter: blur(64px);
                    z-index: 0;
                }
                .glow-left { top: 25%; left: 25%; }
                .glow-right { bottom: 25%; right: 25%; }
                .funnel-header {
                    position: relative;
                    z-index: 10;
                    padding: 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                }
                .funnel-header.centered { justify-content: center; }
                .funnel-header.spread { justify-content: space-between; }
                .logo-frame {
                    background: rgba(31, 41, 55, 0.6);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(75, 85, 99, 0.5);
                    border-radius: 1rem;
                    padding: 1rem;
                }
                .logo-frame.small { padding: 0.75rem; }
                .logo { height: 4rem; width: auto; display: block; }
                .logo-frame.small .logo { height: 2rem; }
                .funnel-main {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 8rem;
                    text-align: center;
                }
                .fade-in-up {
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .fade-in-up.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .landing-page .fade-in-up,
                .thank-you-page .fade-in-up { transition-duration: 1s; }
                .badge {
                    display: inline-block;
                    margin-bottom: 1rem;
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    background: rgba(249, 115, 22, 0.2);
                    color: #fdba74;
                    font-size: 0.875rem;
                }
                .lead {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .accent { color: #fb923c; font-weight: 600; }
                .hero-image img {
                    width: 100%;
                    max-width: 42rem;
                    border-radius: 1.5rem;
                    margin: 2rem auto;
                }
                .tip-card, .cta-card, .thanks-card, .question-card {
                    background: rgba(31, 41, 55, 0.6);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(75, 85, 99, 0.5);
                    border-radius: 1.5rem;
                    padding: 2rem;
                    margin: 0 auto 3rem;
                    max-width: 48rem;
                }
                .tip-card {
                    background: linear-gradient(90deg, rgba(59, 130, 246, 0.15), rgba(99, 102, 241, 0.15), rgba(168, 85, 247, 0.15));
                    border-color: rgba(59, 130, 246, 0.25);
                }
                .tip-badge { color: #93c5fd; font-weight: 700; }
                .tip-body {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    align-items: center;
                    text-align: left;
                }
                @media (min-width: 768px) {
                    .tip-body { grid-template-columns: 1fr 1fr; }
                    .tip-image { order: 2; }
                }
                .tip-image img { width: 100%; border-radius: 0.75rem; }
                .tip-steps h3 { color: #fb923c; }
                .tip-step { display: flex; align-items: flex-start; gap: 0.75rem; }
                .step-number {
                    flex-shrink: 0;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    background: #f97316;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    font-size: 0.875rem;
                }
                .tip-footer {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(34, 197, 94, 0.2);
                    color: #86efac;
                }
                .cta-button {
                    display: inline-block;
                    border: none;
                    cursor: pointer;
                    text-decoration: none;
                    color: #fff;
                    font-weight: 600;
                    font-size: 1.125rem;
                    padding: 1rem 2rem;
                    border-radius: 1rem;
                    background: linear-gradient(90deg, #f97316, #ea580c);
                    box-shadow: 0 20px 40px rgba(249, 115, 22, 0.2);
                    transition: transform 0.3s ease;
                }
                .cta-button:hover { transform: scale(1.05); }
                .cta-button.pulse { animation: pulse 2s infinite; }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.75; }
                }
                .outline-button, .ghost-button {
                    display: inline-block;
                    color: #fff;
                    text-decoration: none;
                    padding: 0.75rem 2rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(75, 85, 99, 0.5);
                    background: rgba(55, 65, 81, 0.5);
                    cursor: pointer;
                }
                .ghost-button { border-color: transparent; background: transparent; padding: 0.5rem 1rem; }
                .outline-button:disabled { opacity: 0.5; cursor: default; }
                .quiz-progress { margin-bottom: 2rem; }
                .progress-track {
                    width: 100%;
                    height: 0.75rem;
                    border-radius: 9999px;
                    background: rgba(55, 65, 81, 0.5);
                }
                .progress-bar {
                    height: 100%;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #f97316, #ea580c);
                    transition: width 0.5s ease;
                }
                .question-prompt { font-size: 1.75rem; font-weight: 300; line-height: 1.5; }
                .options { display: flex; flex-direction: column; gap: 1rem; }
                .option-button {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    width: 100%;
                    padding: 1.5rem;
                    font-size: 1.125rem;
                    text-align: left;
                    color: #fff;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(75, 85, 99, 0.5);
                    background: rgba(55, 65, 81, 0.5);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .option-button:hover:not(:disabled) { border-color: rgba(249, 115, 22, 0.3); }
                .option-button.selected {
                    background: linear-gradient(90deg, #f97316, #ea580c);
                    border-color: transparent;
                }
                .option-radio {
                    flex-shrink: 0;
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    border: 2px solid #9ca3af;
                }
                .option-radio.checked { background: #fff; border-color: #fff; box-shadow: inset 0 0 0 3px #f97316; }
                .quiz-nav { display: flex; max-width: 42rem; margin: 2rem auto 0; }
                .success-icon {
                    width: 7rem;
                    height: 7rem;
                    margin: 0 auto 3rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #fb923c, #ea580c);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3.5rem;
                }
                .thanks-card h1 { font-size: 3rem; font-weight: 700; }
                .hint { color: #fdba74; font-size: 1.125rem; }
                .summary-card, .debug-panel {
                    text-align: left;
                    max-width: 28rem;
                    margin: 0 auto 2rem;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(55, 65, 81, 0.6);
                }
                .summary-card h3 { color: #fb923c; margin-top: 0; }
                .summary-line { display: flex; gap: 0.5rem; margin: 0.75rem 0; }
                .debug-panel { background: rgba(17, 24, 39, 0.5); font-size: 0.875rem; color: #d1d5db; max-width: none; }
                .debug-message pre { white-space: pre-wrap; font-size: 0.75rem; }
                .highlights { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1.5rem; }
                .highlight {
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(55, 65, 81, 0.6);
                    color: #d1d5db;
                }
                .cta-group { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
                .view-counter {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    z-index: 20;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(31, 41, 55, 0.9);
                    border: 1px solid rgba(75, 85, 99, 0.5);
                }
                .view-counter-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #f97316, #ea580c);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .view-counter-value { color: #fb923c; font-weight: 700; font-size: 1.125rem; }
                .view-counter-date { color: #9ca3af; font-size: 0.875rem; }
            "#}
        </style>
    }
}
