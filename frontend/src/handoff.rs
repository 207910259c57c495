//! Turns the stored quiz answers into the WhatsApp message and deep link the
//! thank-you page opens.

use log::{info, warn};
use web_sys::window;

use crate::config;
use crate::quiz::catalog::{ContactReason, Purchase, QuizAnswers, Region, WatchModel};

pub const DEFAULT_MESSAGE: &str =
    "Olá, vim através do Instagram e gostaria de mais informações sobre smartwatches!";

/// The four answers the sales team asks about. Only built when every one of
/// them is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Briefing {
    pub purchase: Purchase,
    pub region: Region,
    pub model: WatchModel,
    pub reason: ContactReason,
}

impl Briefing {
    pub fn from_answers(answers: &QuizAnswers) -> Option<Self> {
        Some(Self {
            purchase: answers.question2?,
            region: answers.question4?,
            model: answers.question5?,
            reason: answers.question6?,
        })
    }

    fn message(&self) -> String {
        format!(
            "{}\n\n📋 *Informações do atendimento:*\n🎁 Tipo: {}\n📍 Região: {}\n⌚ Modelo: {}\n❓ Motivo: {}\n\nAguardo retorno! 😊",
            DEFAULT_MESSAGE,
            self.purchase.label(),
            self.region.label(),
            self.model.label(),
            self.reason.label(),
        )
    }
}

pub fn compose_message(answers: &QuizAnswers) -> String {
    match Briefing::from_answers(answers) {
        Some(briefing) => briefing.message(),
        None => DEFAULT_MESSAGE.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    pub icon: &'static str,
    pub text: &'static str,
}

/// Lines for the "Suas informações" card. Unlike the message this shows
/// whatever subset was answered.
pub fn summary_lines(answers: &QuizAnswers) -> Vec<SummaryLine> {
    let mut lines = Vec::new();
    if let Some(purchase) = answers.question2 {
        lines.push(SummaryLine { icon: "🎁", text: purchase.label() });
    }
    if let Some(region) = answers.question4 {
        lines.push(SummaryLine { icon: "📍", text: region.label() });
    }
    if let Some(model) = answers.question5 {
        lines.push(SummaryLine { icon: "⌚", text: model.label() });
    }
    if let Some(reason) = answers.question6 {
        lines.push(SummaryLine { icon: "❓", text: reason.label() });
    }
    lines
}

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        config::WHATSAPP_BASE_URL,
        phone,
        urlencoding::encode(message)
    )
}

/// Opens the chat in a new tab. A blocked popup is only logged.
pub fn open_whatsapp(answers: &QuizAnswers) {
    let message = compose_message(answers);
    info!("WhatsApp message: {}", message);
    let url = whatsapp_link(config::WHATSAPP_NUMBER, &message);

    let opened = window().map(|w| w.open_with_url_and_target(&url, "_blank"));
    match opened {
        Some(Ok(Some(_))) => {}
        Some(Ok(None)) => warn!("WhatsApp window was blocked"),
        Some(Err(e)) => gloo_console::error!(format!("Failed to open WhatsApp: {:?}", e)),
        None => warn!("No window to open WhatsApp from"),
    }
}
