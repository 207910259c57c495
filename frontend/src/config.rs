/// Local storage slot holding the JSON answer record.
pub const ANSWERS_STORAGE_KEY: &str = "quizAnswers";

/// Store number the WhatsApp handoff opens a chat with (E.164, no plus sign).
pub const WHATSAPP_NUMBER: &str = "5521980202797";

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

pub const LOGO_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/smart-ilha-logo-oficial-kowxuyFbJTRjqyjAMTgZ7MTJu5uK1R.png";

#[cfg(debug_assertions)]
pub fn show_debug_panel() -> bool {
    true  // Raw answers and the generated message under the thank-you card
}

#[cfg(not(debug_assertions))]
pub fn show_debug_panel() -> bool {
    false
}
