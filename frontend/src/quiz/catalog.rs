//! The six fixed quiz questions, their option codes and the answer record
//! that is written to local storage.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub const QUESTION_COUNT: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Referral {
    Indicacao,
    Anuncio,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purchase {
    Presente,
    Pessoal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstContact {
    Sim,
    Nao,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Ilha,
    Outra,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchModel {
    Feminino,
    Masculino,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactReason {
    Preco,
    Duvida,
    Pedido,
    Outro,
}

impl Referral {
    pub fn label(self) -> &'static str {
        match self {
            Referral::Indicacao => "Por indicação",
            Referral::Anuncio => "Por anúncio",
        }
    }
}

impl Purchase {
    pub fn label(self) -> &'static str {
        match self {
            Purchase::Presente => "É um presente",
            Purchase::Pessoal => "Compra pessoal",
        }
    }
}

impl FirstContact {
    pub fn label(self) -> &'static str {
        match self {
            FirstContact::Sim => "Sim, é meu primeiro contato",
            FirstContact::Nao => "Não, já conhecia a loja",
        }
    }
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::Ilha => "Ilha do Governador",
            Region::Outra => "Outra região",
        }
    }
}

impl WatchModel {
    pub fn label(self) -> &'static str {
        match self {
            WatchModel::Feminino => "Modelo feminino",
            WatchModel::Masculino => "Modelo masculino",
        }
    }
}

impl ContactReason {
    pub fn label(self) -> &'static str {
        match self {
            ContactReason::Preco => "Preço de Smartwatch",
            ContactReason::Duvida => "Dúvida Técnica",
            ContactReason::Pedido => "Fazer meu Pedido",
            ContactReason::Outro => "Outro Produto",
        }
    }
}

/// One selectable option, tagged with the question it answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Referral(Referral),
    Purchase(Purchase),
    FirstContact(FirstContact),
    Region(Region),
    Model(WatchModel),
    Reason(ContactReason),
}

impl Answer {
    /// 1-based number of the question this option belongs to.
    pub fn question(self) -> u8 {
        match self {
            Answer::Referral(_) => 1,
            Answer::Purchase(_) => 2,
            Answer::FirstContact(_) => 3,
            Answer::Region(_) => 4,
            Answer::Model(_) => 5,
            Answer::Reason(_) => 6,
        }
    }

    /// Code stored in local storage, e.g. `presente`.
    pub fn code(self) -> &'static str {
        match self {
            Answer::Referral(Referral::Indicacao) => "indicacao",
            Answer::Referral(Referral::Anuncio) => "anuncio",
            Answer::Purchase(Purchase::Presente) => "presente",
            Answer::Purchase(Purchase::Pessoal) => "pessoal",
            Answer::FirstContact(FirstContact::Sim) => "sim",
            Answer::FirstContact(FirstContact::Nao) => "nao",
            Answer::Region(Region::Ilha) => "ilha",
            Answer::Region(Region::Outra) => "outra",
            Answer::Model(WatchModel::Feminino) => "feminino",
            Answer::Model(WatchModel::Masculino) => "masculino",
            Answer::Reason(ContactReason::Preco) => "preco",
            Answer::Reason(ContactReason::Duvida) => "duvida",
            Answer::Reason(ContactReason::Pedido) => "pedido",
            Answer::Reason(ContactReason::Outro) => "outro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Answer::Referral(v) => v.label(),
            Answer::Purchase(v) => v.label(),
            Answer::FirstContact(v) => v.label(),
            Answer::Region(v) => v.label(),
            Answer::Model(v) => v.label(),
            Answer::Reason(v) => v.label(),
        }
    }
}

pub struct Question {
    pub number: u8,
    pub prompt: &'static str,
    pub options: &'static [Answer],
}

pub static QUESTIONS: [Question; QUESTION_COUNT as usize] = [
    Question {
        number: 1,
        prompt: "Você conheceu a Smart Ilha por indicação ou anúncio?",
        options: &[
            Answer::Referral(Referral::Indicacao),
            Answer::Referral(Referral::Anuncio),
        ],
    },
    Question {
        number: 2,
        prompt: "Está em busca de um presente ou é uma compra pessoal?",
        options: &[
            Answer::Purchase(Purchase::Presente),
            Answer::Purchase(Purchase::Pessoal),
        ],
    },
    Question {
        number: 3,
        prompt: "Esse é seu primeiro contato com a Smart Ilha?",
        options: &[
            Answer::FirstContact(FirstContact::Sim),
            Answer::FirstContact(FirstContact::Nao),
        ],
    },
    Question {
        number: 4,
        prompt: "Para qual região seria a entrega do pedido?",
        options: &[Answer::Region(Region::Ilha), Answer::Region(Region::Outra)],
    },
    Question {
        number: 5,
        prompt: "Qual modelo de smartwatch você busca?",
        options: &[
            Answer::Model(WatchModel::Feminino),
            Answer::Model(WatchModel::Masculino),
        ],
    },
    Question {
        number: 6,
        prompt: "Você está entrando em contato para saber sobre:",
        options: &[
            Answer::Reason(ContactReason::Preco),
            Answer::Reason(ContactReason::Duvida),
            Answer::Reason(ContactReason::Pedido),
            Answer::Reason(ContactReason::Outro),
        ],
    },
];

pub fn question(number: u8) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.number == number)
}

/// Reads one stored option code. A code the quiz no longer offers only
/// clears its own field; the rest of the record is kept.
fn lenient_code<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value.clone()) {
        Ok(code) => Ok(Some(code)),
        Err(_) => {
            warn!("Dropping unknown stored answer {}", value);
            Ok(None)
        }
    }
}

/// Answers collected so far. A field is `Some` iff that question was answered;
/// unanswered fields are left out of the stored JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_code"
    )]
    pub question1: Option<Referral>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_code"
    )]
    pub question2: Option<Purchase>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_code"
    )]
    pub question3: Option<FirstContact>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_code"
    )]
    pub question4: Option<Region>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_code"
    )]
    pub question5: Option<WatchModel>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_code"
    )]
    pub question6: Option<ContactReason>,
}

impl QuizAnswers {
    /// Stores `answer` under its question's key, replacing any earlier value.
    pub fn record(&mut self, answer: Answer) {
        match answer {
            Answer::Referral(v) => self.question1 = Some(v),
            Answer::Purchase(v) => self.question2 = Some(v),
            Answer::FirstContact(v) => self.question3 = Some(v),
            Answer::Region(v) => self.question4 = Some(v),
            Answer::Model(v) => self.question5 = Some(v),
            Answer::Reason(v) => self.question6 = Some(v),
        }
    }

    pub fn get(&self, question: u8) -> Option<Answer> {
        match question {
            1 => self.question1.map(Answer::Referral),
            2 => self.question2.map(Answer::Purchase),
            3 => self.question3.map(Answer::FirstContact),
            4 => self.question4.map(Answer::Region),
            5 => self.question5.map(Answer::Model),
            6 => self.question6.map(Answer::Reason),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        (1..=QUESTION_COUNT).all(|n| self.get(n).is_none())
    }
}
