//! Question sequencing and the fade choreography between questions.
//!
//! The machine never touches a timer or storage itself. Every input returns
//! the effects the caller has to carry out, and a pending timer is reported
//! back through [`QuizMachine::on_timer`].

use thiserror::Error;

use super::catalog::{Answer, QuizAnswers, QUESTION_COUNT};

/// Fade-out time before the question index changes.
pub const FADE_OUT_MS: u32 = 400;
/// Pause after the index changed before the card is shown again.
pub const FADE_IN_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FadingOut(Direction),
    FadingIn,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Persist(QuizAnswers),
    StartTimer(u32),
    Finish(QuizAnswers),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("a transition is already running")]
    Transitioning,
    #[error("the quiz is already finished")]
    Finished,
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("option for question {got} offered while question {expected} is shown")]
    WrongQuestion { expected: u8, got: u8 },
}

#[derive(Clone, Debug)]
pub struct QuizMachine {
    current: u8,
    answers: QuizAnswers,
    phase: Phase,
}

impl Default for QuizMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizMachine {
    pub fn new() -> Self {
        Self {
            current: 1,
            answers: QuizAnswers::default(),
            phase: Phase::Idle,
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Input is locked from the first fade-out until the card is back.
    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Idle
    }

    fn ensure_idle(&self) -> Result<(), Rejection> {
        match self.phase {
            Phase::Idle => Ok(()),
            Phase::Finished => Err(Rejection::Finished),
            _ => Err(Rejection::Transitioning),
        }
    }

    pub fn answer(&mut self, answer: Answer) -> Result<Vec<Effect>, Rejection> {
        self.ensure_idle()?;
        if answer.question() != self.current {
            return Err(Rejection::WrongQuestion {
                expected: self.current,
                got: answer.question(),
            });
        }

        self.answers.record(answer);
        self.phase = Phase::FadingOut(Direction::Forward);
        Ok(vec![
            Effect::Persist(self.answers.clone()),
            Effect::StartTimer(FADE_OUT_MS),
        ])
    }

    pub fn go_back(&mut self) -> Result<Vec<Effect>, Rejection> {
        self.ensure_idle()?;
        if self.current <= 1 {
            return Err(Rejection::AtFirstQuestion);
        }

        self.phase = Phase::FadingOut(Direction::Backward);
        Ok(vec![Effect::StartTimer(FADE_OUT_MS)])
    }

    /// Advances the choreography when the pending timer fires.
    pub fn on_timer(&mut self) -> Vec<Effect> {
        match self.phase {
            Phase::FadingOut(Direction::Forward) if self.current < QUESTION_COUNT => {
                self.current += 1;
                self.phase = Phase::FadingIn;
                vec![Effect::StartTimer(FADE_IN_MS)]
            }
            Phase::FadingOut(Direction::Forward) => {
                self.phase = Phase::Finished;
                vec![Effect::Finish(self.answers.clone())]
            }
            Phase::FadingOut(Direction::Backward) => {
                self.current = self.current.saturating_sub(1).max(1);
                self.phase = Phase::FadingIn;
                vec![Effect::StartTimer(FADE_IN_MS)]
            }
            Phase::FadingIn => {
                self.phase = Phase::Idle;
                Vec::new()
            }
            Phase::Idle | Phase::Finished => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::{ContactReason, Purchase, Referral, Region, QUESTIONS};

    fn settle(machine: &mut QuizMachine) -> Vec<Effect> {
        let mut seen = Vec::new();
        loop {
            let effects = machine.on_timer();
            if effects.is_empty() {
                return seen;
            }
            let done = effects.iter().any(|e| matches!(e, Effect::Finish(_)));
            seen.extend(effects);
            if done {
                return seen;
            }
        }
    }

    #[test]
    fn starts_on_first_question_with_nothing_answered() {
        let machine = QuizMachine::new();
        assert_eq!(machine.current(), 1);
        assert!(machine.answers().is_empty());
        assert!(machine.is_visible());
        assert!(!machine.is_transitioning());
    }

    #[test]
    fn answer_persists_then_fades_out() {
        let mut machine = QuizMachine::new();
        let effects = machine
            .answer(Answer::Referral(Referral::Anuncio))
            .unwrap();

        let mut expected = QuizAnswers::default();
        expected.question1 = Some(Referral::Anuncio);
        assert_eq!(
            effects,
            vec![Effect::Persist(expected), Effect::StartTimer(FADE_OUT_MS)]
        );
        assert_eq!(machine.phase(), Phase::FadingOut(Direction::Forward));
        assert!(!machine.is_visible());
        assert_eq!(machine.current(), 1);
    }

    #[test]
    fn fade_out_then_fade_in_advances_by_one() {
        let mut machine = QuizMachine::new();
        machine.answer(Answer::Referral(Referral::Indicacao)).unwrap();

        assert_eq!(machine.on_timer(), vec![Effect::StartTimer(FADE_IN_MS)]);
        assert_eq!(machine.current(), 2);
        assert!(!machine.is_visible());
        assert!(machine.is_transitioning());

        assert!(machine.on_timer().is_empty());
        assert!(machine.is_visible());
        assert!(!machine.is_transitioning());
    }

    #[test]
    fn input_is_ignored_while_transitioning() {
        let mut machine = QuizMachine::new();
        machine.answer(Answer::Referral(Referral::Indicacao)).unwrap();

        assert_eq!(
            machine.answer(Answer::Referral(Referral::Anuncio)),
            Err(Rejection::Transitioning)
        );
        assert_eq!(machine.go_back(), Err(Rejection::Transitioning));
        assert_eq!(machine.answers().question1, Some(Referral::Indicacao));
    }

    #[test]
    fn option_from_another_question_is_rejected() {
        let mut machine = QuizMachine::new();
        assert_eq!(
            machine.answer(Answer::Region(Region::Ilha)),
            Err(Rejection::WrongQuestion {
                expected: 1,
                got: 4
            })
        );
        assert!(machine.answers().is_empty());
        assert!(machine.is_visible());
    }

    #[test]
    fn go_back_is_noop_on_first_question() {
        let mut machine = QuizMachine::new();
        assert_eq!(machine.go_back(), Err(Rejection::AtFirstQuestion));
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn go_back_decrements_without_touching_answers() {
        let mut machine = QuizMachine::new();
        machine.answer(Answer::Referral(Referral::Indicacao)).unwrap();
        settle(&mut machine);
        machine.answer(Answer::Purchase(Purchase::Presente)).unwrap();
        settle(&mut machine);
        let before = machine.answers().clone();

        assert_eq!(machine.go_back(), Ok(vec![Effect::StartTimer(FADE_OUT_MS)]));
        settle(&mut machine);

        assert_eq!(machine.current(), 2);
        assert_eq!(machine.answers(), &before);
        assert!(machine.is_visible());
    }

    #[test]
    fn reanswering_after_going_back_overwrites_and_advances() {
        let mut machine = QuizMachine::new();
        machine.answer(Answer::Referral(Referral::Indicacao)).unwrap();
        settle(&mut machine);
        machine.go_back().unwrap();
        settle(&mut machine);
        assert_eq!(machine.current(), 1);

        machine.answer(Answer::Referral(Referral::Anuncio)).unwrap();
        settle(&mut machine);

        assert_eq!(machine.current(), 2);
        assert_eq!(machine.answers().question1, Some(Referral::Anuncio));
    }

    #[test]
    fn every_option_advances_exactly_one_question() {
        for q in QUESTIONS.iter().filter(|q| q.number < QUESTION_COUNT) {
            for option in q.options {
                let mut machine = QuizMachine::new();
                for earlier in QUESTIONS.iter().take(q.number as usize - 1) {
                    machine.answer(earlier.options[0]).unwrap();
                    settle(&mut machine);
                }
                assert_eq!(machine.current(), q.number);

                machine.answer(*option).unwrap();
                settle(&mut machine);

                assert_eq!(machine.current(), q.number + 1);
                assert_eq!(machine.answers().get(q.number), Some(*option));
            }
        }
    }

    #[test]
    fn last_answer_finishes_and_locks_the_machine() {
        let mut machine = QuizMachine::new();
        for q in QUESTIONS.iter().take(5) {
            machine.answer(q.options[1]).unwrap();
            settle(&mut machine);
        }
        assert_eq!(machine.current(), 6);

        machine.answer(Answer::Reason(ContactReason::Outro)).unwrap();
        let effects = machine.on_timer();

        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::Finish(answers) => {
                assert_eq!(answers.question6, Some(ContactReason::Outro))
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert_eq!(machine.phase(), Phase::Finished);
        assert_eq!(machine.current(), 6);
        assert_eq!(
            machine.answer(Answer::Reason(ContactReason::Preco)),
            Err(Rejection::Finished)
        );
        assert_eq!(machine.go_back(), Err(Rejection::Finished));
        assert!(machine.on_timer().is_empty());
    }

    #[test]
    fn stray_timer_while_idle_does_nothing() {
        let mut machine = QuizMachine::new();
        assert!(machine.on_timer().is_empty());
        assert_eq!(machine.current(), 1);
    }
}
