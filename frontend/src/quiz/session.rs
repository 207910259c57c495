use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info};
use yew::Callback;

use super::catalog::{Answer, QuizAnswers};
use super::machine::{Effect, QuizMachine, Rejection};
use super::scheduler::Scheduler;
use crate::storage::{self, KeyValueStore};

/// What the quiz page needs to render one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizView {
    pub current: u8,
    pub visible: bool,
    pub transitioning: bool,
    pub selected: Option<Answer>,
}

struct Inner<St, Sc> {
    machine: RefCell<QuizMachine>,
    store: St,
    scheduler: Sc,
    on_change: Callback<()>,
    on_finish: Callback<QuizAnswers>,
}

/// Runs a [`QuizMachine`] against real side effects: answers go to the
/// store, timers go to the scheduler, and the final record is handed to
/// `on_finish`.
pub struct QuizSession<St, Sc> {
    inner: Rc<Inner<St, Sc>>,
}

impl<St, Sc> Clone for QuizSession<St, Sc> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<St, Sc> QuizSession<St, Sc>
where
    St: KeyValueStore + 'static,
    Sc: Scheduler + 'static,
{
    pub fn new(
        store: St,
        scheduler: Sc,
        on_change: Callback<()>,
        on_finish: Callback<QuizAnswers>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                machine: RefCell::new(QuizMachine::new()),
                store,
                scheduler,
                on_change,
                on_finish,
            }),
        }
    }

    pub fn view(&self) -> QuizView {
        let machine = self.inner.machine.borrow();
        QuizView {
            current: machine.current(),
            visible: machine.is_visible(),
            transitioning: machine.is_transitioning(),
            selected: machine.answers().get(machine.current()),
        }
    }

    pub fn answer(&self, answer: Answer) {
        let result = self.inner.machine.borrow_mut().answer(answer);
        match result {
            Ok(effects) => {
                info!("Answer {}: {}", answer.question(), answer.code());
                run_effects(&self.inner, effects);
            }
            Err(rejection) => log_rejection(rejection),
        }
    }

    pub fn go_back(&self) {
        let result = self.inner.machine.borrow_mut().go_back();
        match result {
            Ok(effects) => run_effects(&self.inner, effects),
            Err(rejection) => log_rejection(rejection),
        }
    }

    /// Drops any pending transition. Called when the quiz page unmounts.
    pub fn teardown(&self) {
        self.inner.scheduler.cancel();
    }
}

fn log_rejection(rejection: Rejection) {
    debug!("Quiz input ignored: {}", rejection);
}

fn persist<St: KeyValueStore>(store: &St, answers: &QuizAnswers) {
    if let Err(e) = storage::save_answers(store, answers) {
        error!("Failed to save quiz answers: {}", e);
    }
}

fn run_effects<St, Sc>(inner: &Rc<Inner<St, Sc>>, effects: Vec<Effect>)
where
    St: KeyValueStore + 'static,
    Sc: Scheduler + 'static,
{
    for effect in effects {
        match effect {
            Effect::Persist(answers) => {
                debug!("All answers: {:?}", answers);
                persist(&inner.store, &answers);
            }
            Effect::StartTimer(delay_ms) => {
                let weak = Rc::downgrade(inner);
                inner.scheduler.schedule(
                    delay_ms,
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            let effects = inner.machine.borrow_mut().on_timer();
                            run_effects(&inner, effects);
                        }
                    }),
                );
            }
            Effect::Finish(answers) => {
                persist(&inner.store, &answers);
                info!("Quiz finished with answers: {:?}", answers);
                inner.on_finish.emit(answers);
            }
        }
    }
    inner.on_change.emit(());
}
