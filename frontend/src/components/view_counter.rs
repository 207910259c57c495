use yew::prelude::*;
use yew_hooks::use_interval;

use crate::counter::{format_count, CounterProfile, CounterReading};

fn read_now(profile: &CounterProfile) -> CounterReading {
    CounterReading::take(profile, chrono::Utc::now(), &mut rand::thread_rng())
}

/// Current counter value, refreshed on a period picked once per mount.
/// The interval is cleared when the component using it unmounts.
#[hook]
pub fn use_simulated_counter(profile: &'static CounterProfile) -> CounterReading {
    let reading = use_state(|| read_now(profile));
    let period = use_state(|| profile.refresh_interval_ms(&mut rand::thread_rng()));

    {
        let reading = reading.clone();
        use_interval(
            move || {
                let next = read_now(profile);
                log::debug!("Counter refreshed: {}", next.count);
                reading.set(next);
            },
            *period,
        );
    }

    (*reading).clone()
}

#[derive(Properties, PartialEq)]
pub struct ViewCounterProps {
    pub reading: CounterReading,
    pub label: &'static str,
}

#[function_component(ViewCounter)]
pub fn view_counter(props: &ViewCounterProps) -> Html {
    html! {
        <div class="view-counter">
            <div class="view-counter-icon">{"👁"}</div>
            <div>
                <div class="view-counter-value">
                    {format!("{} {}", format_count(props.reading.count), props.label)}
                </div>
                <div class="view-counter-date">{&props.reading.date}</div>
            </div>
        </div>
    }
}
