use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use rand::Rng;
use shared::auto_spin::{AutoSpinController, AutoSpinState, AutoSpinStep};
use shared::spin_limits::{SpinLimitCheck, SpinSource};
use shared::spin_wheel::{SpinOutcome, SPIN_WHEEL_PRIZES};
use shared::wheel_angle::{WheelTarget, WheelVisualState, SPIN_ANIMATION_MS};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::ads;
use crate::api;
use crate::components::{NoticeLine, ProgressBar, SpinStore, SpinWheel};
use crate::hooks::{use_form_state, use_user, FormState, Notice, UserAction, UserStore};
use crate::styles;

const AD_FAILED: &str = "Ad failed to load.";

/// Everything one spin touches, cloned into the async tasks that drive it.
#[derive(Clone)]
struct SpinHandles {
    visual: Rc<RefCell<WheelVisualState>>,
    latch: Rc<RefCell<bool>>,
    rotation: UseStateHandle<f64>,
    spinning: UseStateHandle<bool>,
    result: UseStateHandle<Option<Notice>>,
    dispatcher: UseReducerDispatcher<UserStore>,
}

/// Runs one spin end to end: the request, the wheel animation and the result
/// line. Returns the server's spin count afterwards, or `None` if no spin
/// happened, which also ends an auto-spin run.
async fn run_spin(h: &SpinHandles) -> Option<u32> {
    if *h.latch.borrow() {
        return None;
    }
    *h.latch.borrow_mut() = true;
    h.spinning.set(true);
    h.result.set(None);
    h.dispatcher.dispatch(UserAction::OptimisticSpinDebit);

    let spins_left = match api::spin_wheel().await {
        Ok(response) => {
            let outcome = response.outcome();
            let spins_left = response.user.spins;
            h.dispatcher.dispatch(UserAction::Replace(response.user));
            match outcome {
                Some(outcome) => {
                    animate_to(h, &outcome).await;
                    Some(spins_left)
                }
                None => {
                    h.result.set(Some(Notice::Error(response.prize.label)));
                    None
                }
            }
        }
        Err(err) => {
            log::error!("Spin failed: {}", err);
            h.result.set(Some(Notice::Error(err.user_message().to_string())));
            None
        }
    };

    *h.latch.borrow_mut() = false;
    h.spinning.set(false);
    spins_left
}

async fn animate_to(h: &SpinHandles, outcome: &SpinOutcome) {
    let random_unit: f64 = rand::thread_rng().gen();
    let started = h
        .visual
        .borrow_mut()
        .spin_to_prize(&SPIN_WHEEL_PRIZES, &outcome.prize_label, random_unit);

    let text = match started {
        Ok(target) => {
            h.rotation.set(h.visual.borrow().cumulative_rotation_degrees);
            TimeoutFuture::new(SPIN_ANIMATION_MS).await;
            h.visual.borrow_mut().finish();
            match target {
                WheelTarget::Segment(_) => format!("You won {} coins!", outcome.prize_amount),
                WheelTarget::Unmapped => outcome.disclosure(),
            }
        }
        Err(err) => {
            log::error!("Wheel animation could not start: {}", err);
            outcome.disclosure()
        }
    };
    h.result.set(Some(Notice::Success(text)));
}

async fn run_auto_spin(
    h: SpinHandles,
    auto: Rc<RefCell<AutoSpinController>>,
    auto_state: UseStateHandle<AutoSpinState>,
    mut spins_left: u32,
) {
    if !auto.borrow_mut().start() {
        return;
    }
    auto_state.set(AutoSpinState::Running);

    loop {
        let step = auto.borrow_mut().next_step(spins_left);
        match step {
            AutoSpinStep::Spin => match run_spin(&h).await {
                Some(left) => spins_left = left,
                None => auto.borrow_mut().request_stop(),
            },
            AutoSpinStep::Cooldown { ms } => TimeoutFuture::new(ms).await,
            AutoSpinStep::AdBreak { before_ms, after_ms } => {
                TimeoutFuture::new(before_ms).await;
                ads::show_ad_break_or_continue().await;
                TimeoutFuture::new(after_ms).await;
            }
            AutoSpinStep::Finished => break,
        }
    }

    auto_state.set(AutoSpinState::Idle);
}

/// Button handler for one spin source. Watching an ad plays the ad first and
/// only asks for the spin once it closes cleanly.
fn earn_spin_callback(
    source: SpinSource,
    form: FormState,
    dispatcher: UseReducerDispatcher<UserStore>,
) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if !form.try_begin() {
            return;
        }
        let form = form.clone();
        let dispatcher = dispatcher.clone();
        spawn_local(async move {
            if source == SpinSource::WatchAd {
                if let Err(err) = ads::show_ad_break().await {
                    log::error!("Ad failed or was closed: {:?}", err);
                    form.fail(AD_FAILED);
                    return;
                }
            }
            match api::earn_spin(source).await {
                Ok(response) => {
                    if let Some(user) = response.user {
                        dispatcher.dispatch(UserAction::Replace(user));
                    }
                    if response.success {
                        form.succeed(response.message);
                    } else {
                        form.fail(response.message);
                    }
                }
                Err(err) => {
                    log::error!("{:?} spin reward failed: {}", source, err);
                    form.fail(err.user_message());
                }
            }
        });
    })
}

#[derive(Properties, PartialEq)]
struct EarnSpinOptionProps {
    title: &'static str,
    check: SpinLimitCheck,
    action: &'static str,
    form: FormState,
    onclick: Callback<MouseEvent>,
}

#[function_component(EarnSpinOption)]
fn earn_spin_option(props: &EarnSpinOptionProps) -> Html {
    let total = props.check.source.get_max_per_day();
    html! {
        <div class={styles::CARD}>
            <div class="flex items-center justify-between">
                <h3 class={styles::CARD_TITLE}>{ props.title }</h3>
                <span class={styles::TEXT_SMALL}>{ format!("{}/{}", props.check.used_today, total) }</span>
            </div>
            <ProgressBar current={props.check.used_today} total={total} />
            <button class={styles::BUTTON_SECONDARY} onclick={props.onclick.clone()}
                    disabled={props.check.is_locked || props.form.is_pending()}>
                { props.action }
            </button>
            <NoticeLine notice={(*props.form.notice).clone()} />
        </div>
    }
}

#[function_component(SpinWheelPage)]
pub fn spin_wheel_page() -> Html {
    let user = use_user();
    let visual = use_mut_ref(WheelVisualState::new);
    let latch = use_mut_ref(|| false);
    let auto = use_mut_ref(AutoSpinController::new);
    let rotation = use_state(|| 0.0_f64);
    let spinning = use_state(|| false);
    let result = use_state(|| None::<Notice>);
    let auto_state = use_state(AutoSpinState::default);
    let watch_ad = use_form_state();
    let complete_task = use_form_state();
    let invite_friend = use_form_state();

    let handles = SpinHandles {
        visual,
        latch,
        rotation: rotation.clone(),
        spinning: spinning.clone(),
        result: result.clone(),
        dispatcher: user.dispatcher(),
    };

    let spins = user.cache.spins();
    let auto_active = *auto_state != AutoSpinState::Idle;

    let on_spin = {
        let handles = handles.clone();
        Callback::from(move |_: MouseEvent| {
            let handles = handles.clone();
            spawn_local(async move {
                run_spin(&handles).await;
            });
        })
    };

    let on_toggle_auto = {
        let handles = handles.clone();
        let auto = auto.clone();
        let auto_state = auto_state.clone();
        Callback::from(move |_: MouseEvent| {
            if auto.borrow().is_active() {
                auto.borrow_mut().request_stop();
                auto_state.set(AutoSpinState::StoppingRequested);
                return;
            }
            spawn_local(run_auto_spin(handles.clone(), auto.clone(), auto_state.clone(), spins));
        })
    };

    let on_watch_ad = earn_spin_callback(SpinSource::WatchAd, watch_ad.clone(), user.dispatcher());
    let on_complete_task =
        earn_spin_callback(SpinSource::CompleteTask, complete_task.clone(), user.dispatcher());
    let on_invite_friend =
        earn_spin_callback(SpinSource::InviteFriend, invite_friend.clone(), user.dispatcher());

    let limits = user.cache.user().cloned().unwrap_or_default();
    let auto_label = match *auto_state {
        AutoSpinState::Idle => "AUTO SPIN",
        AutoSpinState::Running => "STOP",
        AutoSpinState::StoppingRequested => "STOPPING...",
    };

    html! {
        <div class={styles::PAGE}>
            <SpinWheel catalog={&*SPIN_WHEEL_PRIZES} rotation={*rotation} is_spinning={*spinning || auto_active} />

            <NoticeLine notice={(*result).clone()} />

            <div class="flex space-x-3">
                <button class={styles::BUTTON_SPIN} onclick={on_spin}
                        disabled={*spinning || auto_active || spins == 0}>
                    { "SPIN" }
                </button>
                <button class={if auto_active { styles::BUTTON_STOP } else { styles::BUTTON_AUTO }}
                        onclick={on_toggle_auto}
                        disabled={*auto_state == AutoSpinState::StoppingRequested
                            || (!auto_active && (*spinning || spins == 0))}>
                    { auto_label }
                </button>
            </div>

            <div class="space-y-4 pt-4">
                <h2 class={styles::TEXT_H2}>{ "Get More Spins" }</h2>
                <EarnSpinOption
                    title="Watch an ad"
                    check={SpinLimitCheck::new(SpinSource::WatchAd, &limits)}
                    action="Watch Ad (+1 Spin)"
                    form={watch_ad}
                    onclick={on_watch_ad}
                />
                <EarnSpinOption
                    title="Complete tasks"
                    check={SpinLimitCheck::new(SpinSource::CompleteTask, &limits)}
                    action="Complete Task (+1 Spin)"
                    form={complete_task}
                    onclick={on_complete_task}
                />
                <EarnSpinOption
                    title="Invite friends"
                    check={SpinLimitCheck::new(SpinSource::InviteFriend, &limits)}
                    action="Invite Friend (+1 Spin)"
                    form={invite_friend}
                    onclick={on_invite_friend}
                />
            </div>

            <SpinStore />
        </div>
    }
}
