use std::str::FromStr;

use rust_decimal::Decimal;
use shared::api::DepositRequest;
use shared::validation::validate_positive_amount;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::components::NoticeLine;
use crate::hooks::{use_form_state, use_user, UserAction};
use crate::styles;

const INVALID_AMOUNT: &str = "Invalid amount entered.";

#[function_component(AdCreditDeposit)]
pub fn ad_credit_deposit() -> Html {
    let user = use_user();
    let form = use_form_state();
    let amount = use_state(String::new);

    let on_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                amount.set(input.value());
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let amount = amount.clone();
        let dispatcher = user.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let parsed = Decimal::from_str(amount.trim()).ok();
            let Some(value) = parsed.filter(|v| validate_positive_amount(v).is_ok()) else {
                form.fail(INVALID_AMOUNT);
                return;
            };
            if !form.try_begin() {
                return;
            }

            let form = form.clone();
            let amount = amount.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match api::deposit_ad_credit(DepositRequest { amount: value }).await {
                    Ok(response) => match (response.success, response.user) {
                        (true, Some(user)) => {
                            dispatcher.dispatch(UserAction::Replace(user));
                            amount.set(String::new());
                            form.succeed(format!("Added {} TON to your ad balance.", value.normalize()));
                        }
                        _ => form.fail(INVALID_AMOUNT),
                    },
                    Err(err) => {
                        log::error!("Deposit failed: {}", err);
                        form.fail(err.user_message());
                    }
                }
            });
        })
    };

    html! {
        <form class={styles::CARD} onsubmit={on_submit}>
            <div class="flex items-center justify-between">
                <h3 class={styles::CARD_TITLE}>{ "Ad balance" }</h3>
                <span class={styles::TEXT_ACCENT}>{ format!("{} TON", user.cache.ad_credit().normalize()) }</span>
            </div>
            <input
                type="text"
                inputmode="decimal"
                class={styles::INPUT}
                placeholder="Amount in TON"
                value={(*amount).clone()}
                oninput={on_input}
            />
            <NoticeLine notice={(*form.notice).clone()} />
            <button type="submit" class={styles::BUTTON_SECONDARY} disabled={form.is_pending()}>
                { if form.is_pending() { "Depositing..." } else { "Deposit" } }
            </button>
        </form>
    }
}
