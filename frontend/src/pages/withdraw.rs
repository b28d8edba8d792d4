use std::str::FromStr;

use rust_decimal::Decimal;
use shared::api::WithdrawalRequest;
use shared::constants::CONVERSION_RATE;
use shared::error::LedgerError;
use shared::wallet::{coins_to_ton, min_withdrawal_ton, withdrawal_cost, Transaction, TransactionStatus};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::components::NoticeLine;
use crate::hooks::{use_form_state, use_user, UserAction};
use crate::styles;

fn status_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "text-sm font-medium text-green-500",
        TransactionStatus::Pending => "text-sm font-medium text-yellow-500",
        TransactionStatus::Failed => "text-sm font-medium text-red-500",
    }
}

#[function_component(Withdraw)]
pub fn withdraw() -> Html {
    let user = use_user();
    let form = use_form_state();
    let amount = use_state(|| min_withdrawal_ton().to_string());
    let history = use_state(Vec::<Transaction>::new);
    // Bumped after each withdrawal so the history reloads
    let refresh = use_state(|| 0u32);

    {
        let history = history.clone();
        use_effect_with(*refresh, move |_| {
            spawn_local(async move {
                match api::fetch_transactions().await {
                    Ok(list) => history.set(list),
                    Err(err) => log::error!("Failed to load transactions: {}", err),
                }
            });
            || ()
        });
    }

    let coins = user.cache.coins();
    let parsed = Decimal::from_str(amount.trim()).ok();
    let gate = match parsed {
        Some(value) => withdrawal_cost(value, coins, CONVERSION_RATE).map(|_| value),
        None => Err(LedgerError::InvalidAmount),
    };

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
        let refresh = refresh.clone();
        let dispatcher = user.dispatcher();
        let gate = gate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Ok(value) = gate.clone() else { return };
            if !form.try_begin() {
                return;
            }
            let form = form.clone();
            let refresh = refresh.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match api::withdraw(WithdrawalRequest { amount_in_ton: value }).await {
                    Ok(response) => match (response.success, response.user) {
                        (true, Some(user)) => {
                            dispatcher.dispatch(UserAction::Replace(user));
                            refresh.set(*refresh + 1);
                            form.succeed(format!("Successfully withdrew {} TON!", value.normalize()));
                        }
                        _ => form.fail("Withdrawal failed. Insufficient balance."),
                    },
                    Err(err) => {
                        log::error!("Withdrawal failed: {}", err);
                        form.fail(err.user_message());
                    }
                }
            });
        })
    };

    html! {
        <div class={styles::PAGE}>
            <div class={classes!(styles::CARD, "text-center")}>
                <p class={styles::TEXT_SMALL}>{ "Your balance" }</p>
                <p class="text-3xl font-bold text-white">{ format!("{} Coins", coins) }</p>
                <p class={styles::TEXT_ACCENT}>{ format!("≈ {:.4} TON", coins_to_ton(coins, CONVERSION_RATE)) }</p>
                <p class={styles::TEXT_SMALL}>{ format!("TON balance: {}", user.cache.user().map(|u| u.ton).unwrap_or_default().normalize()) }</p>
            </div>

            <form class={styles::CARD} onsubmit={on_submit}>
                <h3 class={styles::CARD_TITLE}>{ "Withdraw" }</h3>
                <input
                    type="text"
                    inputmode="decimal"
                    class={if gate.is_err() { styles::INPUT_ERROR } else { styles::INPUT }}
                    value={(*amount).clone()}
                    oninput={on_input}
                />
                if let Err(reason) = &gate {
                    <p class={styles::TEXT_ERROR}>{ reason.to_string() }</p>
                }
                <p class={styles::TEXT_HINT}>{ format!("Min {:.2} TON", min_withdrawal_ton()) }</p>
                <NoticeLine notice={(*form.notice).clone()} />
                <button type="submit" class={styles::BUTTON_PRIMARY} disabled={gate.is_err() || form.is_pending()}>
                    { if form.is_pending() { "Withdrawing..." } else { "Withdraw" } }
                </button>
            </form>

            <div class={styles::CARD}>
                <h3 class={styles::CARD_TITLE}>{ "Payment history" }</h3>
                if history.is_empty() {
                    <p class={styles::TEXT_SMALL}>{ "No transactions yet." }</p>
                }
                { for history.iter().map(|tx| html! {
                    <div key={tx.id.clone()} class="flex justify-between items-center py-2 border-b border-slate-700/50">
                        <div>
                            <p class={styles::CARD_TITLE}>{ format!("{:?}", tx.kind) }</p>
                            <p class={styles::TEXT_SMALL}>{ tx.date.to_string() }</p>
                        </div>
                        <div class="text-right">
                            <p class="font-bold text-white">{ tx.amount_text() }</p>
                            <p class={status_class(tx.status)}>{ format!("{:?}", tx.status) }</p>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
