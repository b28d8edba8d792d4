use shared::api::BuySpinsRequest;
use shared::constants::CONVERSION_RATE;
use shared::spin_store::{PaymentCurrency, SPIN_STORE_PACKAGES};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::NoticeLine;
use crate::hooks::{use_form_state, use_user, UserAction};
use crate::styles;

#[function_component(SpinStore)]
pub fn spin_store() -> Html {
    let user = use_user();
    let form = use_form_state();
    let currency = use_state(PaymentCurrency::default);
    let buying = use_state(|| None::<String>);

    let pick_currency = |choice: PaymentCurrency| {
        let currency = currency.clone();
        Callback::from(move |_: MouseEvent| currency.set(choice))
    };

    let on_buy = {
        let form = form.clone();
        let currency = currency.clone();
        let buying = buying.clone();
        let dispatcher = user.dispatcher();
        Callback::from(move |package_id: String| {
            if !form.try_begin() {
                return;
            }
            let request = BuySpinsRequest { package_id: package_id.clone(), currency: *currency };
            let form = form.clone();
            let buying = buying.clone();
            let dispatcher = dispatcher.clone();
            buying.set(Some(package_id));
            spawn_local(async move {
                match api::buy_spins(request).await {
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
                        log::error!("Spin purchase failed: {}", err);
                        form.fail(err.user_message());
                    }
                }
                buying.set(None);
            });
        })
    };

    let chip = |choice: PaymentCurrency| {
        if *currency == choice {
            styles::CHIP_SELECTED
        } else {
            styles::CHIP
        }
    };

    html! {
        <div class={styles::CARD}>
            <div class="flex items-center justify-between">
                <h3 class={styles::CARD_TITLE}>{ "Spin Store" }</h3>
                <div class="flex space-x-2">
                    <button type="button" class={chip(PaymentCurrency::Coins)}
                            onclick={pick_currency(PaymentCurrency::Coins)}>{ "Coins" }</button>
                    <button type="button" class={chip(PaymentCurrency::Ton)}
                            onclick={pick_currency(PaymentCurrency::Ton)}>{ "TON" }</button>
                </div>
            </div>
            <div class="grid grid-cols-2 gap-2">
                { for SPIN_STORE_PACKAGES.iter().map(|package| {
                    let id = package.id.clone();
                    let onclick = on_buy.reform(move |_: MouseEvent| id.clone());
                    let busy = buying.as_deref() == Some(package.id.as_str());
                    html! {
                        <button key={package.id.clone()} class={styles::STORE_ITEM}
                                {onclick} disabled={form.is_pending()}>
                            <span class={styles::TEXT_ACCENT}>{ format!("{} Spins", package.spins) }</span>
                            <span class={styles::TEXT_SMALL}>
                                { if busy { "Buying...".to_string() } else { package.price_text(*currency, CONVERSION_RATE) } }
                            </span>
                        </button>
                    }
                })}
            </div>
            <NoticeLine notice={(*form.notice).clone()} />
        </div>
    }
}
