use shared::api::RedeemPromoRequest;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::components::NoticeLine;
use crate::hooks::{use_form_state, use_user, UserAction};
use crate::styles;

#[function_component(PromoCodeRedeem)]
pub fn promo_code_redeem() -> Html {
    let user = use_user();
    let form = use_form_state();
    let code = use_state(String::new);

    let on_input = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                code.set(input.value());
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let code = code.clone();
        let dispatcher = user.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = RedeemPromoRequest { code: code.trim().to_string() };
            if request.code.is_empty() || !form.try_begin() {
                return;
            }

            let form = form.clone();
            let code = code.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match api::redeem_promo_code(request).await {
                    Ok(response) => {
                        if let Some(user) = response.user {
                            dispatcher.dispatch(UserAction::Replace(user));
                        }
                        if response.success {
                            code.set(String::new());
                            form.succeed(response.message);
                        } else {
                            form.fail(response.message);
                        }
                    }
                    Err(err) => {
                        log::error!("Promo code redemption failed: {}", err);
                        form.fail(err.user_message());
                    }
                }
            });
        })
    };

    html! {
        <form class={styles::CARD} onsubmit={on_submit}>
            <h3 class={styles::CARD_TITLE}>{ "Promo code" }</h3>
            <input
                type="text"
                class={styles::INPUT}
                placeholder="Enter code"
                value={(*code).clone()}
                oninput={on_input}
            />
            <NoticeLine notice={(*form.notice).clone()} />
            <button type="submit" class={styles::BUTTON_SECONDARY}
                    disabled={form.is_pending() || code.trim().is_empty()}>
                { if form.is_pending() { "Redeeming..." } else { "Redeem" } }
            </button>
        </form>
    }
}
