use shared::constants::CONVERSION_RATE;
use yew::prelude::*;

use crate::components::PromoCodeRedeem;
use crate::hooks::use_user;
use crate::styles;

#[function_component(Earn)]
pub fn earn() -> Html {
    let user = use_user();
    let coins = user.cache.coins();

    html! {
        <div class={styles::PAGE}>
            <div class={styles::CARD}>
                <div class="flex items-center justify-between">
                    <h3 class={styles::CARD_TITLE}>{ "Balance" }</h3>
                    <span class={styles::TEXT_ACCENT}>{ format!("{} coins", coins) }</span>
                </div>
                <p class={styles::TEXT_HINT}>
                    { format!("{} coins = 1 TON", CONVERSION_RATE) }
                </p>
            </div>
            <PromoCodeRedeem />
        </div>
    }
}
