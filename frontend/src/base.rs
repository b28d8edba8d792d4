use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{api_mode, ApiMode};
use crate::hooks::use_user;
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let user = use_user();
    let loaded = user.cache.user().is_some();

    html! {
        <div class={styles::CONTAINER}>
            <header class={styles::NAV}>
                <h1 class={styles::NAV_TITLE}>{ "Spin & Earn" }</h1>
                if loaded {
                    <div class="flex space-x-2">
                        <span class={styles::NAV_BADGE}>
                            <span class={styles::TEXT_ACCENT}>{ user.cache.coins() }</span>{ " Coins" }
                        </span>
                        <span class={styles::NAV_BADGE}>
                            <span class={styles::TEXT_ACCENT}>{ user.cache.spins() }</span>{ " Spins" }
                        </span>
                    </div>
                } else {
                    <span class={styles::TEXT_SMALL}>{ "Loading..." }</span>
                }
            </header>

            if api_mode() == ApiMode::Local {
                <div class="pt-16 px-4">
                    <p class={styles::ALERT_WARNING}>{ "Local mode: balances live in this tab only." }</p>
                </div>
            }

            <main>{ props.children.clone() }</main>

            <nav class={styles::BOTTOM_NAV}>
                <Link<Route> to={Route::Spin} classes={classes!(styles::BOTTOM_NAV_LINK)}>{ "Spin" }</Link<Route>>
                <Link<Route> to={Route::Earn} classes={classes!(styles::BOTTOM_NAV_LINK)}>{ "Earn" }</Link<Route>>
                <Link<Route> to={Route::Withdraw} classes={classes!(styles::BOTTOM_NAV_LINK)}>{ "Withdraw" }</Link<Route>>
                <Link<Route> to={Route::Advertise} classes={classes!(styles::BOTTOM_NAV_LINK)}>{ "Advertise" }</Link<Route>>
            </nav>
        </div>
    }
}
