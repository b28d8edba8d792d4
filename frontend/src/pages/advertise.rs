use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AdCreditDeposit, CampaignList};
use crate::styles;
use crate::Route;

#[function_component(Advertise)]
pub fn advertise() -> Html {
    html! {
        <div class={styles::PAGE}>
            <AdCreditDeposit />
            <div class="flex space-x-3">
                <Link<Route> to={Route::NewTask} classes={classes!(styles::BUTTON_SPIN, "text-center")}>
                    { "New Task" }
                </Link<Route>>
                <Link<Route> to={Route::NewPartnerTask} classes={classes!(styles::BUTTON_AUTO, "text-center")}>
                    { "Partner Task" }
                </Link<Route>>
            </div>
            <h2 class={styles::TEXT_H2}>{ "My Campaigns" }</h2>
            <CampaignList />
        </div>
    }
}
