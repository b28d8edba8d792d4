use yew::prelude::*;

use crate::components::CampaignForm;
use crate::styles;

#[function_component(NewPartnerTask)]
pub fn new_partner_task() -> Html {
    html! {
        <div class={styles::PAGE}>
            <h2 class={styles::TEXT_H2}>{ "New Partner Task" }</h2>
            <p class={styles::TEXT_SMALL}>
                { "Partner tasks are shown only to users at or above the required level." }
            </p>
            <CampaignForm partner=true />
        </div>
    }
}
