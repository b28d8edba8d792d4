use yew::prelude::*;

use crate::components::CampaignForm;
use crate::styles;

#[function_component(NewTask)]
pub fn new_task() -> Html {
    html! {
        <div class={styles::PAGE}>
            <h2 class={styles::TEXT_H2}>{ "New Task" }</h2>
            <p class={styles::TEXT_SMALL}>
                { "Promote a Telegram channel, group or bot. Users earn coins for every completion." }
            </p>
            <CampaignForm />
        </div>
    }
}
