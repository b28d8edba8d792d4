use shared::campaign::{Campaign, CampaignCategory, CampaignStatus};
use shared::pricing::default_reward_per_completion;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::ProgressBar;
use crate::styles;

fn status_text(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => "Active",
        CampaignStatus::Paused => "Paused",
        CampaignStatus::Completed => "Completed",
    }
}

fn category_text(campaign: &Campaign) -> String {
    match (campaign.category, campaign.required_level) {
        (CampaignCategory::Partner, Some(level)) => format!("Partner, level {}+", level),
        (CampaignCategory::Partner, None) => "Partner".to_string(),
        (CampaignCategory::Game, _) => "Game".to_string(),
        (CampaignCategory::Social, _) => "Social".to_string(),
    }
}

#[function_component(CampaignList)]
pub fn campaign_list() -> Html {
    let campaigns = use_state(|| None::<Vec<Campaign>>);
    let error = use_state(|| None::<String>);

    {
        let campaigns = campaigns.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_campaigns().await {
                    Ok(list) => campaigns.set(Some(list)),
                    Err(err) => {
                        log::error!("Failed to load campaigns: {}", err);
                        error.set(Some(err.user_message().to_string()));
                    }
                }
            });
            || ()
        });
    }

    if let Some(msg) = (*error).clone() {
        return html! { <div class={styles::ALERT_ERROR}>{ msg }</div> };
    }

    let Some(list) = (*campaigns).clone() else {
        return html! { <p class={styles::TEXT_SMALL}>{ "Loading campaigns..." }</p> };
    };

    if list.is_empty() {
        return html! { <p class={styles::TEXT_SMALL}>{ "No campaigns yet." }</p> };
    }

    html! {
        <div class="space-y-3">
            { for list.iter().map(|campaign| {
                let reward = default_reward_per_completion(campaign.cost, campaign.goal).round();
                html! {
                    <div key={campaign.id.clone()} class={styles::CARD}>
                        <div class="flex items-center justify-between">
                            <span class={styles::CARD_TITLE}>{ &campaign.link }</span>
                            <span class={styles::TEXT_SMALL}>{ status_text(campaign.status) }</span>
                        </div>
                        <ProgressBar current={campaign.completions} total={campaign.goal} />
                        <div class="flex items-center justify-between">
                            <span class={styles::TEXT_SMALL}>
                                { format!("{}/{} - {}", campaign.completions, campaign.goal, category_text(campaign)) }
                            </span>
                            <span class={styles::TEXT_ACCENT}>{ format!("+{} coins", reward) }</span>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
