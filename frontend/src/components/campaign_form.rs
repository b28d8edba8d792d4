use rust_decimal::Decimal;
use shared::api::{CampaignResponse, CreatePartnerTaskRequest, CreateTaskRequest};
use shared::constants::{MAX_PARTNER_LEVEL, MIN_PARTNER_LEVEL};
use shared::pricing::{CampaignPricing, PricingRequest, COMPLETION_TIERS};
use shared::validation::{check_submission, SubmitBlocker};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::{LanguagePicker, NoticeLine};
use crate::hooks::{use_form_state, use_user, UserAction};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CampaignFormProps {
    /// Partner tasks carry a required level instead of a subscription check.
    #[prop_or_default]
    pub partner: bool,
}

fn select_value(e: &Event) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
}

#[function_component(CampaignForm)]
pub fn campaign_form(props: &CampaignFormProps) -> Html {
    let user = use_user();
    let form = use_form_state();
    let link = use_state(String::new);
    let pricing = {
        let partner = props.partner;
        use_state(move || {
            let tier = COMPLETION_TIERS[0];
            if partner {
                PricingRequest::partner(tier)
            } else {
                PricingRequest::task(tier)
            }
        })
    };

    let total = pricing.total();
    let blocker = match &total {
        Ok(total) => check_submission(link.trim(), &pricing.languages, *total, user.cache.ad_credit()).err(),
        Err(_) => None,
    };

    let on_link = {
        let link = link.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                link.set(input.value());
            }
        })
    };

    let on_tier = {
        let pricing = pricing.clone();
        Callback::from(move |e: Event| {
            let index = select_value(&e).and_then(|v| v.parse::<usize>().ok());
            if let Some(tier) = index.and_then(|i| COMPLETION_TIERS.get(i)) {
                let mut next = (*pricing).clone();
                next.tier = *tier;
                pricing.set(next);
            }
        })
    };

    let on_level = {
        let pricing = pricing.clone();
        Callback::from(move |e: Event| {
            if let Some(level) = select_value(&e).and_then(|v| v.parse::<u8>().ok()) {
                let mut next = (*pricing).clone();
                next.kind = CampaignPricing::Partner { required_level: level };
                pricing.set(next);
            }
        })
    };

    let on_subscription = {
        let pricing = pricing.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                let mut next = (*pricing).clone();
                next.kind = CampaignPricing::Task { require_subscription_check: input.checked() };
                pricing.set(next);
            }
        })
    };

    let on_toggle_language = {
        let pricing = pricing.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*pricing).clone();
            next.languages.toggle(id);
            pricing.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let link = link.clone();
        let pricing = pricing.clone();
        let dispatcher = user.dispatcher();
        let total = total.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Ok(cost) = total.clone() else { return };
            if blocker.is_some() || !form.try_begin() {
                return;
            }

            let form = form.clone();
            let link_handle = link.clone();
            let dispatcher = dispatcher.clone();
            let request = (*pricing).clone();
            let link = (*link).trim().to_string();

            spawn_local(async move {
                let result = submit(link, request, cost).await;
                match result {
                    Ok(response) => {
                        if let Some(user) = response.user {
                            dispatcher.dispatch(UserAction::Replace(user));
                        }
                        if response.success {
                            link_handle.set(String::new());
                            form.succeed(response.message);
                        } else {
                            form.fail(response.message);
                        }
                    }
                    Err(err) => {
                        log::error!("Campaign creation failed: {}", err);
                        form.fail(err.user_message());
                    }
                }
            });
        })
    };

    let price_text = match &total {
        Ok(total) => format!("{} TON", total.round_dp(4).normalize()),
        Err(err) => err.to_string(),
    };
    let goal = pricing.tier.completions;
    let selected_tier = COMPLETION_TIERS.iter().position(|t| *t == pricing.tier).unwrap_or(0);
    let link_invalid = !link.is_empty() && blocker == Some(SubmitBlocker::InvalidLink);

    html! {
        <form class={styles::FORM} onsubmit={on_submit}>
            <div>
                <label class={styles::TEXT_LABEL}>{ "Link" }</label>
                <input
                    type="url"
                    class={if link_invalid { styles::INPUT_ERROR } else { styles::INPUT }}
                    placeholder="https://t.me/your_channel"
                    value={(*link).clone()}
                    oninput={on_link}
                />
            </div>

            <div>
                <label class={styles::TEXT_LABEL}>{ "Completions" }</label>
                <select class={styles::SELECT} onchange={on_tier}>
                    { for COMPLETION_TIERS.iter().enumerate().map(|(i, tier)| html! {
                        <option value={i.to_string()} selected={i == selected_tier}>
                            { format!("{} ({} TON)", tier.label(), tier.base_cost.normalize()) }
                        </option>
                    })}
                </select>
            </div>

            { match pricing.kind {
                CampaignPricing::Task { require_subscription_check } => html! {
                    <label class={styles::CHECKBOX_ROW}>
                        <input type="checkbox" checked={require_subscription_check} onchange={on_subscription} />
                        <span>{ "Check subscription (+30%)" }</span>
                    </label>
                },
                CampaignPricing::Partner { required_level } => html! {
                    <div>
                        <label class={styles::TEXT_LABEL}>{ "Required level" }</label>
                        <select class={styles::SELECT} onchange={on_level}>
                            { for (MIN_PARTNER_LEVEL..=MAX_PARTNER_LEVEL).map(|level| html! {
                                <option value={level.to_string()} selected={level == required_level}>
                                    { format!("Level {}", level) }
                                </option>
                            })}
                        </select>
                    </div>
                },
            }}

            <LanguagePicker selection={pricing.languages.clone()} on_toggle={on_toggle_language} />

            <div class={styles::CARD}>
                <div class={styles::PRICE_TOTAL}>
                    <span>{ "Total" }</span>
                    <span class={styles::TEXT_ACCENT}>{ price_text }</span>
                </div>
                <p class={styles::TEXT_SMALL}>
                    { format!("{} completions. Ad balance: {} TON", goal, user.cache.ad_credit().normalize()) }
                </p>
                if let Some(blocker) = blocker {
                    <p class={styles::TEXT_ERROR}>{ blocker.message() }</p>
                }
            </div>

            <NoticeLine notice={(*form.notice).clone()} />

            <button type="submit" class={styles::BUTTON_PRIMARY}
                    disabled={blocker.is_some() || total.is_err() || form.is_pending()}>
                { if form.is_pending() { "Creating..." } else { "Create campaign" } }
            </button>
        </form>
    }
}

async fn submit(link: String, request: PricingRequest, cost: Decimal) -> Result<CampaignResponse, ApiError> {
    let goal = request.tier.completions;
    match request.required_level() {
        Some(level) => {
            api::create_partner_task(CreatePartnerTaskRequest { link, goal, cost, level }).await
        }
        None => api::create_task(CreateTaskRequest { link, goal, cost }).await,
    }
}
