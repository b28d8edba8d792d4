use yew::prelude::*;

use crate::hooks::Notice;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NoticeLineProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeLine)]
pub fn notice_line(props: &NoticeLineProps) -> Html {
    match &props.notice {
        Some(Notice::Success(msg)) => html! { <div class={styles::ALERT_SUCCESS}>{ msg }</div> },
        Some(Notice::Error(msg)) => html! { <div class={styles::ALERT_ERROR}>{ msg }</div> },
        None => html! {},
    }
}
