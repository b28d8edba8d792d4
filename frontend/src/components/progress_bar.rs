use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub current: u32,
    pub total: u32,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percent = if props.total == 0 {
        0.0
    } else {
        (f64::from(props.current) / f64::from(props.total) * 100.0).min(100.0)
    };

    html! {
        <div class={styles::PROGRESS_TRACK}>
            <div class={styles::PROGRESS_FILL} style={format!("width: {:.1}%", percent)}></div>
        </div>
    }
}
