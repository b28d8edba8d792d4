use shared::pricing::{LanguageSelection, LANGUAGE_OPTIONS};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LanguagePickerProps {
    pub selection: LanguageSelection,
    pub on_toggle: Callback<&'static str>,
}

#[function_component(LanguagePicker)]
pub fn language_picker(props: &LanguagePickerProps) -> Html {
    html! {
        <div>
            <label class={styles::TEXT_LABEL}>{ "Target languages" }</label>
            <div class="mt-2 flex flex-wrap gap-2">
                { for LANGUAGE_OPTIONS.iter().map(|option| {
                    let selected = props.selection.contains(option.id);
                    let on_click = {
                        let on_toggle = props.on_toggle.clone();
                        let id = option.id;
                        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
                    };
                    html! {
                        <button type="button" key={option.id}
                                class={if selected { styles::CHIP_SELECTED } else { styles::CHIP }}
                                onclick={on_click}>
                            { option.name }
                        </button>
                    }
                })}
            </div>
            <p class={styles::TEXT_HINT}>{ "English is always included. Each extra language adds 15%." }</p>
        </div>
    }
}
