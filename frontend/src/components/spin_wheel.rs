use shared::spin_wheel::PrizeCatalog;
use shared::wheel_angle::SPIN_ANIMATION_MS;
use yew::prelude::*;

use crate::styles;

const SEGMENT_COLORS: [&str; 8] = [
    "#db2777", "#16a34a", "#4f46e5", "#f59e0b", "#be185d", "#059669", "#3730a3", "#d97706",
];

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    pub catalog: &'static PrizeCatalog,
    pub rotation: f64,
    pub is_spinning: bool,
}

/// Segment 0 starts at three o'clock and segments run clockwise, the frame
/// the angle mapper computes in. The pointer sits at twelve o'clock.
#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let count = props.catalog.len().max(1);
    let segment = 360.0 / count as f64;

    let gradient = (0..count)
        .map(|i| {
            format!(
                "{} {}deg {}deg",
                SEGMENT_COLORS[i % SEGMENT_COLORS.len()],
                i as f64 * segment,
                (i + 1) as f64 * segment
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let disc_style = format!(
        "transform: rotate({}deg) translateZ(0); background: conic-gradient(from 90deg, {}); \
         transition: transform {}ms cubic-bezier(0.22, 1, 0.36, 1);",
        props.rotation, gradient, SPIN_ANIMATION_MS
    );

    html! {
        <div class={styles::WHEEL_FRAME}>
            <div class={styles::WHEEL_POINTER}></div>
            <div class={styles::WHEEL_DISC} style={disc_style}>
                { for props.catalog.entries().iter().enumerate().map(|(i, prize)| {
                    let angle = 90.0 + i as f64 * segment + segment / 2.0;
                    html! {
                        <div key={prize.label.clone()} class={styles::WHEEL_LABEL}
                             style={format!("transform: rotate({}deg)", angle)}>
                            <span class={styles::WHEEL_LABEL_TEXT}>{ &prize.label }</span>
                        </div>
                    }
                })}
            </div>
            <div class={styles::WHEEL_HUB}>
                { if props.is_spinning { "..." } else { "GO" } }
            </div>
        </div>
    }
}
