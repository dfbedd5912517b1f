use super::tracking::{
    element_bounds, use_measure_after_mount, use_spring, PointerContext, ScrollContext,
};
use crate::motion::{
    magnetic_target, scroll_progress, split_words, tilt_target, visible_fraction, word_opacity,
    RevealLatch, Vec2, CURSOR_SPRING, MAGNETIC_SPRING, SECTION_REVEAL_THRESHOLD, TILT_SPRING,
};
use crate::widgets::{CursorAppearance, CursorVariant, Theme};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MagneticProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
}

/// Pulls its content toward the pointer while hovered.
#[function_component(Magnetic)]
pub fn magnetic(props: &MagneticProps) -> Html {
    let pointer = use_context::<PointerContext>().unwrap_or_default();
    let node_ref = use_node_ref();
    let target = magnetic_target(pointer.position, element_bounds(&node_ref));
    let offset = use_spring(target, MAGNETIC_SPRING);

    let style = format!(
        "transform: translate3d({:.2}px, {:.2}px, 0);",
        offset.x, offset.y
    );

    html! {
        <div ref={node_ref} class={classes!("magnetic", props.class.clone())}>
            <div class="magnetic-inner" style={style}>
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(20.0)]
    pub depth: f64,
    #[prop_or_default]
    pub on_hover: Callback<bool>,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let pointer = use_context::<PointerContext>().unwrap_or_default();
    let node_ref = use_node_ref();
    let target = tilt_target(pointer.position, element_bounds(&node_ref)).as_vec2();
    let rotation = use_spring(target, TILT_SPRING);

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(true))
    };
    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(false))
    };

    let card_style = format!(
        "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d;",
        rotation.x, rotation.y
    );
    let content_style = format!("transform: translateZ({:.0}px);", props.depth);

    html! {
        <div ref={node_ref} class="tilt-frame" {onmouseenter} {onmouseleave}>
            <div class={classes!("tilt-card", props.class.clone())} style={card_style}>
                <div class="tilt-content" style={content_style}>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades words in one after another as the paragraph scrolls through view.
#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let scroll = use_context::<ScrollContext>().unwrap_or_default();
    let node_ref = use_node_ref();
    use_measure_after_mount();
    let progress = element_bounds(&node_ref)
        .map(|bounds| scroll_progress(bounds.top, bounds.height, scroll.viewport_height))
        .unwrap_or(0.0);

    let words = split_words(&props.text);
    let count = words.len();

    html! {
        <p ref={node_ref} class={classes!("text-reveal", props.class.clone())}>
            { for words.iter().enumerate().map(|(index, word)| {
                let opacity = format!("opacity: {:.3};", word_opacity(progress, index, count));
                html! {
                    <span class="reveal-word">
                        <span class="reveal-word-ghost" aria-hidden="true">{word.to_string()}</span>
                        <span class="reveal-word-ink" style={opacity}>{word.to_string()}</span>
                    </span>
                }
            }) }
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(SECTION_REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(Vec2 { x: 0.0, y: 50.0 })]
    pub from: Vec2,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(800)]
    pub duration_ms: u32,
}

/// One-shot fade and slide-in once enough of the block is on screen.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let scroll = use_context::<ScrollContext>().unwrap_or_default();
    let node_ref = use_node_ref();
    let latch = use_mut_ref(|| RevealLatch::new(props.threshold));
    let revealed = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with(scroll, move |scroll| {
            if let Some(bounds) = element_bounds(&node_ref) {
                let fraction = visible_fraction(bounds.top, bounds.height, scroll.viewport_height);
                if latch.borrow_mut().observe(fraction) {
                    revealed.set(true);
                }
            }
            || ()
        });
    }

    let style = if *revealed {
        format!(
            "opacity: 1; transform: none; transition: opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms;",
            duration = props.duration_ms,
            delay = props.delay_ms,
        )
    } else {
        format!(
            "opacity: 0; transform: translate3d({:.0}px, {:.0}px, 0);",
            props.from.x, props.from.y
        )
    };

    html! {
        <div ref={node_ref} id={props.id.clone()} class={props.class.clone()} style={style}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CursorProps {
    pub theme: Theme,
    pub variant: CursorVariant,
}

#[function_component(Cursor)]
pub fn cursor(props: &CursorProps) -> Html {
    let pointer = use_context::<PointerContext>().unwrap_or_default();
    let appearance = CursorAppearance::resolve(props.variant, props.theme);
    let anchor = appearance.anchor(pointer.position.unwrap_or_default());
    let position = use_spring(anchor, CURSOR_SPRING);
    let size = use_spring(Vec2::new(appearance.size, appearance.size), CURSOR_SPRING);

    let style = format!(
        "width: {:.2}px; height: {:.2}px; transform: translate3d({:.2}px, {:.2}px, 0); background-color: {}; mix-blend-mode: {};",
        size.x, size.y, position.x, position.y, appearance.color, appearance.blend_mode
    );

    html! {
        <div
            class={classes!("cursor", pointer.position.is_some().then_some("is-active"))}
            style={style}
            aria-hidden="true"
        />
    }
}
