use yew::prelude::*;

use crate::animation::parallax::translate_y;
use crate::animation::reveal::{stagger_item_classes, RevealAnimation};
use crate::animation::visibility::VisibilityOptions;
use crate::hooks::use_scroll_animation::{
    use_parallax, use_scroll_animation, use_staggered_reveal, use_typewriter,
};

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub animation: RevealAnimation,
    #[prop_or(0)]
    pub delay: u32,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let scroll = use_scroll_animation(VisibilityOptions::with_delay(props.delay));

    html! {
        <div
            ref={scroll.node_ref}
            class={classes!("reveal", props.animation.classes(scroll.is_visible), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggeredListProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(150)]
    pub stagger_delay: u32,
}

#[function_component(StaggeredList)]
pub fn staggered_list(props: &StaggeredListProps) -> Html {
    let reveal = use_staggered_reveal(props.children.len(), props.stagger_delay);

    html! {
        <div ref={reveal.node_ref.clone()} class={props.class.clone()}>
            {
                for props.children.iter().enumerate().map(|(index, child)| html! {
                    <div key={index} class={stagger_item_classes(reveal.is_revealed(index))}>
                        { child }
                    </div>
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxElementProps {
    pub children: Children,
    #[prop_or(0.3)]
    pub speed: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ParallaxElement)]
pub fn parallax_element(props: &ParallaxElementProps) -> Html {
    let parallax = use_parallax(props.speed);

    html! {
        <div ref={parallax.node_ref} class={props.class.clone()} style={translate_y(parallax.offset)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub text: AttrValue,
    #[prop_or(50)]
    pub speed: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub start_on_view: bool,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let writer = use_typewriter(props.text.to_string(), props.speed);
    let scroll = use_scroll_animation(VisibilityOptions::default());

    {
        let reset = writer.reset.clone();
        use_effect_with_deps(
            move |_| {
                reset.emit(());
                || ()
            },
            props.text.clone(),
        );
    }

    {
        let start = writer.start.clone();
        let should_start = props.start_on_view && scroll.is_visible;
        use_effect_with_deps(
            move |(should_start, _text)| {
                if *should_start {
                    start.emit(());
                }
                || ()
            },
            (should_start, props.text.clone()),
        );
    }

    html! {
        <span ref={scroll.node_ref} class={props.class.clone()}>
            { writer.text.clone() }
            if !writer.complete {
                <span class="typewriter-caret">{"|"}</span>
            }
        </span>
    }
}
