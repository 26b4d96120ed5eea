/// Entrance animations for [`AnimatedSection`](crate::components::animated::AnimatedSection).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealAnimation {
    #[default]
    FadeInUp,
    FadeInLeft,
    FadeInRight,
    FadeIn,
    ScaleIn,
    SlideInUp,
}

impl RevealAnimation {
    pub fn classes(self, visible: bool) -> &'static str {
        match (self, visible) {
            (RevealAnimation::FadeInUp, true) => "reveal-shown",
            (RevealAnimation::FadeInUp, false) => "reveal-hidden shift-down",
            (RevealAnimation::FadeInLeft, true) => "reveal-shown",
            (RevealAnimation::FadeInLeft, false) => "reveal-hidden shift-left",
            (RevealAnimation::FadeInRight, true) => "reveal-shown",
            (RevealAnimation::FadeInRight, false) => "reveal-hidden shift-right",
            (RevealAnimation::FadeIn, true) => "reveal-shown",
            (RevealAnimation::FadeIn, false) => "reveal-hidden",
            (RevealAnimation::ScaleIn, true) => "reveal-shown",
            (RevealAnimation::ScaleIn, false) => "reveal-hidden shrunk",
            (RevealAnimation::SlideInUp, true) => "reveal-shown",
            (RevealAnimation::SlideInUp, false) => "reveal-hidden shift-down-far",
        }
    }
}

pub fn stagger_item_classes(revealed: bool) -> &'static str {
    if revealed {
        "stagger-item reveal-shown"
    } else {
        "stagger-item reveal-hidden shift-down-near"
    }
}

/// Shared transition rules for the classes above.
pub const REVEAL_CSS: &str = r#"
.reveal { transition: opacity 1s ease-out, transform 1s ease-out; }
.stagger-item { transition: opacity 0.7s ease-out, transform 0.7s ease-out; }
.reveal-shown { opacity: 1; transform: none; }
.reveal-hidden { opacity: 0; }
.reveal-hidden.shift-down { transform: translateY(2rem); }
.reveal-hidden.shift-down-near { transform: translateY(1.5rem); }
.reveal-hidden.shift-down-far { transform: translateY(3rem); }
.reveal-hidden.shift-left { transform: translateX(-2rem); }
.reveal-hidden.shift-right { transform: translateX(2rem); }
.reveal-hidden.shrunk { transform: scale(0.95); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RevealAnimation; 6] = [
        RevealAnimation::FadeInUp,
        RevealAnimation::FadeInLeft,
        RevealAnimation::FadeInRight,
        RevealAnimation::FadeIn,
        RevealAnimation::ScaleIn,
        RevealAnimation::SlideInUp,
    ];

    #[test]
    fn visible_state_is_shared() {
        for animation in ALL {
            assert_eq!(animation.classes(true), "reveal-shown");
            assert!(animation.classes(false).starts_with("reveal-hidden"));
        }
    }

    #[test]
    fn hidden_offsets_differ_by_direction() {
        assert_ne!(
            RevealAnimation::FadeInLeft.classes(false),
            RevealAnimation::FadeInRight.classes(false)
        );
        assert_eq!(RevealAnimation::FadeIn.classes(false), "reveal-hidden");
    }

    #[test]
    fn stagger_items() {
        assert!(stagger_item_classes(true).contains("reveal-shown"));
        assert!(stagger_item_classes(false).contains("reveal-hidden"));
    }
}
