use yew::prelude::*;

/// Keyframes used by the ripple, hero and menu effects, plus the global
/// reduced-motion override that also covers anything the scripts never touch.
pub const ANIMATION_CSS: &str = r#"
    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    @keyframes slideInFromTop {
        from {
            opacity: 0;
            transform: translateY(-20px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }

    @keyframes scaleUp {
        from {
            opacity: 0;
            transform: scale(0.9);
        }
        to {
            opacity: 1;
            transform: scale(1);
        }
    }

    @keyframes bounceIn {
        0% {
            opacity: 0;
            transform: scale(0.8);
        }
        50% {
            transform: scale(1.05);
        }
        100% {
            opacity: 1;
            transform: scale(1);
        }
    }

    @media (prefers-reduced-motion: reduce) {
        *,
        *::before,
        *::after {
            animation-duration: 0.01ms !important;
            animation-iteration-count: 1 !important;
            transition-duration: 0.01ms !important;
        }
    }
"#;

#[function_component(AnimationStyles)]
pub fn animation_styles() -> Html {
    html! {
        <style>{ ANIMATION_CSS }</style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_override_present() {
        let media = ANIMATION_CSS
            .split("@media (prefers-reduced-motion: reduce)")
            .nth(1)
            .expect("reduced motion block");
        assert!(media.contains("animation-duration: 0.01ms !important"));
        assert!(media.contains("transition-duration: 0.01ms !important"));
        assert!(media.contains("animation-iteration-count: 1 !important"));
    }

    #[test]
    fn test_every_referenced_keyframe_is_defined() {
        for name in ["ripple", "fadeInUp", "slideInFromTop", "fadeIn", "scaleUp", "bounceIn"] {
            assert!(ANIMATION_CSS.contains(&format!("@keyframes {} ", name)), "{}", name);
        }
    }
}
