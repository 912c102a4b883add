use crate::animations::motion::prefers_reduced_motion;
use crate::dom;

/// Hero parts and the delay in seconds before each fades up.
pub const HERO_STAGGER: [(&str, f64); 3] = [
    (".hero-headline", 0.2),
    (".hero-subheadline", 0.4),
    (".hero-cta", 0.6),
];

pub fn entrance_animation(delay_secs: f64) -> String {
    format!("fadeInUp 0.8s ease-out {}s both", delay_secs)
}

pub fn play_hero_entrance() {
    if prefers_reduced_motion() {
        return;
    }
    for (selector, delay) in HERO_STAGGER {
        if let Some(element) = dom::query(selector) {
            dom::set_style(&element, "animation", &entrance_animation(delay));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_is_staggered() {
        let animations: Vec<String> = HERO_STAGGER
            .iter()
            .map(|(_, delay)| entrance_animation(*delay))
            .collect();
        assert_eq!(
            animations,
            vec![
                "fadeInUp 0.8s ease-out 0.2s both",
                "fadeInUp 0.8s ease-out 0.4s both",
                "fadeInUp 0.8s ease-out 0.6s both",
            ]
        );
    }
}
