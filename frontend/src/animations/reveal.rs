//! Scroll-triggered reveal animations.
//!
//! Elements tagged with one of the `animate-*` marker classes start hidden and
//! transition into place the first time they scroll into view. Nothing here
//! touches `web_sys` directly: the document, the motion preference and the
//! intersection observer are reached through the traits below so the state
//! machine can run against fakes.

use std::fmt;
use std::time::Duration;

use log::debug;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);
pub const DEFAULT_DELAY: Duration = Duration::ZERO;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    ScaleUp,
    BounceIn,
}

impl AnimationKind {
    /// Resolution order when a node carries more than one marker class.
    pub const ALL: [AnimationKind; 6] = [
        AnimationKind::SlideUp,
        AnimationKind::SlideLeft,
        AnimationKind::SlideRight,
        AnimationKind::ScaleUp,
        AnimationKind::BounceIn,
        AnimationKind::FadeIn,
    ];

    pub fn marker_class(self) -> &'static str {
        match self {
            AnimationKind::FadeIn => "animate-fade-in",
            AnimationKind::SlideUp => "animate-slide-up",
            AnimationKind::SlideLeft => "animate-slide-left",
            AnimationKind::SlideRight => "animate-slide-right",
            AnimationKind::ScaleUp => "animate-scale-up",
            AnimationKind::BounceIn => "animate-bounce-in",
        }
    }

    /// Comma-joined selector matching every marker class.
    pub fn selector() -> String {
        Self::ALL
            .iter()
            .map(|kind| format!(".{}", kind.marker_class()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn of<N: RevealNode>(node: &N) -> Option<AnimationKind> {
        Self::ALL
            .into_iter()
            .find(|kind| node.has_class(kind.marker_class()))
    }

    pub fn initial_transform(self) -> Transform {
        match self {
            AnimationKind::FadeIn => Transform::None,
            AnimationKind::SlideUp => Transform::TranslateY(30.0),
            AnimationKind::SlideLeft => Transform::TranslateX(-30.0),
            AnimationKind::SlideRight => Transform::TranslateX(30.0),
            AnimationKind::ScaleUp => Transform::Scale(0.9),
            AnimationKind::BounceIn => Transform::Scale(0.8),
        }
    }

    pub fn easing(self) -> Easing {
        match self {
            AnimationKind::BounceIn => Easing::Bounce,
            _ => Easing::EaseOut,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    None,
    TranslateX(f64),
    TranslateY(f64),
    Scale(f64),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::None => f.write_str("none"),
            Transform::TranslateX(px) => write!(f, "translateX({}px)", px),
            Transform::TranslateY(px) => write!(f, "translateY({}px)", px),
            Transform::Scale(factor) => write!(f, "scale({})", factor),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseInOut,
    EaseOut,
    Bounce,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseInOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.2, 1)",
            Easing::Bounce => "cubic-bezier(0.68, -0.55, 0.265, 1.55)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub duration: Duration,
    pub delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            duration: DEFAULT_DURATION,
            delay: DEFAULT_DELAY,
        }
    }
}

impl Timing {
    /// Reads `data-duration` / `data-delay`, falling back per field.
    pub fn of<N: RevealNode>(node: &N) -> Timing {
        let duration = node
            .data("duration")
            .and_then(|raw| parse_css_time(&raw))
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_DURATION);
        let delay = node
            .data("delay")
            .and_then(|raw| parse_css_time(&raw))
            .unwrap_or(DEFAULT_DELAY);
        Timing { duration, delay }
    }

    pub fn transition(&self, easing: Easing) -> String {
        format!(
            "all {} {} {}",
            format_css_time(self.duration),
            easing.css(),
            format_css_time(self.delay)
        )
    }
}

/// Parses `0.6s`, `600ms` or a bare number of seconds. Negative and
/// non-finite values are rejected.
pub fn parse_css_time(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let (number, nanos_per_unit) = if let Some(ms) = raw.strip_suffix("ms") {
        (ms, 1e6)
    } else if let Some(s) = raw.strip_suffix('s') {
        (s, 1e9)
    } else {
        (raw, 1e9)
    };
    let value: f64 = number.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(Duration::from_nanos((value * nanos_per_unit).round() as u64))
}

pub fn format_css_time(duration: Duration) -> String {
    format!("{}s", duration.as_secs_f64())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unobserved,
    Observed,
    Triggered,
}

/// Observation is always rooted at the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        ObserverOptions {
            root_margin: "0px 0px -10% 0px",
            threshold: 0.1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct IntersectionEntry<N> {
    pub target: N,
    pub is_intersecting: bool,
}

pub trait RevealNode: Clone + PartialEq {
    fn has_class(&self, class: &str) -> bool;
    /// Value of the `data-{key}` attribute.
    fn data(&self, key: &str) -> Option<String>;
    fn set_style(&self, property: &str, value: &str);
}

pub trait RevealHost {
    type Node: RevealNode;

    fn prefers_reduced_motion(&self) -> bool;
    /// Snapshot of matching nodes in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
}

pub trait VisibilityObserver<N> {
    fn observe(&self, node: &N);
    fn unobserve(&self, node: &N);
}

#[derive(Clone, Debug)]
pub struct AnimatedElement<N> {
    node: N,
    kind: AnimationKind,
    timing: Timing,
    state: RevealState,
}

impl<N: RevealNode> AnimatedElement<N> {
    fn new(node: N) -> Option<Self> {
        let kind = AnimationKind::of(&node)?;
        let timing = Timing::of(&node);
        Some(AnimatedElement {
            node,
            kind,
            timing,
            state: RevealState::Unobserved,
        })
    }

    fn hide(&self) {
        self.node.set_style("opacity", "0");
        self.node
            .set_style("transform", &self.kind.initial_transform().to_string());
    }

    fn reveal(&mut self) {
        self.state = RevealState::Triggered;
        self.node
            .set_style("transition", &self.timing.transition(self.kind.easing()));
        self.node.set_style("opacity", "1");
        self.node.set_style("transform", "none");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Reduced motion was requested at startup.
    Inert,
    /// No intersection observer could be created.
    Unsupported,
    Running,
}

#[derive(Debug)]
pub struct RevealController<N> {
    phase: Phase,
    elements: Vec<AnimatedElement<N>>,
}

impl<N: RevealNode> Default for RevealController<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: RevealNode> RevealController<N> {
    pub fn new() -> Self {
        RevealController {
            phase: Phase::Idle,
            elements: Vec::new(),
        }
    }

    /// Runs discovery once. The observer factory is only invoked after the
    /// reduced-motion gate has passed, and no inline style is written unless
    /// it returned an observer.
    pub fn start<H, O, F>(&mut self, host: &H, make_observer: F) -> Option<O>
    where
        H: RevealHost<Node = N>,
        O: VisibilityObserver<N>,
        F: FnOnce(&ObserverOptions) -> Option<O>,
    {
        if self.phase != Phase::Idle {
            return None;
        }
        if host.prefers_reduced_motion() {
            debug!("reduced motion requested, scroll reveal disabled");
            self.phase = Phase::Inert;
            return None;
        }
        let Some(observer) = make_observer(&ObserverOptions::default()) else {
            debug!("no intersection observer, scroll reveal disabled");
            self.phase = Phase::Unsupported;
            return None;
        };

        for node in host.query_all(&AnimationKind::selector()) {
            if self.elements.iter().any(|e| e.node == node) {
                continue;
            }
            let Some(mut element) = AnimatedElement::new(node) else {
                continue;
            };
            element.hide();
            observer.observe(&element.node);
            element.state = RevealState::Observed;
            self.elements.push(element);
        }
        self.phase = Phase::Running;
        debug!("scroll reveal watching {} elements", self.elements.len());
        Some(observer)
    }

    /// Applies one observer callback batch, returning how many elements were
    /// revealed by it.
    pub fn handle_entries<O, I>(&mut self, entries: I, observer: &O) -> usize
    where
        O: VisibilityObserver<N>,
        I: IntoIterator<Item = IntersectionEntry<N>>,
    {
        if self.phase != Phase::Running {
            return 0;
        }
        let mut revealed = 0;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(element) = self
                .elements
                .iter_mut()
                .find(|e| e.node == entry.target && e.state == RevealState::Observed)
            else {
                continue;
            };
            element.reveal();
            observer.unobserve(&element.node);
            revealed += 1;
        }
        if revealed > 0 {
            debug!("revealed {} elements, {} pending", revealed, self.pending());
        }
        revealed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of elements registered at discovery.
    pub fn watched(&self) -> usize {
        self.elements.len()
    }

    pub fn pending(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| e.state == RevealState::Observed)
            .count()
    }

    #[cfg(test)]
    pub fn state_of(&self, node: &N) -> RevealState {
        self.elements
            .iter()
            .find(|e| &e.node == node)
            .map(|e| e.state)
            .unwrap_or(RevealState::Unobserved)
    }
}
