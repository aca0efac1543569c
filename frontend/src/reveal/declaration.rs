//! Declarative description of one scroll-linked visual effect.
//!
//! A declaration says *what* can animate: which elements, between which
//! visual states, on which trigger and with which timing. The engine owns
//! *what currently is* animating.

/// The animatable visual properties of one element.
///
/// The identity state (no offset, fully opaque, unscaled, fully revealed)
/// is what the page looks like with no animation applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    /// Vertical offset as a percentage of the element's own height.
    pub y_percent: f64,
    pub opacity: f64,
    pub scale: f64,
    /// Visible fraction of the element's width, revealed left to right.
    pub reveal: f64,
}

impl VisualState {
    pub const IDENTITY: VisualState = VisualState {
        x: 0.0,
        y: 0.0,
        y_percent: 0.0,
        opacity: 1.0,
        scale: 1.0,
        reveal: 1.0,
    };

    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn y_percent(mut self, y_percent: f64) -> Self {
        self.y_percent = y_percent;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn reveal(mut self, reveal: f64) -> Self {
        self.reveal = reveal;
        self
    }

    /// Interpolates towards `to`. The endpoints are returned exactly, so a
    /// reversed interpolation lands on the original values bit for bit.
    /// `t` outside 0..1 extrapolates (overshooting easings rely on it).
    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        if t == 0.0 {
            return *self;
        }
        if t == 1.0 {
            return *to;
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            y_percent: mix(self.y_percent, to.y_percent),
            opacity: mix(self.opacity, to.opacity),
            scale: mix(self.scale, to.scale),
            reveal: mix(self.reveal, to.reveal),
        }
    }

    /// Inline CSS properties for this state.
    pub fn css_properties(&self) -> [(&'static str, String); 3] {
        let transform = format!(
            "translate3d({}px, calc({}px + {}%), 0) scale({})",
            self.x, self.y, self.y_percent, self.scale
        );
        // A full-size polygon would still clip shadows, so drop it entirely.
        let clip = if self.reveal >= 1.0 {
            "none".to_string()
        } else {
            let edge = (self.reveal * 100.0).clamp(0.0, 100.0);
            format!("polygon(0 0, {edge}% 0, {edge}% 100%, 0 100%)")
        };
        [
            ("transform", transform),
            ("opacity", self.opacity.clamp(0.0, 1.0).to_string()),
            ("clip-path", clip),
        ]
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Before/after values an effect interpolates between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyDelta {
    pub from: VisualState,
    pub to: VisualState,
}

impl PropertyDelta {
    pub fn between(from: VisualState, to: VisualState) -> Self {
        Self { from, to }
    }

    /// Animate from `state` into the element's natural look.
    pub fn from_state(state: VisualState) -> Self {
        Self::between(state, VisualState::IDENTITY)
    }

    /// Animate from the element's natural look into `state`.
    pub fn to_state(state: VisualState) -> Self {
        Self::between(VisualState::IDENTITY, state)
    }

    pub fn at(&self, progress: f64, easing: Easing) -> VisualState {
        self.from.lerp(&self.to, easing.apply(progress))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    Power2Out,
    Power3Out,
    Power4InOut,
    /// Overshoots by the given amount before settling.
    BackOut(f64),
}

impl Easing {
    /// Maps linear progress to eased progress. Always 0 at 0 and 1 at 1.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::Power4InOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }
            Easing::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}

/// Which element's position decides whether a trigger is satisfied.
#[derive(Clone, Debug, PartialEq)]
pub enum Anchor {
    /// Every target triggers on its own position.
    EachTarget,
    /// All targets share one trigger on the first element matching this selector.
    Selector(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Trigger {
    /// Satisfied on the first evaluation after registration.
    Immediate,
    /// Satisfied while the anchor's top edge sits at or above
    /// `viewport_fraction` of the viewport height.
    Enter { anchor: Anchor, viewport_fraction: f64 },
    /// Progress follows scroll position continuously: 0 when the anchor's
    /// top reaches the `viewport_fraction` line, 1 when its bottom does.
    Scrub { anchor: Anchor, viewport_fraction: f64 },
}

impl Trigger {
    pub fn enter(viewport_fraction: f64) -> Self {
        Trigger::Enter { anchor: Anchor::EachTarget, viewport_fraction }
    }

    pub fn enter_on(selector: &str, viewport_fraction: f64) -> Self {
        Trigger::Enter {
            anchor: Anchor::Selector(selector.to_string()),
            viewport_fraction,
        }
    }

    pub fn scrub_on(selector: &str, viewport_fraction: f64) -> Self {
        Trigger::Scrub {
            anchor: Anchor::Selector(selector.to_string()),
            viewport_fraction,
        }
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        match self {
            Trigger::Immediate => None,
            Trigger::Enter { anchor, .. } | Trigger::Scrub { anchor, .. } => Some(anchor),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replay {
    /// Plays forward once and stays completed.
    Once,
    /// Plays forward when the trigger is satisfied, backwards when it no
    /// longer is.
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// Extra delay per target index within the group.
    pub stagger_ms: f64,
    /// Stagger index wraps after this many targets (one row of a grid).
    pub stagger_cycle: Option<usize>,
    pub easing: Easing,
}

impl Timing {
    pub fn start_offset(&self, index: usize) -> f64 {
        let slot = match self.stagger_cycle {
            Some(cycle) if cycle > 0 => index % cycle,
            _ => index,
        };
        self.delay_ms + slot as f64 * self.stagger_ms
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            stagger_cycle: None,
            easing: Easing::Power3Out,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDeclaration {
    pub name: String,
    pub target_selector: String,
    pub delta: PropertyDelta,
    pub trigger: Trigger,
    pub replay: Replay,
    pub timing: Timing,
}

impl AnimationDeclaration {
    pub fn new(name: &str, target_selector: &str, delta: PropertyDelta) -> Self {
        Self {
            name: name.to_string(),
            target_selector: target_selector.to_string(),
            delta,
            trigger: Trigger::Immediate,
            replay: Replay::Once,
            timing: Timing::default(),
        }
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn replay(mut self, replay: Replay) -> Self {
        self.replay = replay;
        self
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.timing.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.timing.delay_ms = ms;
        self
    }

    pub fn stagger(mut self, ms: f64) -> Self {
        self.timing.stagger_ms = ms;
        self
    }

    pub fn stagger_cycle(mut self, cycle: usize) -> Self {
        self.timing.stagger_cycle = Some(cycle);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.timing.easing = easing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_pin_their_endpoints() {
        let all = [
            Easing::Linear,
            Easing::Power2Out,
            Easing::Power3Out,
            Easing::Power4InOut,
            Easing::BackOut(1.7),
        ];
        for easing in all {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.apply(-0.5), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.5), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn lerp_returns_exact_endpoints() {
        let from = VisualState::IDENTITY.y(60.0).opacity(0.0).scale(0.9);
        let to = VisualState::IDENTITY;
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);

        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.y, 30.0);
        assert_eq!(mid.opacity, 0.5);
    }

    #[test]
    fn stagger_offsets_wrap_per_cycle() {
        let timing = Timing {
            delay_ms: 50.0,
            stagger_ms: 100.0,
            stagger_cycle: Some(3),
            ..Timing::default()
        };
        let offsets: Vec<f64> = (0..5).map(|i| timing.start_offset(i)).collect();
        assert_eq!(offsets, vec![50.0, 150.0, 250.0, 50.0, 150.0]);
    }

    #[test]
    fn css_properties_render_clip_reveal() {
        let hidden = VisualState::IDENTITY.reveal(0.0);
        let props = hidden.css_properties();
        assert_eq!(props[2].1, "polygon(0 0, 0% 0, 0% 100%, 0 100%)");
        assert_eq!(props[1].1, "1");
        assert_eq!(VisualState::IDENTITY.css_properties()[2].1, "none");
    }
}
