//! Registration table of scroll-linked animations.
//!
//! The engine never touches the DOM. It pulls geometry from a [`Viewport`],
//! decides which bindings cross their trigger thresholds in [`RevealEngine::on_scroll`],
//! and hands back per-element visual states from [`RevealEngine::tick`] for
//! the caller to paint.

use log::debug;
use thiserror::Error;

use super::declaration::{AnimationDeclaration, Anchor, Replay, Trigger, VisualState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("no element matches `{0}`")]
    TargetNotFound(String),
}

/// Position of an element relative to the top of the viewport, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

/// Pull-based source of viewport geometry.
pub trait Viewport {
    type Element: Clone + PartialEq;

    fn height(&self) -> f64;
    fn query(&self, selector: &str) -> Vec<Self::Element>;
    fn bounds(&self, element: &Self::Element) -> Option<Bounds>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingHandle(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Playing,
    Completed,
    Reversing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CueAction {
    /// Forward playback begins at `starts_at_ms` (stagger and delay included).
    Play { starts_at_ms: f64 },
    Reverse,
    /// Scrubbed effects jump straight to a progress value.
    Seek { progress: f64 },
}

/// A playback transition emitted by one scroll evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Cue<E> {
    pub handle: BindingHandle,
    pub element: E,
    pub action: CueAction,
}

/// The visual state one element should show right now.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<E> {
    pub element: E,
    pub state: VisualState,
}

struct Track<E> {
    element: E,
    state: PlayState,
    progress: f64,
    segment_progress: f64,
    segment_start_ms: f64,
    offset_ms: f64,
    duration_ms: f64,
    scrubbed: bool,
    dirty: bool,
}

impl<E> Track<E> {
    fn progress_at(&self, now_ms: f64) -> f64 {
        if now_ms < self.segment_start_ms {
            return self.segment_progress;
        }
        let step = if self.duration_ms > 0.0 {
            (now_ms - self.segment_start_ms) / self.duration_ms
        } else {
            f64::INFINITY
        };
        match self.state {
            PlayState::Playing => (self.segment_progress + step).min(1.0),
            PlayState::Reversing => (self.segment_progress - step).max(0.0),
            PlayState::Idle | PlayState::Completed => self.progress,
        }
    }

    fn begin_segment(&mut self, state: PlayState, start_ms: f64) {
        self.segment_progress = self.progress;
        self.segment_start_ms = start_ms;
        self.state = state;
    }

    fn play(&mut self, now_ms: f64) -> bool {
        match self.state {
            PlayState::Idle => {
                self.begin_segment(PlayState::Playing, now_ms + self.offset_ms);
                true
            }
            PlayState::Reversing => {
                self.progress = self.progress_at(now_ms);
                // Back at rest: wait out the stagger like a fresh start.
                // Otherwise turn around mid-flight without the delay.
                let start_ms = if self.progress <= 0.0 {
                    now_ms + self.offset_ms
                } else {
                    now_ms
                };
                self.begin_segment(PlayState::Playing, start_ms);
                true
            }
            PlayState::Playing | PlayState::Completed => false,
        }
    }

    fn reverse(&mut self, now_ms: f64) -> bool {
        match self.state {
            PlayState::Playing if now_ms < self.segment_start_ms && self.segment_progress <= 0.0 => {
                // Still waiting out its delay, nothing has moved yet.
                self.progress = 0.0;
                self.state = PlayState::Idle;
                false
            }
            PlayState::Playing | PlayState::Completed => {
                self.progress = self.progress_at(now_ms);
                self.begin_segment(PlayState::Reversing, now_ms);
                true
            }
            PlayState::Idle | PlayState::Reversing => false,
        }
    }

    fn seek(&mut self, progress: f64) {
        self.progress = progress;
        self.state = if progress <= 0.0 {
            PlayState::Idle
        } else if progress >= 1.0 {
            PlayState::Completed
        } else {
            PlayState::Playing
        };
        self.dirty = true;
    }

    fn in_flight(&self) -> bool {
        !self.scrubbed && matches!(self.state, PlayState::Playing | PlayState::Reversing)
    }
}

/// One trigger evaluation point. Shared anchors gate a whole group.
struct Gate<E> {
    anchor: Option<E>,
    tracks: Vec<usize>,
    satisfied: Option<bool>,
}

struct Binding<E> {
    handle: BindingHandle,
    declaration: AnimationDeclaration,
    tracks: Vec<Track<E>>,
    gates: Vec<Gate<E>>,
}

impl<E: Clone + PartialEq> Binding<E> {
    fn evaluate<V>(&mut self, viewport: &V, now_ms: f64, cues: &mut Vec<Cue<E>>)
    where
        V: Viewport<Element = E>,
    {
        let height = viewport.height();
        let Binding { handle, declaration, tracks, gates } = self;

        for gate in gates.iter_mut() {
            let satisfied = match &declaration.trigger {
                Trigger::Immediate => true,
                Trigger::Enter { viewport_fraction, .. } => {
                    let Some(bounds) = gate.anchor.as_ref().and_then(|a| viewport.bounds(a)) else {
                        continue;
                    };
                    bounds.top <= height * viewport_fraction
                }
                Trigger::Scrub { viewport_fraction, .. } => {
                    let Some(bounds) = gate.anchor.as_ref().and_then(|a| viewport.bounds(a)) else {
                        continue;
                    };
                    let progress = scrub_progress(bounds, height * viewport_fraction);
                    for &index in &gate.tracks {
                        let track = &mut tracks[index];
                        if track.progress != progress {
                            track.seek(progress);
                            cues.push(Cue {
                                handle: *handle,
                                element: track.element.clone(),
                                action: CueAction::Seek { progress },
                            });
                        }
                    }
                    continue;
                }
            };

            if gate.satisfied == Some(satisfied) {
                continue;
            }
            gate.satisfied = Some(satisfied);

            for &index in &gate.tracks {
                let track = &mut tracks[index];
                let action = if satisfied {
                    track
                        .play(now_ms)
                        .then_some(CueAction::Play { starts_at_ms: track.segment_start_ms })
                } else if declaration.replay == Replay::Reverse {
                    track.reverse(now_ms).then_some(CueAction::Reverse)
                } else {
                    None
                };
                if let Some(action) = action {
                    cues.push(Cue {
                        handle: *handle,
                        element: track.element.clone(),
                        action,
                    });
                }
            }
        }
    }

    fn advance(&mut self, now_ms: f64, frames: &mut Vec<Frame<E>>) {
        let delta = self.declaration.delta;
        let easing = self.declaration.timing.easing;

        for track in &mut self.tracks {
            if track.in_flight() {
                if now_ms < track.segment_start_ms && !track.dirty {
                    continue;
                }
                let progress = track.progress_at(now_ms);
                track.progress = progress;
                if track.state == PlayState::Playing && progress >= 1.0 {
                    track.state = PlayState::Completed;
                } else if track.state == PlayState::Reversing && progress <= 0.0 {
                    track.state = PlayState::Idle;
                }
            } else if !track.dirty {
                continue;
            }
            track.dirty = false;
            frames.push(Frame {
                element: track.element.clone(),
                state: delta.at(track.progress, easing),
            });
        }
    }
}

fn scrub_progress(bounds: Bounds, line: f64) -> f64 {
    if bounds.height <= 0.0 {
        return if bounds.top <= line { 1.0 } else { 0.0 };
    }
    ((line - bounds.top) / bounds.height).clamp(0.0, 1.0)
}

pub struct RevealEngine<E> {
    bindings: Vec<Binding<E>>,
    next_handle: u64,
}

impl<E: Clone + PartialEq> RevealEngine<E> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            next_handle: 0,
        }
    }

    /// Resolves the declaration's targets and adds one binding for them.
    ///
    /// Fails when the target selector, or a shared trigger anchor, matches
    /// nothing. A failed registration leaves existing bindings untouched.
    pub fn register<V>(
        &mut self,
        declaration: AnimationDeclaration,
        viewport: &V,
    ) -> Result<BindingHandle, RevealError>
    where
        V: Viewport<Element = E>,
    {
        let targets = viewport.query(&declaration.target_selector);
        if targets.is_empty() {
            return Err(RevealError::TargetNotFound(declaration.target_selector));
        }

        let all: Vec<usize> = (0..targets.len()).collect();
        let gates = match declaration.trigger.anchor() {
            None => vec![Gate { anchor: None, tracks: all, satisfied: None }],
            Some(Anchor::EachTarget) => targets
                .iter()
                .enumerate()
                .map(|(index, element)| Gate {
                    anchor: Some(element.clone()),
                    tracks: vec![index],
                    satisfied: None,
                })
                .collect(),
            Some(Anchor::Selector(selector)) => {
                let anchor = viewport
                    .query(selector)
                    .into_iter()
                    .next()
                    .ok_or_else(|| RevealError::TargetNotFound(selector.clone()))?;
                vec![Gate { anchor: Some(anchor), tracks: all, satisfied: None }]
            }
        };

        let timing = declaration.timing;
        let scrubbed = matches!(declaration.trigger, Trigger::Scrub { .. });
        let tracks = targets
            .into_iter()
            .enumerate()
            .map(|(index, element)| Track {
                element,
                state: PlayState::Idle,
                progress: 0.0,
                segment_progress: 0.0,
                segment_start_ms: 0.0,
                offset_ms: timing.start_offset(index),
                duration_ms: timing.duration_ms,
                scrubbed,
                // First tick paints the pre-animation state.
                dirty: true,
            })
            .collect::<Vec<_>>();

        let handle = BindingHandle(self.next_handle);
        self.next_handle += 1;
        debug!(
            "Registered reveal `{}` on {} element(s)",
            declaration.name,
            tracks.len()
        );
        self.bindings.push(Binding {
            handle,
            declaration,
            tracks,
            gates,
        });
        Ok(handle)
    }

    /// Evaluates every trigger against the current viewport. Only threshold
    /// crossings and scrub movement produce cues, so repeating the same
    /// viewport state is a no-op.
    pub fn on_scroll<V>(&mut self, viewport: &V, now_ms: f64) -> Vec<Cue<E>>
    where
        V: Viewport<Element = E>,
    {
        let mut cues = Vec::new();
        for binding in &mut self.bindings {
            binding.evaluate(viewport, now_ms, &mut cues);
        }
        cues
    }

    /// Advances in-flight interpolations and returns the elements whose
    /// visual state changed since the last tick.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Frame<E>> {
        let mut frames = Vec::new();
        for binding in &mut self.bindings {
            binding.advance(now_ms, &mut frames);
        }
        frames
    }

    /// Drops the binding and any interpolation it had in flight. Returns the
    /// elements it animated so the caller can restore their styles.
    pub fn teardown(&mut self, handle: BindingHandle) -> Vec<E> {
        match self.bindings.iter().position(|b| b.handle == handle) {
            Some(position) => self
                .bindings
                .remove(position)
                .tracks
                .into_iter()
                .map(|track| track.element)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.bindings
            .iter()
            .flat_map(|b| b.tracks.iter())
            .any(|t| t.dirty || t.in_flight())
    }

    #[cfg(test)]
    pub fn play_states(&self, handle: BindingHandle) -> Option<Vec<PlayState>> {
        self.bindings
            .iter()
            .find(|b| b.handle == handle)
            .map(|b| b.tracks.iter().map(|t| t.state).collect())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<E: Clone + PartialEq> Default for RevealEngine<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::reveal::declaration::{Easing, PropertyDelta};

    #[derive(Default)]
    struct FakeViewport {
        height: f64,
        selectors: HashMap<&'static str, Vec<usize>>,
        bounds: HashMap<usize, Bounds>,
    }

    impl FakeViewport {
        fn new(height: f64) -> Self {
            Self { height, ..Default::default() }
        }

        fn place(&mut self, selector: &'static str, id: usize, top: f64) {
            self.selectors.entry(selector).or_default().push(id);
            self.bounds.insert(id, Bounds { top, height: 200.0 });
        }

        fn scroll_to(&mut self, id: usize, top: f64) {
            if let Some(bounds) = self.bounds.get_mut(&id) {
                bounds.top = top;
            }
        }
    }

    impl Viewport for FakeViewport {
        type Element = usize;

        fn height(&self) -> f64 {
            self.height
        }

        fn query(&self, selector: &str) -> Vec<usize> {
            self.selectors.get(selector).cloned().unwrap_or_default()
        }

        fn bounds(&self, element: &usize) -> Option<Bounds> {
            self.bounds.get(element).copied()
        }
    }

    fn slide_up(selector: &str) -> AnimationDeclaration {
        AnimationDeclaration::new(
            "slide-up",
            selector,
            PropertyDelta::from_state(VisualState::IDENTITY.y(50.0).opacity(0.0)),
        )
        .trigger(Trigger::enter(0.85))
        .replay(Replay::Reverse)
        .duration(800.0)
        .easing(Easing::BackOut(1.2))
    }

    fn state_of(frames: &[Frame<usize>], element: usize) -> Option<VisualState> {
        frames.iter().rev().find(|f| f.element == element).map(|f| f.state)
    }

    #[test]
    fn first_tick_paints_the_from_state() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place(".card", 1, 1200.0);
        let mut engine = RevealEngine::new();
        let declaration = slide_up(".card");
        let from = declaration.delta.from;
        engine.register(declaration, &viewport).unwrap();

        let frames = engine.tick(0.0);
        assert_eq!(state_of(&frames, 1), Some(from));
        assert!(engine.tick(16.0).is_empty());
    }

    #[test]
    fn repeated_viewport_state_is_a_no_op() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place(".card", 1, 1200.0);
        viewport.place(".card", 2, 600.0);
        let mut engine = RevealEngine::new();
        let handle = engine.register(slide_up(".card"), &viewport).unwrap();

        let first = engine.on_scroll(&viewport, 0.0);
        assert_eq!(first.len(), 1);
        let states = engine.play_states(handle);

        assert!(engine.on_scroll(&viewport, 0.0).is_empty());
        assert!(engine.on_scroll(&viewport, 5.0).is_empty());
        assert_eq!(engine.play_states(handle), states);

        viewport.scroll_to(1, 1100.0);
        assert!(engine.on_scroll(&viewport, 10.0).is_empty());
    }

    #[test]
    fn scrolling_back_restores_exact_pre_trigger_values() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place(".card", 1, 1200.0);
        let mut engine = RevealEngine::new();
        let declaration = slide_up(".card");
        let delta = declaration.delta;
        let handle = engine.register(declaration, &viewport).unwrap();
        engine.tick(0.0);

        viewport.scroll_to(1, 500.0);
        let cues = engine.on_scroll(&viewport, 100.0);
        assert_eq!(cues[0].action, CueAction::Play { starts_at_ms: 100.0 });
        let frames = engine.tick(1000.0);
        assert_eq!(state_of(&frames, 1), Some(delta.to));
        assert_eq!(engine.play_states(handle), Some(vec![PlayState::Completed]));

        viewport.scroll_to(1, 900.0);
        let cues = engine.on_scroll(&viewport, 2000.0);
        assert_eq!(cues[0].action, CueAction::Reverse);
        assert_eq!(engine.play_states(handle), Some(vec![PlayState::Reversing]));

        let frames = engine.tick(3000.0);
        assert_eq!(state_of(&frames, 1), Some(delta.from));
        assert_eq!(engine.play_states(handle), Some(vec![PlayState::Idle]));
    }

    #[test]
    fn reversing_mid_flight_still_lands_on_from() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place(".card", 1, 500.0);
        let mut engine = RevealEngine::new();
        let declaration = slide_up(".card");
        let delta = declaration.delta;
        engine.register(declaration, &viewport).unwrap();

        engine.on_scroll(&viewport, 0.0);
        let halfway = engine.tick(400.0);
        let mid = state_of(&halfway, 1).unwrap();
        assert_ne!(mid, delta.from);
        assert_ne!(mid, delta.to);

        viewport.scroll_to(1, 950.0);
        engine.on_scroll(&viewport, 400.0);
        engine.tick(600.0);
        let frames = engine.tick(900.0);
        assert_eq!(state_of(&frames, 1), Some(delta.from));
        assert!(!engine.is_animating());
    }

    #[test]
    fn single_shot_does_not_reverse() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place(".about-img", 1, 500.0);
        let mut engine = RevealEngine::new();
        let handle = engine
            .register(slide_up(".about-img").replay(Replay::Once), &viewport)
            .unwrap();

        engine.on_scroll(&viewport, 0.0);
        engine.tick(1000.0);
        viewport.scroll_to(1, 1500.0);
        assert!(engine.on_scroll(&viewport, 1100.0).is_empty());
        assert_eq!(engine.play_states(handle), Some(vec![PlayState::Completed]));
    }

    #[test]
    fn shared_trigger_staggers_siblings_independently() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place(".hero-content", 10, 100.0);
        for id in 0..3 {
            viewport.place(".hero-content > *", id, 1400.0);
        }
        let mut engine = RevealEngine::new();
        let declaration = slide_up(".hero-content > *")
            .trigger(Trigger::enter_on(".hero-content", 0.8))
            .duration(100.0)
            .stagger(100.0)
            .easing(Easing::Linear);
        let handle = engine.register(declaration, &viewport).unwrap();

        let starts: Vec<CueAction> = engine
            .on_scroll(&viewport, 0.0)
            .into_iter()
            .map(|cue| cue.action)
            .collect();
        assert_eq!(
            starts,
            vec![
                CueAction::Play { starts_at_ms: 0.0 },
                CueAction::Play { starts_at_ms: 100.0 },
                CueAction::Play { starts_at_ms: 200.0 },
            ]
        );

        engine.tick(250.0);
        assert_eq!(
            engine.play_states(handle),
            Some(vec![PlayState::Completed, PlayState::Completed, PlayState::Playing])
        );
    }

    #[test]
    fn immediate_trigger_fires_once_with_delay_and_stagger() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place(".hero-content > *", 1, 1400.0);
        viewport.place(".hero-content > *", 2, 1600.0);
        let mut engine = RevealEngine::new();
        let declaration = slide_up(".hero-content > *")
            .trigger(Trigger::Immediate)
            .delay(200.0)
            .stagger(100.0);
        engine.register(declaration, &viewport).unwrap();

        let starts: Vec<CueAction> = engine
            .on_scroll(&viewport, 0.0)
            .into_iter()
            .map(|cue| cue.action)
            .collect();
        assert_eq!(
            starts,
            vec![
                CueAction::Play { starts_at_ms: 200.0 },
                CueAction::Play { starts_at_ms: 300.0 },
            ]
        );
        assert!(engine.on_scroll(&viewport, 50.0).is_empty());
    }

    #[test]
    fn quick_reverse_and_replay_keeps_the_stagger() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place("#services .section-header", 10, 100.0);
        for id in 0..3 {
            viewport.place("#services .section-header > *", id, 1400.0);
        }
        let mut engine = RevealEngine::new();
        let declaration = slide_up("#services .section-header > *")
            .trigger(Trigger::enter_on("#services .section-header", 0.8))
            .duration(100.0)
            .stagger(100.0)
            .easing(Easing::Linear);
        let handle = engine.register(declaration, &viewport).unwrap();

        engine.on_scroll(&viewport, 0.0);
        viewport.scroll_to(10, 900.0);
        engine.on_scroll(&viewport, 10.0);
        assert_eq!(
            engine.play_states(handle),
            Some(vec![PlayState::Reversing, PlayState::Idle, PlayState::Idle])
        );

        viewport.scroll_to(10, 100.0);
        let starts: Vec<CueAction> = engine
            .on_scroll(&viewport, 20.0)
            .into_iter()
            .map(|cue| cue.action)
            .collect();
        assert_eq!(
            starts,
            vec![
                CueAction::Play { starts_at_ms: 20.0 },
                CueAction::Play { starts_at_ms: 120.0 },
                CueAction::Play { starts_at_ms: 220.0 },
            ]
        );
    }

    #[test]
    fn missing_target_fails_without_disturbing_others() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place(".card", 1, 1200.0);
        let mut engine = RevealEngine::new();
        let existing = engine.register(slide_up(".card"), &viewport).unwrap();

        assert_eq!(
            engine.register(slide_up(".missing"), &viewport),
            Err(RevealError::TargetNotFound(".missing".to_string()))
        );
        assert_eq!(
            engine.register(
                slide_up(".card").trigger(Trigger::enter_on("#nowhere", 0.5)),
                &viewport
            ),
            Err(RevealError::TargetNotFound("#nowhere".to_string()))
        );
        assert_eq!(engine.len(), 1);

        viewport.scroll_to(1, 300.0);
        let cues = engine.on_scroll(&viewport, 0.0);
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].handle, existing);
    }

    #[test]
    fn scrub_follows_scroll_position() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place("#home", 1, 0.0);
        viewport.place(".hero-bg-img", 2, 0.0);
        let mut engine = RevealEngine::new();
        let declaration = AnimationDeclaration::new(
            "hero-parallax",
            ".hero-bg-img",
            PropertyDelta::to_state(VisualState::IDENTITY.y_percent(30.0)),
        )
        .trigger(Trigger::scrub_on("#home", 0.0))
        .easing(Easing::Linear);
        engine.register(declaration, &viewport).unwrap();
        engine.tick(0.0);

        assert!(engine.on_scroll(&viewport, 0.0).is_empty());

        viewport.scroll_to(1, -100.0);
        let cues = engine.on_scroll(&viewport, 10.0);
        assert_eq!(cues[0].action, CueAction::Seek { progress: 0.5 });
        let frames = engine.tick(10.0);
        assert_eq!(state_of(&frames, 2).map(|s| s.y_percent), Some(15.0));

        assert!(engine.on_scroll(&viewport, 20.0).is_empty());
        assert!(engine.tick(20.0).is_empty());
    }

    #[test]
    fn teardown_cancels_in_flight_work() {
        let mut viewport = FakeViewport::new(1000.0);
        viewport.place(".card", 1, 500.0);
        viewport.place(".card", 2, 500.0);
        let mut engine = RevealEngine::new();
        let handle = engine.register(slide_up(".card"), &viewport).unwrap();
        engine.on_scroll(&viewport, 0.0);
        engine.tick(100.0);
        assert!(engine.is_animating());

        assert_eq!(engine.teardown(handle), vec![1, 2]);
        assert!(!engine.is_animating());
        assert!(engine.tick(200.0).is_empty());
        assert!(engine.teardown(handle).is_empty());
        assert!(engine.is_empty());
    }
}
