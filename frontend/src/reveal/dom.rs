use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};
use yew::prelude::*;

use super::declaration::{AnimationDeclaration, VisualState};
use super::engine::{BindingHandle, Bounds, Frame, RevealEngine, Viewport};

const FRAME_INTERVAL_MS: u32 = 16;
// Layout (fonts, images) settles a moment after mount.
const REFRESH_DELAY_MS: u32 = 500;
const PAINTED_PROPERTIES: [&str; 3] = ["transform", "opacity", "clip-path"];

pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }
}

impl Viewport for DomViewport {
    type Element = Element;

    fn height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn query(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn bounds(&self, element: &Element) -> Option<Bounds> {
        let rect = element.get_bounding_client_rect();
        Some(Bounds {
            top: rect.top(),
            height: rect.height(),
        })
    }
}

fn paint(element: &Element, state: &VisualState) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let style = element.style();
        for (property, value) in state.css_properties() {
            let _ = style.set_property(property, &value);
        }
    }
}

fn unpaint(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let style = element.style();
        for property in PAINTED_PROPERTIES {
            let _ = style.remove_property(property);
        }
    }
}

fn paint_frames(frames: Vec<Frame<Element>>) {
    for frame in frames {
        paint(&frame.element, &frame.state);
    }
}

type SharedEngine = Rc<RefCell<RevealEngine<Element>>>;

fn evaluate(engine: &SharedEngine, viewport: &DomViewport) {
    let now = viewport.now();
    let mut engine = engine.borrow_mut();
    let cues = engine.on_scroll(viewport, now);
    if !cues.is_empty() {
        debug!("{} reveal cue(s) at {:.0}ms", cues.len(), now);
    }
    paint_frames(engine.tick(now));
}

/// Live reveal engine bound to the document. Dropping it removes the
/// listeners, cancels the timers and reverts every painted inline style.
pub struct RevealMount {
    engine: SharedEngine,
    handles: Vec<BindingHandle>,
    listener: Closure<dyn FnMut()>,
    _frames: Interval,
    _refresh: Timeout,
}

impl RevealMount {
    pub fn attach(declarations: Vec<AnimationDeclaration>) -> Option<Self> {
        let viewport = Rc::new(DomViewport::new()?);
        let engine: SharedEngine = Rc::new(RefCell::new(RevealEngine::new()));

        let mut handles = Vec::new();
        {
            let mut engine = engine.borrow_mut();
            for declaration in declarations {
                let name = declaration.name.clone();
                match engine.register(declaration, viewport.as_ref()) {
                    Ok(handle) => handles.push(handle),
                    Err(e) => warn!("Skipping reveal animation `{}`: {}", name, e),
                }
            }
            if engine.is_empty() {
                warn!("No reveal animation matched the page, engine not mounted");
                return None;
            }
            info!("Reveal engine mounted with {} binding(s)", engine.len());
        }

        let listener = {
            let engine = engine.clone();
            let viewport = viewport.clone();
            Closure::wrap(Box::new(move || evaluate(&engine, &viewport)) as Box<dyn FnMut()>)
        };
        for event in ["scroll", "resize"] {
            if let Err(e) = viewport
                .window
                .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                warn!("Failed to listen for {}: {:?}", event, e);
            }
        }

        let frames = {
            let engine = engine.clone();
            let viewport = viewport.clone();
            Interval::new(FRAME_INTERVAL_MS, move || {
                let animating = engine.borrow().is_animating();
                if animating {
                    let now = viewport.now();
                    let frames = engine.borrow_mut().tick(now);
                    paint_frames(frames);
                }
            })
        };

        let refresh = {
            let engine = engine.clone();
            let viewport = viewport.clone();
            Timeout::new(REFRESH_DELAY_MS, move || evaluate(&engine, &viewport))
        };

        evaluate(&engine, &viewport);

        Some(Self {
            engine,
            handles,
            listener,
            _frames: frames,
            _refresh: refresh,
        })
    }
}

impl Drop for RevealMount {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            for event in ["scroll", "resize"] {
                let _ = window
                    .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref());
            }
        }
        let mut engine = self.engine.borrow_mut();
        for handle in self.handles.drain(..) {
            for element in engine.teardown(handle) {
                unpaint(&element);
            }
        }
    }
}

/// Mounts the given animations once the component's DOM exists and tears
/// them down on unmount.
#[hook]
pub fn use_reveal(declarations: fn() -> Vec<AnimationDeclaration>) {
    use_effect_with_deps(
        move |_| {
            let mount = RevealMount::attach(declarations());
            move || drop(mount)
        },
        (),
    );
}
