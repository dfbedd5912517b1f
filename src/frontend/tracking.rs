use crate::motion::{Bounds, SpringConfig, SpringVec2, Vec2};
use crate::widgets::{CursorCoordinator, CursorVariant, HoverEvent};
use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, Event};
use yew::prelude::*;

const FALLBACK_FRAME_SECONDS: f64 = 1.0 / 60.0;
const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;

/// Window event listener that is removed again on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let win = window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

struct FrameLoopState {
    request_id: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoopState {
    fn request_next(&self) {
        let callback = self.callback.borrow();
        let request_id = callback.as_ref().zip(window()).and_then(|(callback, win)| {
            win.request_animation_frame(callback.as_ref().unchecked_ref())
                .ok()
        });
        self.request_id.set(request_id);
    }
}

/// `requestAnimationFrame` loop that runs until `on_frame` returns false or
/// the handle is dropped.
pub struct AnimationFrameLoop {
    state: Rc<FrameLoopState>,
}

impl AnimationFrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let state = Rc::new(FrameLoopState {
            request_id: Cell::new(None),
            cancelled: Cell::new(false),
            callback: RefCell::new(None),
        });
        let frame_state: Weak<FrameLoopState> = Rc::downgrade(&state);

        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(state) = frame_state.upgrade() else {
                return;
            };
            state.request_id.set(None);

            if state.cancelled.get() {
                return;
            }

            if on_frame(timestamp) && !state.cancelled.get() {
                state.request_next();
            }
        });

        *state.callback.borrow_mut() = Some(callback);
        state.request_next();
        state.request_id.get().map(|_| Self { state })
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.state.cancelled.set(true);
        if let (Some(request_id), Some(win)) = (self.state.request_id.take(), window()) {
            let _ = win.cancel_animation_frame(request_id);
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn element_bounds(node_ref: &NodeRef) -> Option<Bounds> {
    let rect = node_ref.cast::<Element>()?.get_bounding_client_rect();
    Some(Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// Renders the caller once more after mount, when its node refs can be measured.
#[hook]
pub fn use_measure_after_mount() {
    let rerender = use_force_update();
    use_effect_with((), move |_| {
        rerender.force_update();
        || ()
    });
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Latest pointer position in viewport coordinates, `None` until the first move.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct PointerContext {
    pub position: Option<Vec2>,
}

#[function_component(PointerProvider)]
pub fn pointer_provider(props: &ProviderProps) -> Html {
    let pointer = use_state_eq(PointerContext::default);

    {
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::new("mousemove", move |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    pointer.set(PointerContext {
                        position: Some(Vec2::new(
                            f64::from(event.client_x()),
                            f64::from(event.client_y()),
                        )),
                    });
                }
            });
            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<PointerContext> context={*pointer}>
            {props.children.clone()}
        </ContextProvider<PointerContext>>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ScrollContext {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl Default for ScrollContext {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height: FALLBACK_VIEWPORT_HEIGHT,
        }
    }
}

fn sample_scroll() -> ScrollContext {
    let Some(win) = window() else {
        return ScrollContext::default();
    };

    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);

    ScrollContext {
        scroll_y,
        viewport_height,
    }
}

#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ProviderProps) -> Html {
    let scroll = use_state_eq(ScrollContext::default);

    {
        let scroll = scroll.clone();
        use_effect_with((), move |_| {
            scroll.set(sample_scroll());

            let on_scroll = {
                let scroll = scroll.clone();
                WindowListener::new("scroll", move |_| scroll.set(sample_scroll()))
            };
            let on_resize = WindowListener::new("resize", move |_| scroll.set(sample_scroll()));

            move || {
                drop(on_scroll);
                drop(on_resize);
            }
        });
    }

    html! {
        <ContextProvider<ScrollContext> context={*scroll}>
            {props.children.clone()}
        </ContextProvider<ScrollContext>>
    }
}

impl Reducible for CursorCoordinator {
    type Action = HoverEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[derive(Clone, PartialEq)]
pub struct CursorHandle(UseReducerDispatcher<CursorCoordinator>);

impl CursorHandle {
    pub fn new(dispatcher: UseReducerDispatcher<CursorCoordinator>) -> Self {
        Self(dispatcher)
    }

    fn dispatch(&self, event: HoverEvent) {
        self.0.dispatch(event);
    }
}

/// Mouse handlers that declare which cursor variant an element wants.
#[derive(Clone, PartialEq)]
pub struct HoverIntent {
    pub enter: Callback<MouseEvent>,
    pub leave: Callback<MouseEvent>,
    pub toggle: Callback<bool>,
}

#[hook]
pub fn use_hover_intent(variant: CursorVariant) -> HoverIntent {
    let cursor = use_context::<CursorHandle>();
    let dispatch = Callback::from(move |event: HoverEvent| {
        if let Some(cursor) = cursor.as_ref() {
            cursor.dispatch(event);
        }
    });

    HoverIntent {
        enter: dispatch.reform(move |_: MouseEvent| HoverEvent::Enter(variant)),
        leave: dispatch.reform(|_: MouseEvent| HoverEvent::Leave),
        toggle: dispatch.reform(move |hovered: bool| {
            if hovered {
                HoverEvent::Enter(variant)
            } else {
                HoverEvent::Leave
            }
        }),
    }
}

struct SpringDriver {
    spring: SpringVec2,
    last_frame: Option<f64>,
}

/// Animates toward `target` with a spring, re-targeting whenever it changes.
#[hook]
pub fn use_spring(target: Vec2, config: SpringConfig) -> Vec2 {
    let driver = use_mut_ref(|| SpringDriver {
        spring: SpringVec2::new(config, target),
        last_frame: None,
    });
    let value = use_state_eq(|| target);

    {
        let driver = driver.clone();
        let value = value.clone();
        use_effect_with(target, move |target| {
            driver.borrow_mut().spring.set_target(*target);

            let frame_loop = if prefers_reduced_motion() {
                None
            } else {
                let driver = driver.clone();
                let value = value.clone();
                AnimationFrameLoop::start(move |timestamp| {
                    let (current, settled) = {
                        let mut driver = driver.borrow_mut();
                        let dt = driver
                            .last_frame
                            .map_or(FALLBACK_FRAME_SECONDS, |last| (timestamp - last) / 1000.0);
                        let settled = driver.spring.step(dt);
                        driver.last_frame = (!settled).then_some(timestamp);
                        (driver.spring.value(), settled)
                    };
                    value.set(current);
                    !settled
                })
            };

            if frame_loop.is_none() {
                let current = {
                    let mut driver = driver.borrow_mut();
                    driver.spring.snap_to_target();
                    driver.last_frame = None;
                    driver.spring.value()
                };
                value.set(current);
            }

            move || drop(frame_loop)
        });
    }

    *value
}
