use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::animation::parallax::{ElementBounds, ParallaxTracker};
use crate::animation::stagger::StaggerSchedule;
use crate::animation::typewriter::Typewriter;
use crate::animation::visibility::{VisibilityCommand, VisibilityOptions, VisibilityState};
use crate::browser::{self, watch_scroll, watch_viewport};

#[derive(Clone, PartialEq)]
pub struct ScrollAnimation {
    pub node_ref: NodeRef,
    pub is_visible: bool,
}

/// Flips `is_visible` once the referenced element scrolls into view.
#[hook]
pub fn use_scroll_animation(options: VisibilityOptions) -> ScrollAnimation {
    let node_ref = use_node_ref();
    let is_visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |options: &VisibilityOptions| {
                let options = options.clone();
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let watch = match node_ref.cast::<Element>() {
                    Some(element) => {
                        let state = Rc::new(RefCell::new(VisibilityState::default()));
                        let pending = pending.clone();
                        let visible = is_visible.clone();
                        let (threshold, margin) = (options.threshold, options.root_margin.clone());

                        let watched = watch_viewport(element, threshold, &margin, move |intersecting| {
                            let command = state.borrow_mut().observe(intersecting, &options);
                            match command {
                                VisibilityCommand::ScheduleReveal { after_ms } => {
                                    let state = state.clone();
                                    let visible = visible.clone();
                                    let timeout = Timeout::new(after_ms, move || {
                                        state.borrow_mut().reveal();
                                        visible.set(true);
                                    });
                                    *pending.borrow_mut() = Some(timeout);
                                }
                                VisibilityCommand::Hide => {
                                    pending.borrow_mut().take();
                                    visible.set(false);
                                }
                                VisibilityCommand::Ignore => {}
                            }
                        });

                        match watched {
                            Ok(watch) => Some(watch),
                            Err(e) => {
                                warn!("Scroll animation disabled, showing content: {}", e);
                                is_visible.set(VisibilityState::fail_open().is_visible());
                                None
                            }
                        }
                    }
                    None => {
                        debug!("Scroll animation target is not mounted");
                        None
                    }
                };

                move || {
                    drop(watch);
                    pending.borrow_mut().take();
                }
            },
            options,
        );
    }

    ScrollAnimation { node_ref, is_visible: *is_visible }
}

#[derive(Clone, PartialEq)]
pub struct StaggeredReveal {
    pub node_ref: NodeRef,
    pub revealed: BTreeSet<usize>,
}

impl StaggeredReveal {
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }
}

/// Reveals `0..count` one every `delay_ms` after the container first shows up.
#[hook]
pub fn use_staggered_reveal(count: usize, delay_ms: u32) -> StaggeredReveal {
    let node_ref = use_node_ref();
    let revealed = use_state(BTreeSet::new);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |&(count, delay_ms): &(usize, u32)| {
                let resumed = StaggerSchedule::resume(count, delay_ms, &revealed);
                if resumed.revealed() != &*revealed {
                    revealed.set(resumed.revealed().clone());
                }
                let schedule = Rc::new(RefCell::new(resumed));
                let timers: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));
                let defaults = VisibilityOptions::default();

                let watch = node_ref.cast::<Element>().and_then(|element| {
                    let schedule_cb = schedule.clone();
                    let timers_cb = timers.clone();
                    let revealed_cb = revealed.clone();

                    let watched = watch_viewport(element, defaults.threshold, &defaults.root_margin, move |intersecting| {
                        if !intersecting {
                            return;
                        }
                        let Some(due) = schedule_cb.borrow_mut().trigger() else {
                            return;
                        };
                        let mut timers = timers_cb.borrow_mut();
                        for (index, after_ms) in due {
                            let schedule = schedule_cb.clone();
                            let revealed = revealed_cb.clone();
                            timers.push(Timeout::new(after_ms, move || {
                                let mut schedule = schedule.borrow_mut();
                                if schedule.reveal(index) {
                                    revealed.set(schedule.revealed().clone());
                                }
                            }));
                        }
                    });

                    match watched {
                        Ok(watch) => Some(watch),
                        Err(e) => {
                            warn!("Staggered reveal disabled, showing all items: {}", e);
                            let mut schedule = schedule.borrow_mut();
                            schedule.reveal_all();
                            revealed.set(schedule.revealed().clone());
                            None
                        }
                    }
                });

                move || {
                    drop(watch);
                    timers.borrow_mut().clear();
                }
            },
            (count, delay_ms),
        );
    }

    StaggeredReveal { node_ref, revealed: (*revealed).clone() }
}

#[derive(Clone, PartialEq)]
pub struct Parallax {
    pub node_ref: NodeRef,
    pub offset: f64,
}

#[hook]
pub fn use_parallax(speed: f64) -> Parallax {
    let node_ref = use_node_ref();
    let offset = use_state(|| 0.0_f64);

    {
        let node_ref = node_ref.clone();
        let offset = offset.clone();
        use_effect_with_deps(
            move |&speed: &f64| {
                let mut tracker = ParallaxTracker::new(speed);
                let listener = watch_scroll(move || {
                    let Some(element) = node_ref.cast::<Element>() else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    let bounds = ElementBounds { top: rect.top(), bottom: rect.bottom() };
                    if tracker.on_scroll(browser::scroll_y(), bounds, browser::viewport_height()) {
                        offset.set(tracker.offset());
                    }
                });
                if let Err(e) = &listener {
                    warn!("Parallax disabled: {}", e);
                }

                move || drop(listener)
            },
            speed,
        );
    }

    Parallax { node_ref, offset: *offset }
}

#[derive(Clone, PartialEq)]
pub struct TypewriterHandle {
    pub text: String,
    pub complete: bool,
    pub start: Callback<()>,
    pub reset: Callback<()>,
}

#[hook]
pub fn use_typewriter(text: String, speed_ms: u32) -> TypewriterHandle {
    let started = use_state(|| false);
    let complete = use_state(|| false);
    let shown = use_state(String::new);

    {
        let shown = shown.clone();
        let deps = (text, speed_ms, *started, *complete);
        let complete = complete.clone();
        use_effect_with_deps(
            move |(text, speed_ms, started, done): &(String, u32, bool, bool)| {
                let interval = (*started && !*done).then(|| {
                    let mut writer = Typewriter::new(text);
                    Interval::new(*speed_ms, move || {
                        writer.tick();
                        shown.set(writer.text());
                        if writer.is_complete() {
                            complete.set(true);
                        }
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    let start = {
        let started = started.clone();
        Callback::from(move |_| started.set(true))
    };
    let reset = {
        let (started, complete, shown) = (started.clone(), complete.clone(), shown.clone());
        Callback::from(move |_| {
            shown.set(String::new());
            complete.set(false);
            started.set(false);
        })
    };

    TypewriterHandle { text: (*shown).clone(), complete: *complete, start, reset }
}
