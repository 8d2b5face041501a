use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, info, trace, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollToOptions, Storage, SubmitEvent,
};
use yew::prelude::*;

use crate::anchor::{scroll_destination, IN_PAGE_LINK_SELECTOR};
use crate::config::EffectsConfig;
use crate::effects::{
    card_entrance_delay_ms, card_entrance_style, parallax_transform, ActiveRipple, BlobDrift,
    CardRect, RippleSet, Tilt, BLOB_SELECTOR, CARD_STYLES, HOVER_SELECTOR, HOVER_TRANSITION,
    PAGE_FADE_DELAY_MS, PAGE_FADE_TRANSITION,
};
use crate::frame::FrameGate;
use crate::logger;
use crate::nav::NavTracker;
use crate::reveal::{stagger_batch, RevealOptions, REVEAL_SELECTOR, VISIBLE_CLASS};
use crate::subscribe::SubmitOutcome;
use crate::theme::{PreferenceStore, Theme, ThemeManager, THEME_ATTRIBUTE, THEME_TRANSITION};
use crate::toast::{
    resolve_accent, Toast, ToastKind, ToastPhase, ToastStack, ToastTiming, ACCENT_VARIABLE,
    TOAST_KEYFRAMES,
};

const MOUNT_POINT_ID: &str = "app";

struct Project {
    title: &'static str,
    summary: &'static str,
    stack: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Signal Garden",
        summary: "Generative audio sketches driven by live weather data.",
        stack: "Rust · WebAudio",
    },
    Project {
        title: "Paper Trail",
        summary: "A reading log that turns highlights into weekly digests.",
        stack: "TypeScript · SQLite",
    },
    Project {
        title: "Night Shift",
        summary: "Ambient lighting controller for small studios.",
        stack: "Embedded Rust · MQTT",
    },
];

fn document() -> Option<Document> {
    window()?.document()
}

fn root_element() -> Option<HtmlElement> {
    document()?.document_element()?.dyn_into::<HtmlElement>().ok()
}

fn mount_point() -> Option<Element> {
    document()?.get_element_by_id(MOUNT_POINT_ID)
}

fn mount_attribute(name: &str) -> Option<String> {
    mount_point()?.get_attribute(name)
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn page_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

fn accent_color() -> String {
    let value = window().zip(root_element()).and_then(|(win, root)| {
        win.get_computed_style(&root)
            .ok()
            .flatten()
            .and_then(|styles| styles.get_property_value(ACCENT_VARIABLE).ok())
    });
    resolve_accent(value.as_deref())
}

fn for_each_element(selector: &str, mut visit: impl FnMut(usize, HtmlElement)) {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return;
    };

    let elements = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok());
    for (index, element) in elements.enumerate() {
        visit(index, element);
    }
}

fn card_rect(card: &HtmlElement) -> CardRect {
    let rect = card.get_bounding_client_rect();
    CardRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = root_element() {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

/// Animates only the theme flip: the transition is removed again afterwards
/// so ordinary hover styles are not slowed down.
fn enable_theme_transition(duration_ms: u32) {
    let targets: Vec<HtmlElement> = root_element()
        .into_iter()
        .chain(document().and_then(|d| d.body()))
        .collect();

    for target in &targets {
        set_style(target, "transition", THEME_TRANSITION);
    }

    Timeout::new(duration_ms, move || {
        for target in &targets {
            clear_style(target, "transition");
        }
    })
    .forget();
}

fn fade_in_page() {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    set_style(&body, "opacity", "0");
    Timeout::new(PAGE_FADE_DELAY_MS, move || {
        set_style(&body, "transition", PAGE_FADE_TRANSITION);
        set_style(&body, "opacity", "1");
    })
    .forget();
}

/// Runs `update` with the latest scroll offset at most once per frame.
struct ScrollEffect {
    _listener: EventListener,
    gate: Rc<RefCell<FrameGate<AnimationFrame>>>,
}

impl ScrollEffect {
    fn install<F>(update: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let window = window()?;
        let gate: Rc<RefCell<FrameGate<AnimationFrame>>> = Rc::default();
        let update = Rc::new(RefCell::new(update));

        let listener = {
            let gate = gate.clone();
            EventListener::new(&window, "scroll", move |_| {
                let frame_gate = gate.clone();
                let update = update.clone();
                gate.borrow_mut().schedule(move || {
                    request_animation_frame(move |_| {
                        let finished = frame_gate.borrow_mut().complete();
                        (update.borrow_mut())(page_offset());
                        drop(finished);
                    })
                });
            })
        };

        Some(Self {
            _listener: listener,
            gate,
        })
    }
}

impl Drop for ScrollEffect {
    fn drop(&mut self) {
        let pending = self.gate.borrow_mut().complete();
        drop(pending);
    }
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Delegated handler for every in-page link, including ones rendered later.
fn install_anchor_scroll(clearance: f64) -> Option<EventListener> {
    let document = document()?;

    Some(EventListener::new_with_options(
        &document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(link) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(IN_PAGE_LINK_SELECTOR).ok().flatten())
            else {
                return;
            };

            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let destination = scroll_destination(&href, page_offset(), clearance, |selector| {
                self::document()
                    .and_then(|d| d.query_selector(selector).ok().flatten())
                    .map(|target| target.get_bounding_client_rect().top())
            });

            match destination {
                Some(top) => smooth_scroll_to(top),
                None => debug!(href = %href, "in-page link has no target"),
            }
        },
    ))
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn install(options: RevealOptions) -> Option<Self> {
        let stagger_ms = options.stagger_ms;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let entries: Vec<IntersectionObserverEntry> = entries
                    .iter()
                    .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                    .collect();
                let plan = stagger_batch(entries.iter().map(|e| e.is_intersecting()), stagger_ms);
                trace!(batch = entries.len(), revealing = plan.len(), "intersection batch");

                for reveal in plan {
                    let Some(entry) = entries.get(reveal.index) else {
                        continue;
                    };
                    let target = entry.target();
                    Timeout::new(reveal.delay_ms, move || {
                        let _ = target.class_list().add_1(VISIBLE_CLASS);
                    })
                    .forget();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|error| warn!(?error, "intersection observer unavailable"))
                .ok()?;

        let mut observed = 0;
        for_each_element(REVEAL_SELECTOR, |_, element| {
            observer.observe(&element);
            observed += 1;
        });
        debug!(observed, "fade-in observer ready");

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// One drifting blob; the loop runs until `stop` drops the pending frame.
struct BlobLoop {
    element: HtmlElement,
    drift: RefCell<BlobDrift>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl BlobLoop {
    fn start(element: HtmlElement, index: usize) -> Rc<Self> {
        let blob = Rc::new(Self {
            element,
            drift: RefCell::new(BlobDrift::for_index(index)),
            frame: RefCell::new(None),
        });
        blob.tick();
        blob.schedule();
        blob
    }

    fn tick(&self) {
        let mut drift = self.drift.borrow_mut();
        drift.step(js_sys::Date::now());
        set_style(&self.element, "transform", &drift.transform());
    }

    fn schedule(self: &Rc<Self>) {
        let blob = Rc::clone(self);
        let next = request_animation_frame(move |_| {
            blob.tick();
            blob.schedule();
        });
        let previous = self.frame.borrow_mut().replace(next);
        drop(previous);
    }

    fn stop(&self) {
        let pending = self.frame.borrow_mut().take();
        drop(pending);
    }
}

fn install_hover_transitions() -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for_each_element(HOVER_SELECTOR, |_, element| {
        let target = element.clone();
        listeners.push(EventListener::new(&element, "mouseenter", move |_| {
            set_style(&target, "transition", HOVER_TRANSITION);
        }));
    });
    listeners
}

#[hook]
fn use_config() -> EffectsConfig {
    use_context::<EffectsConfig>().unwrap_or_default()
}

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let config = use_config();
    let manager = use_mut_ref(|| ThemeManager::load(LocalPreferences));
    let theme = use_state_eq(|| manager.borrow().current());

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = manager.borrow_mut().toggle();
            enable_theme_transition(config.theme_transition_ms);
            apply_theme(next);
            debug!(theme = next.as_str(), "theme toggled");
            theme.set(next);
        })
    };

    html! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-label={(*theme).toggle_label()}
            {onclick}
        >
            <i id="themeIcon" class={(*theme).icon_class()} aria-hidden="true"></i>
        </button>
    }
}

#[function_component(FloatingNav)]
fn floating_nav() -> Html {
    let config = use_config();
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let mut tracker = NavTracker::new(config.nav_reveal_offset);
            let effect = ScrollEffect::install(move |offset| {
                visible.set(tracker.observe(offset).is_visible());
            });
            move || drop(effect)
        });
    }

    html! {
        <nav id="navFloating" class={classes!("nav-floating", (*visible).then_some("visible"))}>
            <a class="nav-link" href="#top">{"Home"}</a>
            <a class="nav-link" href="#about">{"About"}</a>
            <a class="nav-link" href="#projects">{"Projects"}</a>
            <a class="nav-link" href="#subscribe">{"Subscribe"}</a>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let config = use_config();
    let hero_ref = use_node_ref();
    let entered = use_state_eq(|| false);

    {
        let hero_ref = hero_ref.clone();
        use_effect_with((), move |_| {
            let effect = ScrollEffect::install(move |offset| {
                if let Some(hero) = hero_ref.cast::<HtmlElement>() {
                    let transform = parallax_transform(offset, config.parallax_factor);
                    set_style(&hero, "transform", &transform);
                }
            });
            move || drop(effect)
        });
    }

    {
        let entered = entered.clone();
        use_effect_with((), move |_| {
            let frame = request_animation_frame(move |_| entered.set(true));
            move || drop(frame)
        });
    }

    let visible = (*entered).then_some(VISIBLE_CLASS);

    html! {
        <section id="top" class="hero" ref={hero_ref}>
            <div class={classes!("hero-left", visible)}>
                <p class="hero-eyebrow">{"Hi, I'm"}</p>
                <h1 class="hero-title">{"Alasrambus"}</h1>
                <p class="hero-subtitle">
                    {"I design and build small, careful tools for the web."}
                </p>
                <div class="hero-actions">
                    <a class="cta-button primary" href="#projects">{"See my work"}</a>
                    <a class="cta-button secondary" href="#subscribe">{"Stay in touch"}</a>
                </div>
            </div>
            <div class={classes!("hero-right", visible)} aria-hidden="true">
                <div class="hero-portrait"></div>
            </div>
        </section>
    }
}

enum RippleAction {
    Spawn {
        rect: CardRect,
        client_x: f64,
        client_y: f64,
        accent: String,
        duration_ms: u32,
    },
    Remove(u64),
}

impl Reducible for RippleSet {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RippleAction::Spawn {
                rect,
                client_x,
                client_y,
                accent,
                duration_ms,
            } => {
                next.spawn(rect, client_x, client_y, &accent, duration_ms);
            }
            RippleAction::Remove(id) => {
                next.remove(id);
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct RippleViewProps {
    active: ActiveRipple,
    duration_ms: u32,
    on_done: Callback<u64>,
}

#[function_component(RippleView)]
fn ripple_view(props: &RippleViewProps) -> Html {
    {
        let duration_ms = props.duration_ms;
        let on_done = props.on_done.clone();
        use_effect_with(props.active.ripple.id, move |id| {
            let id = *id;
            let timeout = Timeout::new(duration_ms, move || on_done.emit(id));
            move || drop(timeout)
        });
    }

    html! {
        <span class="ripple" style={props.active.style.clone()}></span>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    index: usize,
    title: AttrValue,
    summary: AttrValue,
    stack: AttrValue,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let config = use_config();
    let card_ref = use_node_ref();
    let entered = use_state_eq(|| false);
    let ripples = use_reducer(RippleSet::default);

    {
        let entered = entered.clone();
        let delay = card_entrance_delay_ms(props.index, config.card_stagger_ms);
        use_effect_with((), move |_| {
            let timeout = Timeout::new(delay, move || entered.set(true));
            move || drop(timeout)
        });
    }

    let onmousemove = {
        let card_ref = card_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(card) = card_ref.cast::<HtmlElement>() else {
                return;
            };
            let tilt = Tilt::from_pointer(
                card_rect(&card),
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                config.tilt_divisor,
            );
            set_style(&card, "transform", &tilt.transform());
        })
    };

    let onmouseleave = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                clear_style(&card, "transform");
            }
        })
    };

    let onclick = {
        let card_ref = card_ref.clone();
        let dispatcher = ripples.dispatcher();
        Callback::from(move |event: MouseEvent| {
            let Some(card) = card_ref.cast::<HtmlElement>() else {
                return;
            };

            dispatcher.dispatch(RippleAction::Spawn {
                rect: card_rect(&card),
                client_x: f64::from(event.client_x()),
                client_y: f64::from(event.client_y()),
                accent: accent_color(),
                duration_ms: config.ripple_ms,
            });
        })
    };

    let on_ripple_done = {
        let dispatcher = ripples.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(RippleAction::Remove(id)))
    };

    html! {
        <article
            class="project-card"
            ref={card_ref}
            style={card_entrance_style(*entered)}
            {onmousemove}
            {onmouseleave}
            {onclick}
        >
            <h3 class="project-title">{props.title.clone()}</h3>
            <p class="project-summary">{props.summary.clone()}</p>
            <p class="project-stack">{props.stack.clone()}</p>
            { for ripples.ripples().iter().map(|active| html! {
                <RippleView
                    key={active.ripple.id}
                    active={active.clone()}
                    duration_ms={config.ripple_ms}
                    on_done={on_ripple_done.clone()}
                />
            }) }
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct SubscribeFormProps {
    on_notify: Callback<(ToastKind, String)>,
}

#[function_component(SubscribeForm)]
fn subscribe_form(props: &SubscribeFormProps) -> Html {
    let input_ref = use_node_ref();

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };

            let outcome = match SubmitOutcome::from_input(&input.value()) {
                Ok(outcome) => {
                    info!("subscription accepted");
                    outcome
                }
                Err((outcome, error)) => {
                    debug!(reason = %error, "subscription rejected");
                    outcome
                }
            };

            if outcome.clear_input {
                input.set_value("");
            }
            on_notify.emit((outcome.kind, outcome.message.to_string()));
        })
    };

    html! {
        <form id="subscribeForm" class="subscribe-form" novalidate={true} {onsubmit}>
            <input
                id="emailInput"
                ref={input_ref}
                type="email"
                name="email"
                placeholder="you@example.com"
                autocomplete="email"
            />
            <button class="cta-button" type="submit">{"Subscribe"}</button>
        </form>
    }
}

enum ToastAction {
    Push {
        kind: ToastKind,
        message: String,
        accent: String,
    },
    Dismiss(u64),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push {
                kind,
                message,
                accent,
            } => {
                next.push(kind, message, accent);
            }
            ToastAction::Dismiss(id) => {
                next.dismiss(id);
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    timing: ToastTiming,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let phase = use_state_eq(|| ToastPhase::Showing);

    {
        let phase = phase.clone();
        let timing = props.timing;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toast.id, move |id| {
            let id = *id;
            let leave = Timeout::new(timing.display_ms, move || phase.set(ToastPhase::Leaving));
            let remove = Timeout::new(timing.lifetime_ms(), move || on_dismiss.emit(id));
            move || {
                drop(leave);
                drop(remove);
            }
        });
    }

    html! {
        <div class={props.toast.kind.class_name()} role="status" style={props.toast.style(*phase)}>
            {props.toast.message.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: EffectsConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config;
    let toasts = use_reducer(ToastStack::default);

    use_effect_with((), move |_| {
        let anchors = install_anchor_scroll(config.anchor_clearance);
        let reveal = RevealObserver::install(config.reveal);
        let hover = install_hover_transitions();
        let mut blobs = Vec::new();
        for_each_element(BLOB_SELECTOR, |index, element| {
            blobs.push(BlobLoop::start(element, index));
        });
        debug!(blobs = blobs.len(), hover = hover.len(), "page effects installed");

        move || {
            blobs.iter().for_each(|blob| blob.stop());
            drop(hover);
            drop(reveal);
            drop(anchors);
        }
    });

    let on_notify = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            dispatcher.dispatch(ToastAction::Push {
                kind,
                message,
                accent: accent_color(),
            });
        })
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<EffectsConfig> context={config}>
            <style>{TOAST_KEYFRAMES}{CARD_STYLES}</style>
            <div class="background-blobs" aria-hidden="true">
                <div class="gradient-blob blob-1"></div>
                <div class="gradient-blob blob-2"></div>
                <div class="gradient-blob blob-3"></div>
            </div>
            <FloatingNav />
            <ThemeToggle />

            <main id="content">
                <Hero />

                <section id="about" class="about">
                    <h2 class="section-title fade-in-scroll">{"About"}</h2>
                    <p class="fade-in-scroll">
                        {"Designer-developer working where interfaces meet "}
                        {"the systems underneath them. "}
                        {"I like small teams, sharp tools and pages that load fast."}
                    </p>
                    <div class="stats">
                        <div class="stat-item">
                            <span class="stat-value">{"8+"}</span>
                            <span class="stat-label">{"years shipping"}</span>
                        </div>
                        <div class="stat-item">
                            <span class="stat-value">{"40"}</span>
                            <span class="stat-label">{"projects launched"}</span>
                        </div>
                        <div class="stat-item">
                            <span class="stat-value">{"3"}</span>
                            <span class="stat-label">{"open-source libraries"}</span>
                        </div>
                    </div>
                </section>

                <section id="projects" class="projects">
                    <h2 class="section-title fade-in-scroll">{"Projects"}</h2>
                    <div class="projects-grid">
                        { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                            <ProjectCard
                                key={project.title}
                                {index}
                                title={project.title}
                                summary={project.summary}
                                stack={project.stack}
                            />
                        }) }
                    </div>
                </section>

                <section id="subscribe" class="subscribe fade-in-scroll">
                    <h2 class="section-title">{"Letters, occasionally"}</h2>
                    <p class="muted">{"A short note when something new ships. No spam."}</p>
                    <SubscribeForm {on_notify} />
                </section>
            </main>

            <footer class="site-footer">
                <a class="social-link" href="mailto:hello@alasrambus.com">{"Email"}</a>
                <a class="social-link" href="#top">{"Back to top"}</a>
            </footer>

            <div class="notifications">
                { for toasts.toasts().iter().map(|toast| html! {
                    <ToastView
                        key={toast.id}
                        toast={toast.clone()}
                        timing={config.toast}
                        on_dismiss={on_dismiss.clone()}
                    />
                }) }
            </div>
        </ContextProvider<EffectsConfig>>
    }
}

pub fn run() {
    let config = EffectsConfig::from_attributes(mount_attribute);
    logger::init(config.log_level);
    info!("Alasrambus site loaded");

    fade_in_page();

    let props = AppProps { config };
    match mount_point() {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            warn!("missing #{MOUNT_POINT_ID} mount point, rendering into body");
            yew::Renderer::<App>::with_props(props).render();
        }
    }

    logger::print_banner();
}
