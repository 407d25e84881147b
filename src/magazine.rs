use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::{MagazineConfig, SiteConfig};
use crate::data::{page_label, WorkCatalog, WorkItem};
use crate::pagination::{NavKey, PaginationController, Side, Step, TransitionTicket};
use crate::transition::{reveal_style, FlipSpec, PaneVisual};

pub enum MagazineAction {
    Step(Step),
    Jump(usize),
    Key(NavKey),
    Settled,
    Expired(TransitionTicket),
}

#[derive(Clone, PartialEq)]
struct MagazineState {
    controller: PaginationController,
}

impl Reducible for MagazineState {
    type Action = MagazineAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        match action {
            MagazineAction::Step(step) => {
                controller.step_page(step);
            }
            MagazineAction::Jump(index) => {
                controller.jump_to_page(index);
            }
            MagazineAction::Key(key) => {
                controller.handle_key(key);
            }
            MagazineAction::Settled => controller.on_transition_settled(),
            MagazineAction::Expired(ticket) => {
                if controller.expire(ticket) {
                    warn!(
                        "Page turn to {} never reported completion, releasing navigation",
                        controller.current_page() + 1
                    );
                }
            }
        }

        if controller == self.controller {
            self
        } else {
            Rc::new(Self { controller })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturedWorkProps {
    pub catalog: WorkCatalog,
    #[prop_or_default]
    pub site: SiteConfig,
    #[prop_or_default]
    pub config: MagazineConfig,
}

#[function_component(FeaturedWork)]
pub fn featured_work(props: &FeaturedWorkProps) -> Html {
    let total_pages = props.catalog.len();
    let state = use_reducer(move || MagazineState {
        controller: PaginationController::new(total_pages),
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    EventListener::new(&window, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                            return;
                        };
                        if let Some(key) = NavKey::from_key(&event.key()) {
                            dispatcher.dispatch(MagazineAction::Key(key));
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    {
        let dispatcher = state.dispatcher();
        let timeout_ms = props.config.settle_timeout_ms();
        let ticket = state.controller.in_flight().map(|transition| transition.ticket);
        use_effect_with_deps(
            move |ticket: &Option<TransitionTicket>| {
                let watchdog = ticket.map(|ticket| {
                    Timeout::new(timeout_ms, move || {
                        dispatcher.dispatch(MagazineAction::Expired(ticket));
                    })
                });
                move || drop(watchdog)
            },
            ticket,
        );
    }

    let controller = &state.controller;
    let current = controller.current_page();
    let Some(work) = props.catalog.get(current) else {
        return html! {};
    };

    let on_previous = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MagazineAction::Step(Step::Previous)))
    };

    let on_next = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MagazineAction::Step(Step::Next)))
    };

    let on_jump = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(MagazineAction::Jump(index)))
    };

    let on_animation_end = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: AnimationEvent| {
            if FlipSpec::is_completion(&event.animation_name()) {
                dispatcher.dispatch(MagazineAction::Settled);
            }
        })
    };

    let carousel_label = format!("Project {} of {}: {}", current + 1, total_pages, work.title);

    html! {
        <section id="featured-work" class="featured-work section"
            aria-label="Featured Work Portfolio" role="region">
            <div class="container">
                <div class="featured-work-header text-center fade-in">
                    <p class="section-tagline">{ "Featured Work" }</p>
                    <h2 class="section-title">{ "The Portfolio Magazine" }</h2>
                    <div class="divider divider-center"></div>
                    <p class="featured-work-intro">{ "Browse through my work like pages of a magazine" }</p>
                </div>

                <div class="magazine-container" role="group"
                    aria-roledescription="carousel" aria-label={carousel_label}>
                    <button
                        class={classes!("magazine-nav", "magazine-nav-prev", controller.is_first_page().then_some("disabled"))}
                        onclick={on_previous}
                        aria-label="Go to previous project"
                        disabled={!controller.can_go_previous()}>
                        <span class="nav-arrow" aria-hidden="true">{ "‹" }</span>
                    </button>

                    <div class="magazine-spread" aria-live="polite" aria-atomic="true">
                        { render_pane(Side::Left, controller, &props.catalog, &props.site, &on_animation_end) }
                        { render_pane(Side::Right, controller, &props.catalog, &props.site, &on_animation_end) }
                    </div>

                    <button
                        class={classes!("magazine-nav", "magazine-nav-next", controller.is_last_page().then_some("disabled"))}
                        onclick={on_next}
                        aria-label="Go to next project"
                        disabled={!controller.can_go_next()}>
                        <span class="nav-arrow" aria-hidden="true">{ "›" }</span>
                    </button>
                </div>

                <nav class="magazine-thumbnails" aria-label="Project quick navigation">
                    { for props.catalog.iter().enumerate().map(|(index, work)| {
                        render_thumbnail(index, work, controller, &on_jump)
                    }) }
                </nav>

                <p class="magazine-hint">
                    { "Use arrows or click thumbnails to browse • Keyboard: ← →" }
                </p>
            </div>
        </section>
    }
}

fn render_pane(
    side: Side,
    controller: &PaginationController,
    catalog: &WorkCatalog,
    site: &SiteConfig,
    on_animation_end: &Callback<AnimationEvent>,
) -> Html {
    let current = controller.current_page();
    let visual = PaneVisual::from_role(controller.pane_role(side), controller.direction());

    match visual {
        PaneVisual::Static { .. } => {
            let class = classes!(pane_class(side), visual.static_class());
            let body = render_page_body(side, current, catalog, site, false);
            html! {
                <div class={class} style={PaneVisual::static_style()}>
                    { body }
                </div>
            }
        }
        PaneVisual::Flip(spec) => {
            let in_flight = controller.in_flight().copied();
            let entering_class = classes!(
                "page-layer",
                in_flight.is_some().then(|| spec.enter_class())
            );

            // Both layers are keyed by page so each turn mounts fresh elements
            // and restarts their keyframes.
            let mut layers = vec![html! {
                <div key={format!("page-{}", current)}
                    class={entering_class}
                    style={spec.enter_style()}>
                    { render_page_body(side, current, catalog, site, visual.reveals_content(side)) }
                </div>
            }];
            if let Some(transition) = in_flight {
                layers.push(html! {
                    <div key={format!("exit-{}", transition.from)}
                        class={classes!("page-layer", spec.exit_class())}
                        style={spec.exit_style()}
                        onanimationend={on_animation_end.clone()}>
                        { render_page_body(side, transition.from, catalog, site, false) }
                    </div>
                });
            }

            html! {
                <div class={classes!(pane_class(side), visual.static_class())}>
                    { for layers }
                </div>
            }
        }
    }
}

fn pane_class(side: Side) -> Classes {
    match side {
        Side::Left => classes!("magazine-page", "magazine-page-left"),
        Side::Right => classes!("magazine-page", "magazine-page-right"),
    }
}

fn render_page_body(
    side: Side,
    index: usize,
    catalog: &WorkCatalog,
    site: &SiteConfig,
    reveal: bool,
) -> Html {
    let Some(work) = catalog.get(index) else {
        return html! {};
    };
    match side {
        Side::Left => render_cover(work, index, site),
        Side::Right => render_details(work, index, catalog.len(), reveal),
    }
}

fn render_cover(work: &WorkItem, index: usize, site: &SiteConfig) -> Html {
    html! {
        <div class="page-image" aria-hidden="true">
            <img src={site.asset_url(&work.cover_image)} alt={work.title.clone()} class="cover-image" />
            <span class="page-category">{ &work.category }</span>
            <div class="page-overlay">
                <span class="page-number">{ page_label(index) }</span>
            </div>
            <div class="page-shadow-overlay"></div>
        </div>
    }
}

fn render_details(work: &WorkItem, index: usize, total_pages: usize, reveal: bool) -> Html {
    let block = |order: usize| -> (Classes, String) {
        if reveal {
            (classes!("content-reveal"), reveal_style(order))
        } else {
            (Classes::new(), String::new())
        }
    };
    let (meta_class, meta_style) = block(0);
    let (title_class, title_style) = block(1);
    let (desc_class, desc_style) = block(2);
    let (role_class, role_style) = block(3);
    let (footer_class, footer_style) = block(4);

    html! {
        <article class="page-content" aria-labelledby={format!("project-title-{}", work.id)}>
            <div class={classes!("page-meta", meta_class)} style={meta_style}>
                <span class="meta-year">{ &work.year }</span>
                <span class="meta-divider" aria-hidden="true">{ "—" }</span>
                <span class="meta-client">{ &work.client }</span>
            </div>
            <h3 id={format!("project-title-{}", work.id)}
                class={classes!("page-title", title_class)} style={title_style}>
                { &work.title }
            </h3>
            <p class={classes!("page-description", desc_class)} style={desc_style}>
                { &work.description }
            </p>
            <div class={classes!("page-role", role_class)} style={role_style}>
                <span class="role-label">{ "Role:" }</span>
                <span class="role-value">{ &work.role }</span>
            </div>
            <div class={classes!("page-footer", footer_class)} style={footer_style}>
                <div class="page-indicator" role="tablist" aria-label="Project pages">
                    { for (0..total_pages).map(|dot| {
                        let active = dot == index;
                        html! {
                            <span key={dot}
                                class={classes!("indicator-dot", active.then_some("active"))}
                                role="tab"
                                aria-selected={active.to_string()}
                                aria-label={format!("Project {}", dot + 1)}>
                            </span>
                        }
                    }) }
                </div>
                <span class="page-count" aria-hidden="true">
                    { format!("Page {} of {}", index + 1, total_pages) }
                </span>
            </div>
        </article>
    }
}

fn render_thumbnail(
    index: usize,
    work: &WorkItem,
    controller: &PaginationController,
    on_jump: &Callback<usize>,
) -> Html {
    let active = index == controller.current_page();
    let on_click = {
        let on_jump = on_jump.clone();
        Callback::from(move |_: MouseEvent| on_jump.emit(index))
    };

    html! {
        <button key={work.id}
            class={classes!("thumbnail", active.then_some("active"))}
            onclick={on_click}
            disabled={controller.is_animating()}
            aria-label={format!("Go to project {}: {}", index + 1, work.title)}
            aria-current={active.then_some("true")}>
            <span class="thumbnail-number" aria-hidden="true">{ page_label(index) }</span>
            <span class="thumbnail-title">{ &work.title }</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::Reducible;

    fn ticket_of(state: &MagazineState) -> TransitionTicket {
        state.controller.in_flight().map(|t| t.ticket).expect("turn in flight")
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let state = Rc::new(MagazineState {
            controller: PaginationController::new(3),
        });
        let after = state.clone().reduce(MagazineAction::Step(Step::Previous));
        assert!(Rc::ptr_eq(&state, &after));
        let after = after.reduce(MagazineAction::Settled);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn stale_watchdog_is_ignored_and_current_one_releases() {
        let state = Rc::new(MagazineState {
            controller: PaginationController::new(3),
        });
        let state = state.reduce(MagazineAction::Step(Step::Next));
        let stale = ticket_of(&state);
        let state = state.reduce(MagazineAction::Settled);
        let state = state.reduce(MagazineAction::Key(NavKey::ArrowRight));
        let current = ticket_of(&state);
        assert_ne!(stale, current);

        let after_stale = state.clone().reduce(MagazineAction::Expired(stale));
        assert!(Rc::ptr_eq(&state, &after_stale));
        assert!(after_stale.controller.is_animating());

        let released = after_stale.reduce(MagazineAction::Expired(current));
        assert!(!released.controller.is_animating());
        assert_eq!(released.controller.current_page(), 2);
    }

    #[test]
    fn jump_during_turn_is_dropped_by_reducer() {
        let state = Rc::new(MagazineState {
            controller: PaginationController::new(5),
        });
        let state = state.reduce(MagazineAction::Jump(3));
        let after = state.clone().reduce(MagazineAction::Jump(1));
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.controller.current_page(), 3);
    }
}
