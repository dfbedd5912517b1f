mod effects;
mod location;
mod sections;
mod tracking;

use crate::widgets::{CursorCoordinator, Theme, THEME_STORAGE_KEY};
use effects::Cursor;
use js_sys::{Function, Reflect};
use location::report_visitor_ip;
use sections::{
    AboutSection, ContactSection, FinalCtaSection, Header, HeroSection, HowItWorksSection,
    ProblemSolutionSection, ServicesSection, SocialProofSection,
};
use tracking::{prefers_reduced_motion, CursorHandle, PointerProvider, ScrollProvider};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Storage};
use yew::prelude::*;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_theme() -> Option<String> {
    local_storage().and_then(|storage| match storage.get_item(THEME_STORAGE_KEY) {
        Ok(value) => value,
        Err(error) => {
            log::warn!("failed to read stored theme: {error:?}");
            None
        }
    })
}

fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    if let Err(error) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("failed to apply theme class: {error:?}");
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, callback.unchecked_ref())
        .is_err()
    {
        apply_theme(theme);
    }
}

fn persist_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };

    if let Err(error) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("failed to persist theme: {error:?}");
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(|| Theme::resolve(read_stored_theme().as_deref()));
    let cursor = use_reducer(CursorCoordinator::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            if current.needs_persist(read_stored_theme().as_deref()) {
                persist_theme(current);
            }
            report_visitor_ip();
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    html! {
        <ContextProvider<CursorHandle> context={CursorHandle::new(cursor.dispatcher())}>
            <PointerProvider>
                <ScrollProvider>
                    <Cursor theme={*theme} variant={cursor.variant} />
                    <div class="page-shell">
                        <Header theme={*theme} {on_toggle_theme} />
                        <main id="content">
                            <HeroSection />
                            <ProblemSolutionSection />
                            <HowItWorksSection />
                            <SocialProofSection />
                            <FinalCtaSection />
                            <AboutSection />
                            <ServicesSection />
                            <ContactSection />
                        </main>
                    </div>
                </ScrollProvider>
            </PointerProvider>
        </ContextProvider<CursorHandle>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log::error!("missing #app mount point");
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
