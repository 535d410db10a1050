use leptos::prelude::*;

use crate::{
    contact::ContactForm,
    content::portfolio,
    nav::Navigator,
    page::{render, Page, PageState},
    region::Region,
    spy::SpyState,
};

use super::{
    contact::{Contact, Footer},
    dom::DomScroll,
    header::Header,
    resume::Resume,
    work::{Experience, Projects},
};

#[cfg(feature = "hydrate")]
use super::dom::DomIntersections;
#[cfg(feature = "hydrate")]
use crate::spy::VisibilityTracker;

pub type PageNavigator = Navigator<DomScroll>;

#[component]
pub fn HomePage() -> impl IntoView {
    let spy = RwSignal::new(SpyState::default());
    let form = RwSignal::new(ContactForm::default());
    let page = Memo::new(move |_| {
        let state = PageState {
            spy: spy.get(),
            form: form.get(),
        };
        render(&state, portfolio())
    });

    // observe once the sections are in the DOM, stop when the page goes away
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let mut tracker = VisibilityTracker::new(DomIntersections::default());
        tracker.observe(&Region::ALL, move |state| spy.set(state.clone()));
        let tracker = StoredValue::new_local(tracker);
        on_cleanup(move || tracker.update_value(|t| t.disconnect()));
    });

    provide_context(page);
    provide_context(form);
    provide_context(PageNavigator::new(DomScroll));

    view! {
        <div class="bg-white text-black min-h-screen">
            <Header />
            <Hero />
            <About />
            <Experience />
            <Projects />
            <Resume />
            <Contact />
            <Footer />
        </div>
    }
}

/// A page region: the anchored `<section>` plus the wrapper that fades in when the
/// region is on screen.
#[component]
pub fn Section(
    region: Region,
    #[prop(default = "py-20")] class: &'static str,
    #[prop(default = "max-w-7xl")] width: &'static str,
    children: Children,
) -> impl IntoView {
    let page = expect_context::<Memo<Page>>();
    view! {
        <section id=region.id() class=class>
            <div class=format!("{width} mx-auto px-4 sm:px-6 lg:px-8")>
                <div class=move || page.with(|p| p.reveal(region).class())>
                    <h2 class="text-4xl font-bold mb-16 text-center">{section_title(region)}</h2>
                    {children()}
                </div>
            </div>
        </section>
    }
}

fn section_title(region: Region) -> &'static str {
    match region {
        Region::Contact => "Get In Touch",
        r => r.label(),
    }
}

#[component]
fn Hero() -> impl IntoView {
    let page = expect_context::<Memo<Page>>();
    let nav = expect_context::<PageNavigator>();
    let profile = &portfolio().profile;
    let cta = "px-8 py-3 border border-gray-300 rounded-xl font-semibold hover:bg-gray-100 transition-all duration-300 hover:scale-105";

    view! {
        <section id=Region::Hero.id() class="min-h-screen flex items-center justify-center relative">
            <div class="text-center px-4 max-w-4xl mx-auto">
                <div class=move || page.with(|p| p.reveal(Region::Hero).class())>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                        {profile.name.as_str()}
                    </h1>
                    <h2 class="text-2xl md:text-3xl text-gray-600 mb-4">
                        {profile.headline.as_str()}
                    </h2>
                    <p class="text-lg md:text-xl text-gray-500 mb-12 max-w-2xl mx-auto">
                        {profile.tagline.as_str()}
                    </p>
                    <div class="flex flex-wrap justify-center gap-4">
                        <button
                            on:click=move |_| nav.go_to(Region::Resume)
                            class="px-8 py-3 bg-black text-white rounded-xl font-semibold hover:bg-gray-800 transition-all duration-300 hover:scale-105"
                        >
                            "View Resume"
                        </button>
                        <button on:click=move |_| nav.go_to(Region::Projects) class=cta>
                            "View Projects"
                        </button>
                        <button on:click=move |_| nav.go_to(Region::Contact) class=cta>
                            "Contact"
                        </button>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                <i class="extra-chevron-down text-2xl text-gray-500"></i>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let profile = &portfolio().profile;
    view! {
        <Section region=Region::About class="py-20 bg-gray-50">
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <div>
                    {profile
                        .bio
                        .iter()
                        .map(|p| {
                            view! {
                                <p class="text-lg text-gray-600 leading-relaxed mb-6">
                                    {p.as_str()}
                                </p>
                            }
                        })
                        .collect_view()}
                    <div class="flex items-center gap-4 text-gray-500">
                        <i class="extra-location"></i>
                        <span>{profile.location.as_str()}</span>
                    </div>
                </div>
                <div class="flex justify-center">
                    <img
                        src=profile.photo.src.as_str()
                        alt=profile.photo.alt.as_str()
                        class="w-80 h-80 rounded-2xl object-cover shadow-lg"
                    />
                </div>
            </div>
        </Section>
    }
}
