use leptos::prelude::*;

use crate::{
    page::{NavItem, Page},
    region::Region,
};

use super::homepage::PageNavigator;

#[component]
pub fn Header() -> impl IntoView {
    let page = expect_context::<Memo<Page>>();
    let nav = expect_context::<PageNavigator>();
    let brand = page.with_untracked(|p| p.brand.clone());

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white/90 backdrop-blur-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <button class="text-xl font-bold" on:click=move |_| nav.go_to(Region::Hero)>
                        {brand}
                    </button>
                    <div class="hidden md:flex space-x-8">
                        {Region::navigable()
                            .map(move |region| {
                                view! {
                                    <button
                                        on:click=move |_| nav.go_to(region)
                                        class=move || {
                                            page.with(|p| {
                                                NavItem {
                                                    region,
                                                    active: p.active() == Some(region),
                                                }
                                                .class()
                                            })
                                        }
                                    >
                                        {region.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
