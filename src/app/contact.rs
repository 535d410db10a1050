use leptos::prelude::*;

use crate::{
    contact::{ContactField, ContactForm},
    content::{portfolio, Link},
    page::Page,
    region::Region,
};

use super::homepage::Section;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-100 border border-gray-300 rounded-xl text-black placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-black focus:border-transparent";

#[component]
pub fn Contact() -> impl IntoView {
    let contact = &portfolio().contact;
    view! {
        <Section region=Region::Contact class="py-20 bg-gray-50" width="max-w-4xl">
            <div class="grid md:grid-cols-2 gap-12">
                <div>
                    <h3 class="text-xl font-bold mb-6">"Contact Information"</h3>
                    <div class="space-y-4">
                        <Channel icon="extra-email" kind="Email">
                            <a href=portfolio().mailto() class="text-black hover:underline">
                                {contact.email.as_str()}
                            </a>
                        </Channel>
                        <Channel icon="extra-phone" kind="Phone">
                            <a href=contact.phone.href.as_str() class="text-black hover:underline">
                                {contact.phone.label.as_str()}
                            </a>
                        </Channel>
                        <Channel icon="devicon-github-plain" kind="GitHub">
                            <External link=&contact.github />
                        </Channel>
                        <Channel icon="devicon-linkedin-plain" kind="LinkedIn">
                            <External link=&contact.linkedin />
                        </Channel>
                    </div>
                </div>
                <MessageForm />
            </div>
        </Section>
    }
}

#[component]
fn Channel(icon: &'static str, kind: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <div class="w-12 h-12 bg-gray-100 rounded-full flex items-center justify-center text-gray-500">
                <i class=icon></i>
            </div>
            <div>
                <p class="text-gray-500 text-sm">{kind}</p>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn External(link: &'static Link) -> impl IntoView {
    view! {
        <a
            href=link.href.as_str()
            target="_blank"
            rel="noopener noreferrer"
            class="text-black hover:underline"
        >
            {link.label.as_str()}
        </a>
    }
}

/// Copies an input's value into the form, keyed by the input's `name`.
fn fill_in(form: RwSignal<ContactForm>, ev: &web_sys::Event) {
    let name = event_target::<web_sys::Element>(ev)
        .get_attribute("name")
        .unwrap_or_default();
    let value = event_target_value(ev);
    form.update(|f| f.set_named(&name, value));
}

#[component]
fn MessageForm() -> impl IntoView {
    let page = expect_context::<Memo<Page>>();
    let form = expect_context::<RwSignal<ContactForm>>();
    let value = move |field: ContactField| move || form.with(|f| f.get(field).to_string());

    view! {
        <div>
            <h3 class="text-xl font-bold mb-6">"Send a Message"</h3>
            <div class="space-y-6">
                <input
                    type="text"
                    name=ContactField::Name.input_name()
                    placeholder="Your Name"
                    prop:value=value(ContactField::Name)
                    on:input=move |ev| fill_in(form, &ev)
                    class=INPUT_CLASS
                />
                <input
                    type="email"
                    name=ContactField::Email.input_name()
                    placeholder="Your Email"
                    prop:value=value(ContactField::Email)
                    on:input=move |ev| fill_in(form, &ev)
                    class=INPUT_CLASS
                />
                <textarea
                    name=ContactField::Message.input_name()
                    rows=4
                    placeholder="Your Message"
                    prop:value=value(ContactField::Message)
                    on:input=move |ev| fill_in(form, &ev)
                    class=format!("{INPUT_CLASS} resize-none")
                ></textarea>
                <a
                    href=move || page.with(|p| p.mail_link.clone())
                    class="block w-full text-center px-8 py-3 bg-black text-white rounded-xl font-semibold hover:bg-gray-800 transition-all duration-300 hover:scale-105"
                >
                    "Send Message"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let page = expect_context::<Memo<Page>>();
    let contact = &portfolio().contact;
    let icon_class = "text-gray-500 hover:text-black transition-colors";

    view! {
        <footer class="py-8 border-t border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-500 mb-4 md:mb-0">
                        {move || page.with(|p| p.copyright.clone())}
                    </p>
                    <div class="flex space-x-6">
                        <a
                            href=contact.github.href.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=icon_class
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=contact.linkedin.href.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=icon_class
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a href=portfolio().mailto() class=icon_class aria-label="Email">
                            <i class="extra-email"></i>
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
