use leptos::prelude::*;

use crate::{content::portfolio, region::Region};

use super::homepage::Section;

#[component]
pub fn Resume() -> impl IntoView {
    let resume = &portfolio().resume;
    view! {
        <Section region=Region::Resume width="max-w-4xl">
            <div class="text-center mb-12">
                <a
                    href=resume.link.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-3 px-8 py-4 bg-black text-white rounded-xl font-semibold hover:bg-gray-800 transition-all duration-300 hover:scale-105"
                >
                    <i class="extra-download"></i>
                    "View Full Resume"
                </a>
            </div>
            <div class="grid md:grid-cols-2 gap-8">
                <Card icon="extra-education" title="Education">
                    {resume
                        .education
                        .iter()
                        .map(|ed| {
                            view! {
                                <div>
                                    <h4 class="font-semibold text-black">{ed.school.as_str()}</h4>
                                    <p class="text-gray-600">{ed.degree.as_str()}</p>
                                    <p class="text-gray-500">{ed.location.as_str()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </Card>
                <Card icon="extra-award" title="Certifications">
                    {resume
                        .certifications
                        .iter()
                        .map(|cert| {
                            view! {
                                <div>
                                    <h4 class="font-semibold text-black">{cert.name.as_str()}</h4>
                                    <p class="text-gray-600">{cert.issuer.as_str()}</p>
                                    <p class="text-gray-500">{cert.date.as_str()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </Card>
                <div class="bg-gray-50 rounded-xl p-6 md:col-span-2">
                    <div class="flex items-center gap-3 mb-4">
                        <i class="extra-code text-gray-500"></i>
                        <h3 class="text-xl font-bold">"Technical Skills"</h3>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        {resume
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="px-3 py-2 bg-gray-100 text-center rounded-lg text-gray-600">
                                        {skill.as_str()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn Card(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-gray-50 rounded-xl p-6">
            <div class="flex items-center gap-3 mb-4">
                <i class=format!("{icon} text-gray-500")></i>
                <h3 class="text-xl font-bold">{title}</h3>
            </div>
            <div class="space-y-3">{children()}</div>
        </div>
    }
}
