use leptos::prelude::*;

use crate::{
    content::{portfolio, Job, Project},
    region::Region,
};

use super::homepage::Section;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <Section region=Region::Experience>
            <div class="space-y-8">
                {portfolio().jobs.iter().map(|job| view! { <JobCard job /> }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn JobCard(job: &'static Job) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-8 shadow-md hover:shadow-xl transition-all duration-300 hover:scale-[1.02]">
            <h3 class="text-xl font-bold text-black mb-2">{job.title.as_str()}</h3>
            <h4 class="text-lg text-gray-600 mb-2">{job.organization.as_str()}</h4>
            <div class="flex items-center gap-4 text-gray-500 mb-4">
                <div class="flex items-center gap-2">
                    <i class="extra-location"></i>
                    <span>{job.location.as_str()}</span>
                </div>
                <div class="flex items-center gap-2">
                    <i class="extra-calendar"></i>
                    <span>{job.period.as_str()}</span>
                </div>
            </div>
            <ul class="space-y-2">
                {job
                    .highlights
                    .iter()
                    .map(|highlight| {
                        view! {
                            <li class="text-gray-600 flex items-start">
                                <span class="text-gray-400 mr-3">"•"</span>
                                <span>{highlight.as_str()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <Section region=Region::Projects class="py-20 bg-gray-50">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {portfolio()
                    .projects
                    .iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <a href=project.link.as_str() target="_blank" rel="noopener noreferrer" class="block">
            <div class="bg-white rounded-xl p-6 shadow-md hover:shadow-xl transition-all duration-300 hover:scale-105 group h-full flex flex-col">
                <div class="flex items-start justify-between mb-4">
                    <h3 class="text-xl font-bold text-black group-hover:text-gray-800">
                        {project.title.as_str()}
                    </h3>
                    <i class="extra-link text-gray-500 group-hover:text-black transition-colors"></i>
                </div>
                <p class="text-gray-600 mb-4 leading-relaxed flex-grow">
                    {project.description.as_str()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-gray-100 text-gray-600 text-sm rounded-full">
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center justify-between mt-auto">
                    <span class="text-sm text-green-600">{project.status.as_str()}</span>
                </div>
            </div>
        </a>
    }
}
