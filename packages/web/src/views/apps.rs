use dioxus::prelude::*;

use domain::AppKey;
use ui::views::{
    BrandVoiceView, HomeView, LinksView, TemplateDetailView, TemplatesView, WikiIndexView,
    WikiPageView,
};
use ui::RequireApp;

#[component]
pub fn Home() -> Element {
    rsx! {
        HomeView {}
    }
}

#[component]
pub fn Links() -> Element {
    rsx! {
        RequireApp { app: AppKey::Links, LinksView {} }
    }
}

#[component]
pub fn WikiIndex() -> Element {
    rsx! {
        RequireApp { app: AppKey::Wiki, WikiIndexView {} }
    }
}

#[component]
pub fn WikiPage(slug: String) -> Element {
    rsx! {
        RequireApp { app: AppKey::Wiki, WikiPageView { slug } }
    }
}

#[component]
pub fn Templates() -> Element {
    rsx! {
        RequireApp { app: AppKey::Templates, TemplatesView {} }
    }
}

#[component]
pub fn TemplateDetail(id: String) -> Element {
    rsx! {
        RequireApp { app: AppKey::Templates, TemplateDetailView { id } }
    }
}

#[component]
pub fn BrandVoice() -> Element {
    rsx! {
        RequireApp { app: AppKey::BrandVoice, BrandVoiceView {} }
    }
}
