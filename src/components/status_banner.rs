//! Transient success/error message below the forms.

use leptos::prelude::*;

use crate::state::banner::BannerState;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerState>>();

    let class = move || banner.with(BannerState::class);
    let text = move || banner.with(|b| b.current().map(|current| current.text.clone()).unwrap_or_default());

    view! {
        <div id="message" class=class>
            {text}
        </div>
    }
}
